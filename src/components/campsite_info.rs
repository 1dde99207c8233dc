/// Detail page for one campsite: its card, its comments and the comment form.
use leptos::*;

use crate::components::breadcrumb::Breadcrumb;
use crate::components::comments_list::CommentsList;
use crate::components::loading::Loading;
use crate::models::campsite::Campsite;
use crate::models::comment::{Comment, NewComment};

/// Which of the page's mutually exclusive renderings applies.
#[derive(Debug, Clone, PartialEq)]
pub enum PageBranch {
    Loading,
    Error(String),
    Loaded,
    Empty,
}

impl PageBranch {
    /// Loading wins over an error, an error wins over data. An empty error
    /// message counts as no error.
    pub fn resolve(is_loading: bool, err_mess: Option<&str>, has_campsite: bool) -> Self {
        match err_mess {
            _ if is_loading => PageBranch::Loading,
            Some(message) if !message.is_empty() => PageBranch::Error(message.to_string()),
            _ if has_campsite => PageBranch::Loaded,
            _ => PageBranch::Empty,
        }
    }
}

#[component]
pub fn CampsiteCard(campsite: Campsite) -> impl IntoView {
    let alt = campsite.name.clone();
    view! {
        <div class="col-md-5 m-1">
            <div class="card">
                <img class="card-img-top" src=campsite.image alt=alt/>
                <div class="card-body">
                    <p class="card-text">{campsite.description}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn CampsiteInfo(
    campsite: Option<Campsite>,
    comments: Vec<Comment>,
    #[prop(optional)] is_loading: bool,
    #[prop(optional_no_strip)] err_mess: Option<String>,
    #[prop(into)] post_comment: Callback<NewComment>,
) -> impl IntoView {
    let branch = PageBranch::resolve(is_loading, err_mess.as_deref(), campsite.is_some());
    match (branch, campsite) {
        (PageBranch::Loading, _) => view! {
            <div class="container">
                <div class="row">
                    <Loading/>
                </div>
            </div>
        }
        .into_view(),
        (PageBranch::Error(message), _) => view! {
            <div class="container">
                <div class="row">
                    <div class="col">
                        <h4 class="text-danger">{message}</h4>
                    </div>
                </div>
            </div>
        }
        .into_view(),
        (PageBranch::Loaded, Some(campsite)) => {
            let campsite_id = campsite.id;
            let name = campsite.name.clone();
            view! {
                <div class="container">
                    <div class="row">
                        <div class="col">
                            <Breadcrumb
                                links=vec![("Home", "/home"), ("Directory", "/directory")]
                                active=name.clone()
                            />
                            <h2>{name}</h2>
                            <hr/>
                        </div>
                    </div>
                    <div class="row">
                        <CampsiteCard campsite=campsite/>
                        <CommentsList
                            comments=comments
                            campsite_id=campsite_id
                            post_comment=post_comment
                        />
                    </div>
                </div>
            }
            .into_view()
        }
        _ => ().into_view(),
    }
}
