use leptos::*;

use crate::components::campsite_info::PageBranch;
use crate::components::loading::Loading;
use crate::store::use_store;

/// One featured entry on the home page.
#[derive(Debug, Clone, PartialEq)]
pub struct CardData {
    pub name: String,
    pub image: String,
    pub description: String,
}

#[component]
fn RenderCard(
    item: Option<CardData>,
    #[prop(optional)] is_loading: bool,
    #[prop(optional_no_strip)] err_mess: Option<String>,
) -> impl IntoView {
    match (PageBranch::resolve(is_loading, err_mess.as_deref(), item.is_some()), item) {
        (PageBranch::Loading, _) => view! { <Loading/> }.into_view(),
        (PageBranch::Error(message), _) => view! { <h4 class="text-danger">{message}</h4> }.into_view(),
        (PageBranch::Loaded, Some(item)) => {
            let alt = item.name.clone();
            view! {
                <div class="card">
                    <img class="card-img-top" src=item.image alt=alt/>
                    <div class="card-body">
                        <h5 class="card-title">{item.name}</h5>
                        <p class="card-text">{item.description}</p>
                    </div>
                </div>
            }
            .into_view()
        }
        _ => ().into_view(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_store();

    move || {
        let (campsite, promotion, partner, is_loading, err_mess) = store.with(|state| {
            (
                state.featured_campsite().map(|c| CardData {
                    name: c.name.clone(),
                    image: c.image.clone(),
                    description: c.description.clone(),
                }),
                state.featured_promotion().map(|p| CardData {
                    name: p.name.clone(),
                    image: p.image.clone(),
                    description: format!("{} Only ${}.", p.description, p.cost),
                }),
                state.featured_partner().map(|p| CardData {
                    name: p.name.clone(),
                    image: p.image.clone(),
                    description: p.description.clone(),
                }),
                state.campsites.is_loading,
                state.campsites.err_mess.clone(),
            )
        });
        view! {
            <div class="container">
                <div class="row">
                    <div class="col-md m-1">
                        <RenderCard item=campsite is_loading=is_loading err_mess=err_mess/>
                    </div>
                    <div class="col-md m-1">
                        <RenderCard item=promotion/>
                    </div>
                    <div class="col-md m-1">
                        <RenderCard item=partner/>
                    </div>
                </div>
            </div>
        }
    }
}
