/// Directory of every campsite, each card linking to its detail page.
use leptos::*;
use leptos_router::A;

use crate::components::breadcrumb::Breadcrumb;
use crate::components::campsite_info::PageBranch;
use crate::components::loading::Loading;
use crate::models::campsite::Campsite;
use crate::store::use_store;

#[component]
fn DirectoryItem(campsite: Campsite) -> impl IntoView {
    let alt = campsite.name.clone();
    view! {
        <div class="col-md-5 m-1">
            <A href=format!("/directory/{}", campsite.id)>
                <div class="card directory-card">
                    <img class="card-img" width="100%" src=campsite.image alt=alt/>
                    <div class="card-img-overlay">
                        <h5 class="card-title">{campsite.name}</h5>
                    </div>
                </div>
            </A>
        </div>
    }
}

#[component]
pub fn Directory() -> impl IntoView {
    let store = use_store();

    let body = move || {
        let campsites = store.with(|state| state.campsites.clone());
        let branch = PageBranch::resolve(campsites.is_loading, campsites.err_mess.as_deref(), true);
        match branch {
            PageBranch::Loading => view! { <Loading/> }.into_view(),
            PageBranch::Error(message) => view! {
                <div class="col"><h4 class="text-danger">{message}</h4></div>
            }
            .into_view(),
            _ => campsites
                .campsites
                .into_iter()
                .map(|campsite| view! { <DirectoryItem campsite=campsite/> })
                .collect::<Vec<_>>()
                .into_view(),
        }
    };

    view! {
        <div class="container">
            <div class="row">
                <div class="col">
                    <Breadcrumb links=vec![("Home", "/home")] active="Directory"/>
                    <h2>"Directory"</h2>
                    <hr/>
                </div>
            </div>
            <div class="row">{body}</div>
        </div>
    }
}
