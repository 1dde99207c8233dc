/// Main application entry point for NuCamp.
/// Provides the store, lays out header and footer, and maps each route to its page.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::about::About;
use crate::components::campsite_info::CampsiteInfo;
use crate::components::contact::Contact;
use crate::components::directory::Directory;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::home::HomePage;
use crate::models::comment::NewComment;
use crate::store::{provide_store, use_store, Store};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_store(Store::from_seed());

    view! {
        <Stylesheet id="leptos" href="/pkg/nucamp.css"/>
        <Title text="NuCamp"/>
        <Router>
            <Header/>
            <main>
                <Routes>
                    <Route path="/home" view=HomePage/>
                    <Route path="/aboutus" view=About/>
                    <Route path="/directory" view=Directory/>
                    <Route path="/directory/:campsiteId" view=CampsiteWithId/>
                    <Route path="/contactus" view=Contact/>
                    <Route path="" view=RedirectHome/>
                    <Route path="/*any" view=RedirectHome/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn RedirectHome() -> impl IntoView {
    view! { <Redirect path="/home"/> }
}

/// Binds the `:campsiteId` route parameter to the campsite page, feeding it
/// from the store. A missing or non-numeric id matches no campsite.
#[component]
fn CampsiteWithId() -> impl IntoView {
    let store = use_store();
    let params = use_params_map();
    let campsite_id = move || {
        params.with(|p| p.get("campsiteId").and_then(|id| id.parse::<u32>().ok()))
    };

    let post_comment = Callback::new(move |comment: NewComment| store.post_comment(comment));

    move || {
        let id = campsite_id();
        let (campsite, comments, is_loading, err_mess) = store.with(|state| {
            (
                id.and_then(|id| state.campsite_by_id(id).cloned()),
                id.map(|id| state.comments_for(id)).unwrap_or_default(),
                state.campsites.is_loading,
                state.campsites.err_mess.clone(),
            )
        });
        view! {
            <CampsiteInfo
                campsite=campsite
                comments=comments
                is_loading=is_loading
                err_mess=err_mess
                post_comment=post_comment
            />
        }
    }
}
