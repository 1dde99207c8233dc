pub mod app;
pub mod store;

pub mod components {
    pub mod about;
    pub mod breadcrumb;
    pub mod campsite_info;
    pub mod comment_form;
    pub mod comments_list;
    pub mod contact;
    pub mod directory;
    pub mod footer;
    pub mod header;
    pub mod home;
    pub mod loading;
}

pub mod models {
    pub mod campsite;
    pub mod comment;
    pub mod partner;
    pub mod promotion;
}

pub mod utils {
    pub mod date_format;
    pub mod validators;
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    leptos::logging::log!("[CLIENT] Hydrating NuCamp");
    leptos::mount_to_body(App);
}
