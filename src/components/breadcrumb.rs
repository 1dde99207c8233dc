use leptos::*;
use leptos_router::A;

/// Breadcrumb trail of `(label, href)` links ending in the current page.
#[component]
pub fn Breadcrumb(links: Vec<(&'static str, &'static str)>, #[prop(into)] active: String) -> impl IntoView {
    view! {
        <nav aria-label="breadcrumb">
            <ol class="breadcrumb">
                {links
                    .into_iter()
                    .map(|(label, href)| view! {
                        <li class="breadcrumb-item"><A href=href>{label}</A></li>
                    })
                    .collect::<Vec<_>>()}
                <li class="breadcrumb-item active" aria-current="page">{active}</li>
            </ol>
        </nav>
    }
}
