use leptos::*;
use leptos_router::A;

const NAV_LINKS: [(&str, &str, &str); 4] = [
    ("/home", "fa fa-home fa-lg", "Home"),
    ("/directory", "fa fa-list fa-lg", "Directory"),
    ("/aboutus", "fa fa-info fa-lg", "About"),
    ("/contactus", "fa fa-address-card fa-lg", "Contact Us"),
];

#[component]
pub fn Header() -> impl IntoView {
    // Navbar collapse state on narrow screens
    let (is_nav_open, set_nav_open) = create_signal(false);

    view! {
        <div class="jumbotron jumbotron-fluid">
            <div class="container">
                <div class="row">
                    <div class="col">
                        <h1>"NuCamp"</h1>
                        <h2>"a better way to camp"</h2>
                    </div>
                </div>
            </div>
        </div>
        <nav class="navbar navbar-dark navbar-expand-md sticky-top">
            <div class="container">
                <A class="navbar-brand mr-auto" href="/home">
                    <img src="/assets/images/logo.png" height="30" width="30" alt="NuCamp Logo"/>
                </A>
                <button
                    type="button"
                    class="navbar-toggler"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_nav_open.update(|open| *open = !*open)
                >
                    <span class="navbar-toggler-icon"></span>
                </button>
                <div class="collapse navbar-collapse" class:show=move || is_nav_open.get()>
                    <ul class="navbar-nav">
                        {NAV_LINKS
                            .iter()
                            .map(|&(href, icon, label)| view! {
                                <li class="nav-item" on:click=move |_| set_nav_open.set(false)>
                                    <A class="nav-link" href=href>
                                        <i class=icon></i>
                                        " "
                                        {label}
                                    </A>
                                </li>
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>
        </nav>
    }
}
