use leptos::*;
use leptos_router::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="row">
                    <div class="col-4 col-sm-2 offset-1">
                        <h5>"Links"</h5>
                        <ul class="list-unstyled">
                            <li><A href="/home">"Home"</A></li>
                            <li><A href="/directory">"Directory"</A></li>
                            <li><A href="/aboutus">"About"</A></li>
                            <li><A href="/contactus">"Contact"</A></li>
                        </ul>
                    </div>
                    <div class="col-6 col-sm-3 text-center">
                        <h5>"Social"</h5>
                        <a class="btn btn-social-icon btn-instagram" href="http://instagram.com/">
                            <i class="fa fa-instagram"></i>
                        </a>
                        " "
                        <a class="btn btn-social-icon btn-facebook" href="http://www.facebook.com/">
                            <i class="fa fa-facebook"></i>
                        </a>
                        " "
                        <a class="btn btn-social-icon btn-twitter" href="http://twitter.com/">
                            <i class="fa fa-twitter"></i>
                        </a>
                    </div>
                    <div class="col-sm-4 text-center">
                        <a role="button" class="btn btn-link" href="tel:+12065551234">
                            <i class="fa fa-phone"></i>
                            " 1-206-555-1234"
                        </a>
                        <br/>
                        <a role="button" class="btn btn-link" href="mailto:notreal@notreal.fake">
                            <i class="fa fa-envelope-o"></i>
                            " campsites@nucamp.co"
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
