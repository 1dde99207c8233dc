use leptos::*;

use crate::components::breadcrumb::Breadcrumb;
use crate::models::partner::Partner;
use crate::store::use_store;

#[component]
fn PartnerEntry(partner: Partner) -> impl IntoView {
    let alt = partner.name.clone();
    view! {
        <li class="media mb-4">
            <img class="mr-3" src=partner.image alt=alt width="150"/>
            <div class="media-body">
                <h5 class="mt-0">{partner.name}</h5>
                <p>{partner.description}</p>
            </div>
        </li>
    }
}

#[component]
pub fn About() -> impl IntoView {
    let store = use_store();
    let partners = move || {
        store
            .with(|state| state.partners.clone())
            .into_iter()
            .map(|partner| view! { <PartnerEntry partner=partner/> })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="container">
            <div class="row">
                <div class="col">
                    <Breadcrumb links=vec![("Home", "/home")] active="About Us"/>
                    <h2>"About Us"</h2>
                    <hr/>
                </div>
            </div>
            <div class="row row-content">
                <div class="col-sm-6">
                    <h3>"Our Mission"</h3>
                    <p>
                        "We present a curated database of the best campsites in the vast woods and \
                         backcountry of the World Wide Web Wilderness. We increase access to adventure \
                         for the public while promoting safe and respectful use of resources."
                    </p>
                </div>
                <div class="col-sm-6">
                    <div class="card">
                        <div class="card-header bg-primary text-white">
                            <h3>"Facts At a Glance"</h3>
                        </div>
                        <div class="card-body">
                            <dl class="row">
                                <dt class="col-6">"Founded"</dt>
                                <dd class="col-6">"February 3, 2016"</dd>
                                <dt class="col-6">"No. of Campsites in 2019"</dt>
                                <dd class="col-6">"563"</dd>
                                <dt class="col-6">"No. of Reviews in 2019"</dt>
                                <dd class="col-6">"4388"</dd>
                                <dt class="col-6">"Employees"</dt>
                                <dd class="col-6">"42"</dd>
                            </dl>
                        </div>
                    </div>
                </div>
            </div>
            <div class="row row-content">
                <div class="col-12">
                    <h3>"Community Partners"</h3>
                </div>
                <div class="col mt-4">
                    <ul class="list-unstyled">{partners}</ul>
                </div>
            </div>
        </div>
    }
}
