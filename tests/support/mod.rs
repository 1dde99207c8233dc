#![allow(dead_code)]
//! DOM helpers shared by the browser tests.
use gloo_timers::future::sleep;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventInit, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, KeyboardEvent, KeyboardEventInit,
};

pub fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Appends an empty container with the given id to the body.
pub fn mount_container(id: &str) -> HtmlElement {
    let document = document();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container.unchecked_into::<HtmlElement>()
}

pub fn remove_container(container: &HtmlElement) {
    document().body().unwrap().remove_child(container).unwrap();
}

pub fn query(container: &HtmlElement, selector: &str) -> Option<Element> {
    container.query_selector(selector).ok().flatten()
}

pub fn text(container: &HtmlElement) -> String {
    container.text_content().unwrap_or_default()
}

pub fn click(container: &HtmlElement, selector: &str) {
    let element = query(container, selector).unwrap_or_else(|| panic!("no element for {}", selector));
    element.unchecked_into::<HtmlElement>().click();
}

/// Sets the value of an input, select or textarea and fires a bubbling
/// `input` or `change` event so delegated handlers see it.
pub fn fill(container: &HtmlElement, selector: &str, value: &str) {
    let element = query(container, selector).unwrap_or_else(|| panic!("no element for {}", selector));
    let event_name = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
        "input"
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.set_value(value);
        "input"
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
        "change"
    } else {
        panic!("{} is not a form control", selector);
    };
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict(event_name, &init).unwrap();
    element.dispatch_event(&event).unwrap();
}

/// Fires a bubbling `keydown` for `key` from the matched element.
pub fn press_key(container: &HtmlElement, selector: &str, key: &str) {
    let element = query(container, selector).unwrap_or_else(|| panic!("no element for {}", selector));
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    element.dispatch_event(&event).unwrap();
}

/// Gives the reactive system a moment to flush DOM updates.
pub async fn settle() {
    sleep(Duration::from_millis(50)).await;
}
