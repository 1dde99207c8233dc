#![cfg(target_arch = "wasm32")]
use leptos::*;
use nucamp::components::comment_form::CommentForm;
use nucamp::models::comment::{NewComment, Rating};
use wasm_bindgen_test::*;

mod support;
use support::{click, fill, mount_container, press_key, query, remove_container, settle, text};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn test_button_opens_modal() {
    let container = mount_container("comment-form-open");
    mount_to(container.clone(), || {
        view! { <CommentForm campsite_id=0 on_submit=|_: NewComment| {}/> }
    });
    settle().await;

    assert!(query(&container, ".modal").is_none(), "modal should start closed");
    click(&container, "button.btn-outline-secondary");
    settle().await;

    assert!(query(&container, ".modal").is_some(), "modal should be open");
    assert!(query(&container, "select#rating").is_some());
    assert!(query(&container, "input#author").is_some());
    assert!(query(&container, "textarea#text").is_some());

    remove_container(&container);
}

#[wasm_bindgen_test]
async fn test_invalid_submission_is_blocked() {
    let container = mount_container("comment-form-invalid");
    let submitted = create_rw_signal(None::<NewComment>);
    mount_to(container.clone(), move || {
        view! { <CommentForm campsite_id=1 on_submit=move |c: NewComment| submitted.set(Some(c))/> }
    });
    settle().await;

    click(&container, "button.btn-outline-secondary");
    settle().await;
    fill(&container, "input#author", "J");
    click(&container, "button[type=submit]");
    settle().await;

    assert!(submitted.get_untracked().is_none(), "callback must not run");
    assert!(query(&container, ".modal").is_some(), "modal should stay open");
    let shown = text(&container);
    assert!(shown.contains("Required"));
    assert!(shown.contains("Must be at least 2 characters"));

    remove_container(&container);
}

#[wasm_bindgen_test]
async fn test_valid_submission_calls_back_and_closes() {
    let container = mount_container("comment-form-valid");
    let submitted = create_rw_signal(None::<NewComment>);
    mount_to(container.clone(), move || {
        view! { <CommentForm campsite_id=3 on_submit=move |c: NewComment| submitted.set(Some(c))/> }
    });
    settle().await;

    click(&container, "button.btn-outline-secondary");
    settle().await;
    fill(&container, "select#rating", "5");
    fill(&container, "input#author", "Jo");
    fill(&container, "textarea#text", "Great spot");
    click(&container, "button[type=submit]");
    settle().await;

    assert_eq!(
        submitted.get_untracked(),
        Some(NewComment {
            campsite_id: 3,
            rating: Rating::new(5).unwrap(),
            author: "Jo".into(),
            text: "Great spot".into(),
        })
    );
    assert!(query(&container, ".modal").is_none(), "modal should close");

    remove_container(&container);
}

#[wasm_bindgen_test]
async fn test_dismissal_discards_draft() {
    let container = mount_container("comment-form-dismiss");
    mount_to(container.clone(), || {
        view! { <CommentForm campsite_id=2 on_submit=|_: NewComment| {}/> }
    });
    settle().await;

    click(&container, "button.btn-outline-secondary");
    settle().await;
    fill(&container, "input#author", "Half typed");
    click(&container, "button.close");
    settle().await;
    assert!(query(&container, ".modal").is_none());

    click(&container, "button.btn-outline-secondary");
    settle().await;
    let author = query(&container, "input#author")
        .and_then(|e| wasm_bindgen::JsCast::dyn_into::<web_sys::HtmlInputElement>(e).ok())
        .map(|input| input.value());
    assert_eq!(author.as_deref(), Some(""));

    remove_container(&container);
}

#[wasm_bindgen_test]
async fn test_backdrop_click_dismisses_but_dialog_click_does_not() {
    let container = mount_container("comment-form-backdrop");
    let submitted = create_rw_signal(None::<NewComment>);
    mount_to(container.clone(), move || {
        view! { <CommentForm campsite_id=2 on_submit=move |c: NewComment| submitted.set(Some(c))/> }
    });
    settle().await;

    click(&container, "button.btn-outline-secondary");
    settle().await;
    fill(&container, "input#author", "Half typed");

    click(&container, ".modal-body");
    settle().await;
    assert!(query(&container, ".modal").is_some(), "clicks inside the dialog keep it open");

    click(&container, ".modal");
    settle().await;
    assert!(query(&container, ".modal").is_none(), "backdrop click should close the modal");
    assert!(submitted.get_untracked().is_none());

    click(&container, "button.btn-outline-secondary");
    settle().await;
    let author = query(&container, "input#author")
        .and_then(|e| wasm_bindgen::JsCast::dyn_into::<web_sys::HtmlInputElement>(e).ok())
        .map(|input| input.value());
    assert_eq!(author.as_deref(), Some(""));

    remove_container(&container);
}

#[wasm_bindgen_test]
async fn test_escape_dismisses_modal() {
    let container = mount_container("comment-form-escape");
    let submitted = create_rw_signal(None::<NewComment>);
    mount_to(container.clone(), move || {
        view! { <CommentForm campsite_id=2 on_submit=move |c: NewComment| submitted.set(Some(c))/> }
    });
    settle().await;

    click(&container, "button.btn-outline-secondary");
    settle().await;
    fill(&container, "textarea#text", "Never mind");

    press_key(&container, "textarea#text", "Enter");
    settle().await;
    assert!(query(&container, ".modal").is_some(), "other keys leave the modal open");

    press_key(&container, "textarea#text", "Escape");
    settle().await;
    assert!(query(&container, ".modal").is_none(), "Escape should close the modal");
    assert!(submitted.get_untracked().is_none());

    remove_container(&container);
}
