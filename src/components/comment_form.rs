use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::*;
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::models::comment::NewComment;
use crate::utils::validators::{parse_rating, Field, FieldError};

/// Values typed into the form while the modal is open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentDraft {
    pub rating: String,
    pub author: String,
    pub text: String,
}

impl CommentDraft {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Rating => &self.rating,
            Field::Author => &self.author,
            Field::Text => &self.text,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Rating => self.rating = value,
            Field::Author => self.author = value,
            Field::Text => self.text = value,
        }
    }

    pub fn errors(&self, field: Field) -> Vec<FieldError> {
        field.validate(self.value(field))
    }

    pub fn validate(&self, campsite_id: u32) -> Result<NewComment, InvalidDraft> {
        let errors: HashMap<Field, Vec<FieldError>> = Field::ALL
            .iter()
            .map(|&field| (field, self.errors(field)))
            .filter(|(_, errors)| !errors.is_empty())
            .collect();
        match parse_rating(&self.rating) {
            Some(rating) if errors.is_empty() => Ok(NewComment {
                campsite_id,
                rating,
                author: self.author.clone(),
                text: self.text.clone(),
            }),
            _ => Err(InvalidDraft { errors }),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("comment form has {} invalid field(s)", invalid_count(.errors))]
pub struct InvalidDraft {
    pub errors: HashMap<Field, Vec<FieldError>>,
}

fn invalid_count(errors: &HashMap<Field, Vec<FieldError>>) -> usize {
    errors.len()
}

/// Open/closed modal plus the draft it holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentFormState {
    pub is_modal_open: bool,
    pub draft: CommentDraft,
    touched: HashSet<Field>,
}

impl CommentFormState {
    /// Opening starts from an empty draft; closing throws the draft away.
    pub fn toggle_modal(&mut self) {
        self.is_modal_open = !self.is_modal_open;
        self.draft = CommentDraft::default();
        self.touched.clear();
    }

    /// Closes the modal if it is open, discarding the draft.
    pub fn dismiss(&mut self) {
        if self.is_modal_open {
            self.toggle_modal();
        }
    }

    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Errors to show for a field; untouched fields show none.
    pub fn visible_errors(&self, field: Field) -> Vec<FieldError> {
        if self.touched.contains(&field) {
            self.draft.errors(field)
        } else {
            Vec::new()
        }
    }

    /// On success the modal closes and the validated comment is returned.
    /// On failure every field is marked touched and the modal stays open.
    pub fn submit(&mut self, campsite_id: u32) -> Result<NewComment, InvalidDraft> {
        match self.draft.validate(campsite_id) {
            Ok(comment) => {
                self.toggle_modal();
                Ok(comment)
            }
            Err(invalid) => {
                self.touched.extend(Field::ALL);
                Err(invalid)
            }
        }
    }
}

#[component]
fn FieldErrors(form: RwSignal<CommentFormState>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.visible_errors(field))
            .into_iter()
            .map(|error| view! { <div class="text-danger">{error.to_string()}</div> })
            .collect::<Vec<_>>()
    }
}

#[component]
pub fn CommentForm(campsite_id: u32, #[prop(into)] on_submit: Callback<NewComment>) -> impl IntoView {
    let form = create_rw_signal(CommentFormState::default());

    let toggle_modal = move |_: ev::MouseEvent| form.update(|f| f.toggle_modal());

    let set_field = move |field: Field, value: String| form.update(|f| f.draft.set(field, value));
    let touch = move |field: Field| form.update(|f| f.touch(field));
    let field_value = move |field: Field| form.with(|f| f.draft.value(field).to_string());

    // Clicks that land on the backdrop itself, not on the dialog inside it
    let modal_ref = create_node_ref::<html::Div>();
    let close_on_backdrop = move |ev: ev::MouseEvent| {
        let on_backdrop = match (ev.target(), modal_ref.get_untracked()) {
            (Some(target), Some(modal)) => {
                AsRef::<JsValue>::as_ref(&target) == AsRef::<JsValue>::as_ref(&*modal)
            }
            _ => false,
        };
        if on_backdrop {
            log!("[COMMENT FORM] Dismissed from backdrop");
            form.update(|f| f.dismiss());
        }
    };

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && form.with_untracked(|f| f.is_modal_open) {
            log!("[COMMENT FORM] Dismissed with Escape");
            form.update(|f| f.dismiss());
        }
    });
    on_cleanup(move || escape_listener.remove());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.submit(campsite_id)) {
            Some(Ok(comment)) => {
                log!("[COMMENT FORM] Submitting comment for campsite {}", campsite_id);
                on_submit.call(comment);
            }
            Some(Err(invalid)) => log!("[COMMENT FORM] Submission blocked: {}", invalid),
            None => {}
        }
    };

    view! {
        <button type="button" class="btn btn-outline-secondary" on:click=toggle_modal>
            <i class="fa fa-pencil fa-lg"></i>
            " Submit Comment"
        </button>
        <Show when=move || form.with(|f| f.is_modal_open)>
            <div class="modal-backdrop show"></div>
            <div
                class="modal d-block"
                role="dialog"
                aria-modal="true"
                node_ref=modal_ref
                on:click=close_on_backdrop
            >
                <div class="modal-dialog" role="document">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">"Submit Comment"</h5>
                            <button type="button" class="close" aria-label="Close" on:click=toggle_modal>
                                <span aria-hidden="true">"×"</span>
                            </button>
                        </div>
                        <div class="modal-body">
                            <form on:submit=handle_submit>
                                <div class="form-group">
                                    <label for="rating">"Rating"</label>
                                    <select
                                        id="rating"
                                        name="rating"
                                        class="form-control"
                                        prop:value=move || field_value(Field::Rating)
                                        on:change=move |e| set_field(Field::Rating, event_target_value(&e))
                                        on:blur=move |_| touch(Field::Rating)
                                    >
                                        <option value=""></option>
                                        <option value="1">"1"</option>
                                        <option value="2">"2"</option>
                                        <option value="3">"3"</option>
                                        <option value="4">"4"</option>
                                        <option value="5">"5"</option>
                                    </select>
                                    <FieldErrors form=form field=Field::Rating/>
                                </div>
                                <div class="form-group">
                                    <label for="author">"Name"</label>
                                    <input
                                        type="text"
                                        id="author"
                                        name="author"
                                        class="form-control"
                                        placeholder="Your Name"
                                        prop:value=move || field_value(Field::Author)
                                        on:input=move |e| set_field(Field::Author, event_target_value(&e))
                                        on:blur=move |_| touch(Field::Author)
                                    />
                                    <FieldErrors form=form field=Field::Author/>
                                </div>
                                <div class="form-group">
                                    <label for="text">"Comment"</label>
                                    <textarea
                                        id="text"
                                        name="text"
                                        rows="6"
                                        class="form-control"
                                        placeholder="Type your comment here."
                                        prop:value=move || field_value(Field::Text)
                                        on:input=move |e| set_field(Field::Text, event_target_value(&e))
                                        on:blur=move |_| touch(Field::Text)
                                    ></textarea>
                                    <FieldErrors form=form field=Field::Text/>
                                </div>
                                <button type="submit" class="btn btn-primary">"Submit Comment"</button>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
