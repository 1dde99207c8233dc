/// Application state shared by every page.
/// `AppState` is plain data updated through `Action`s; `Store` wraps it in a
/// signal and is provided to the component tree as context.
use leptos::logging::{error, log, warn};
use leptos::*;
use serde::Deserialize;
use thiserror::Error;

use crate::models::campsite::Campsite;
use crate::models::comment::{Comment, NewComment};
use crate::models::partner::Partner;
use crate::models::promotion::Promotion;
use crate::utils::date_format::now_iso;

const SEED: &str = include_str!("shared/db.json");

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to load campsite data: {0}")]
    Seed(#[from] serde_json::Error),
    #[error("No campsite with id {0}")]
    UnknownCampsite(u32),
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Seed {
    pub campsites: Vec<Campsite>,
    pub comments: Vec<Comment>,
    pub partners: Vec<Partner>,
    pub promotions: Vec<Promotion>,
}

impl Seed {
    pub fn parse(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampsitesState {
    pub is_loading: bool,
    pub err_mess: Option<String>,
    pub campsites: Vec<Campsite>,
}

impl Default for CampsitesState {
    fn default() -> Self {
        // Nothing has arrived yet
        CampsitesState {
            is_loading: true,
            err_mess: None,
            campsites: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    CampsitesLoading,
    CampsitesFailed(String),
    AddCampsites(Vec<Campsite>),
    AddComments(Vec<Comment>),
    AddPartners(Vec<Partner>),
    AddPromotions(Vec<Promotion>),
    PostComment(NewComment),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub campsites: CampsitesState,
    pub comments: Vec<Comment>,
    pub partners: Vec<Partner>,
    pub promotions: Vec<Promotion>,
}

impl AppState {
    /// Builds the state from a JSON dataset. A dataset that fails to parse
    /// leaves the campsites in the error state instead of failing.
    pub fn from_json(json: &str) -> Self {
        let mut state = AppState::default();
        match Seed::parse(json) {
            Ok(seed) => {
                state.apply_all([
                    Action::AddCampsites(seed.campsites),
                    Action::AddComments(seed.comments),
                    Action::AddPartners(seed.partners),
                    Action::AddPromotions(seed.promotions),
                ]);
            }
            Err(e) => {
                error!("[STORE] {}", e);
                state.apply_all([Action::CampsitesFailed(e.to_string())]);
            }
        }
        state
    }

    fn apply_all(&mut self, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            if let Err(e) = self.apply(action) {
                error!("[STORE] Action rejected: {}", e);
            }
        }
    }

    pub fn apply(&mut self, action: Action) -> Result<(), StoreError> {
        match action {
            Action::CampsitesLoading => {
                self.campsites = CampsitesState::default();
            }
            Action::CampsitesFailed(message) => {
                self.campsites = CampsitesState {
                    is_loading: false,
                    err_mess: Some(message),
                    campsites: Vec::new(),
                };
            }
            Action::AddCampsites(campsites) => {
                self.campsites = CampsitesState {
                    is_loading: false,
                    err_mess: None,
                    campsites,
                };
            }
            Action::AddComments(comments) => self.comments = comments,
            Action::AddPartners(partners) => self.partners = partners,
            Action::AddPromotions(promotions) => self.promotions = promotions,
            Action::PostComment(new_comment) => {
                if self.campsite_by_id(new_comment.campsite_id).is_none() {
                    return Err(StoreError::UnknownCampsite(new_comment.campsite_id));
                }
                let id = self.comments.iter().map(|c| c.id + 1).max().unwrap_or(0);
                self.comments.push(Comment {
                    id,
                    campsite_id: new_comment.campsite_id,
                    rating: new_comment.rating,
                    text: new_comment.text,
                    author: new_comment.author,
                    date: now_iso(),
                });
            }
        }
        Ok(())
    }

    pub fn campsite_by_id(&self, id: u32) -> Option<&Campsite> {
        self.campsites.campsites.iter().find(|c| c.id == id)
    }

    /// Comments for one campsite in the order they were added.
    pub fn comments_for(&self, campsite_id: u32) -> Vec<Comment> {
        self.comments
            .iter()
            .filter(|c| c.campsite_id == campsite_id)
            .cloned()
            .collect()
    }

    pub fn featured_campsite(&self) -> Option<&Campsite> {
        self.campsites.campsites.iter().find(|c| c.featured)
    }

    pub fn featured_promotion(&self) -> Option<&Promotion> {
        self.promotions.iter().find(|p| p.featured)
    }

    pub fn featured_partner(&self) -> Option<&Partner> {
        self.partners.iter().find(|p| p.featured)
    }
}

#[derive(Clone, Copy)]
pub struct Store {
    state: RwSignal<AppState>,
}

impl Store {
    pub fn from_seed() -> Self {
        Self::new(AppState::from_json(SEED))
    }

    pub fn new(state: AppState) -> Self {
        Store {
            state: create_rw_signal(state),
        }
    }

    pub fn dispatch(&self, action: Action) {
        let result = self.state.try_update(|state| state.apply(action));
        match result {
            Some(Ok(())) => {}
            Some(Err(e)) => warn!("[STORE] Action rejected: {}", e),
            None => warn!("[STORE] Action dropped, store is disposed"),
        }
    }

    pub fn post_comment(&self, comment: NewComment) {
        log!(
            "[STORE] Posting comment by {} for campsite {}",
            comment.author,
            comment.campsite_id
        );
        self.dispatch(Action::PostComment(comment));
    }

    /// Reads the state, subscribing the caller to changes.
    pub fn with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.state.with(f)
    }
}

pub fn provide_store(store: Store) {
    provide_context(store);
}

pub fn use_store() -> Store {
    expect_context::<Store>()
}
