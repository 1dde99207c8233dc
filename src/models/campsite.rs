// src/models/campsite.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Campsite {
    pub id: u32,
    pub name: String,
    pub image: String,        // Path of the card image, used as stored
    pub featured: bool,       // Shown on the home page when true
    pub description: String,
}
