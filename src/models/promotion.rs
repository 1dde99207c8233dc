// src/models/promotion.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Promotion {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub featured: bool,
    pub cost: u32,            // Price in whole dollars
    pub description: String,
}
