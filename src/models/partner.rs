// src/models/partner.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Partner {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub featured: bool,
    pub description: String,
}
