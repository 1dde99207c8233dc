// src/models/comment.rs
use serde::{Deserialize, Serialize};

/// Star rating attached to a comment. Only the values 1 through 5 exist.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Rating(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value).ok_or_else(|| format!("rating {} is outside 1-5", value))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u32,
    pub campsite_id: u32,     // Campsite the comment belongs to
    pub rating: Rating,
    pub text: String,
    pub author: String,
    pub date: String,         // ISO-8601 timestamp as stored
}

/// A validated comment as submitted by the comment form, before the store
/// assigns it an id and a date.
#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub campsite_id: u32,
    pub rating: Rating,
    pub author: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_accepts_only_one_through_five() {
        assert!(Rating::new(0).is_none());
        assert!(Rating::new(6).is_none());
        for value in 1..=5 {
            assert_eq!(Rating::new(value).map(Rating::value), Some(value));
        }
    }

    #[test]
    fn comment_reads_camel_case_json() {
        let json = r#"{"id":7,"campsiteId":2,"rating":4,"text":"Nice","author":"Ann","date":"2018-10-25T16:30Z"}"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.campsite_id, 2);
        assert_eq!(comment.rating.value(), 4);
    }

    #[test]
    fn comment_with_out_of_range_rating_is_rejected() {
        let json = r#"{"id":7,"campsiteId":2,"rating":9,"text":"Nice","author":"Ann","date":"2018-10-25T16:30Z"}"#;
        assert!(serde_json::from_str::<Comment>(json).is_err());
    }
}
