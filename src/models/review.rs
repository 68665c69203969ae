use serde::{Deserialize, Serialize};
use std::fmt;
use super::rating::Rating;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Negative,
    Positive,
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewStatus::Negative => f.write_str("negative"),
            ReviewStatus::Positive => f.write_str("positive"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A single comment left on an entity page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub text: String,
    /// Date exactly as the site prints it.
    pub date: String,
    pub status: ReviewStatus,
    /// The feed carries no per-review stars; always `None` when scraped.
    pub rating: Option<Rating>,
    pub author: Author,
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: {} -> {}>", self.date, self.author.name(), self.status)
    }
}
