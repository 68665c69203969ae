use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use super::{Rating, Review};

/// Everything one successful extraction produced for a slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub slug: String,
    pub entity_id: u64,
    pub rating: Rating,
    pub reviews: Vec<Review>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub extraction_started_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub extraction_completed_at: DateTime<Utc>,
}
