mod rating;
mod review;
mod report;

pub use rating::Rating;
pub use review::{Author, Review, ReviewStatus};
pub use report::ExtractionReport;
