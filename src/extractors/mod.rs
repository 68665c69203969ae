pub mod markup;
pub mod page;

pub use markup::Document;
pub use page::{extract_landing, extract_reviews, LandingPage};
