//! Reviews and the aggregate rating of a single entity on bad-otzyvy.net.
//!
//! A [`ReviewScraper`] is built for one slug (the part of the entity URL between
//! `https://bad-otzyvy.net/` and `.html`), then [`ReviewScraper::start`] fetches
//! the landing page and walks the paginated comment feed until it runs dry.

pub mod clients;
pub mod config;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;

pub use clients::{FetchedPage, HttpClient, Transport};
pub use crate::config::Settings;
pub use error::{Error, Result};
pub use logging::{LogSink, TracingSink};
pub use models::{Author, ExtractionReport, Rating, Review, ReviewStatus};
pub use services::{ReviewFeed, ReviewScraper};
pub use utils::{parse_float, parse_int};

pub const TITLE: &str = "bad-otzyvy.net";
pub const DESCRIPTION: &str = "Bad-Good: Отзывы о компаниях";
pub const SLUG_HELP: &str =
    "Slug это то что между \"https://bad-otzyvy.net/\" и \".html\"";
