pub mod feed;
pub mod session;

pub use feed::ReviewFeed;
pub use session::ReviewScraper;
