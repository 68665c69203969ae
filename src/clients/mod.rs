pub mod http;
pub mod transport;

pub use self::http::HttpClient;
pub use self::transport::{FetchedPage, Transport};

#[cfg(test)]
pub(crate) mod testing;
