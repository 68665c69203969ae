use async_trait::async_trait;
use http::StatusCode;
use serde::de::DeserializeOwned;
use crate::error::{Error, Result};

/// A fully read response.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: StatusCode,
    pub url: String,
    pub body: String,
}

impl FetchedPage {
    pub fn new(status: StatusCode, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            url: url.into(),
            body: body.into(),
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(Error::from)
    }

    /// Turns anything but `200 OK` into [`Error::Transport`].
    pub fn require_ok(self) -> Result<Self> {
        if self.status == StatusCode::OK {
            Ok(self)
        } else {
            Err(Error::Transport {
                status: self.status.as_u16(),
                url: self.url,
                body: self.body,
            })
        }
    }
}

/// GET-only HTTP access used by the scraping pipeline.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<FetchedPage>;
}
