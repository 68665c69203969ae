use async_trait::async_trait;
use std::collections::HashMap;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use crate::clients::transport::{FetchedPage, Transport};
use crate::config::Settings;
use crate::error::Result;
use tracing::{debug, warn};

/// `reqwest` client sending the configured user agent and extra headers on
/// every request.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(settings.api.user_agent.as_str())
            .default_headers(header_map(&settings.api.headers))
            .build()?;

        debug!(user_agent = %settings.api.user_agent, "HTTP client ready");

        Ok(Self { client })
    }
}

/// Configured headers as a `HeaderMap`; entries that are not valid HTTP are
/// dropped with a warning.
fn header_map(configured: &HashMap<String, String>) -> HeaderMap {
    configured
        .iter()
        .filter_map(|(name, value)| {
            match (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(value)) {
                (Ok(name), Ok(value)) => Some((name, value)),
                _ => {
                    warn!(header = %name, "Skipping malformed configured header");
                    None
                }
            }
        })
        .collect()
}

#[async_trait]
impl Transport for HttpClient {
    async fn get(&self, url: &str) -> Result<FetchedPage> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let final_url = response.url().to_string();

        debug!(
            status = status.as_u16(),
            url = %final_url,
            "Response received"
        );

        let body = response.text().await?;

        Ok(FetchedPage::new(status, final_url, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_headers_are_skipped() {
        let configured = HashMap::from([
            ("Content-Type".to_string(), "text/html; charset=utf-8".to_string()),
            ("Bad Header".to_string(), "x".to_string()),
            ("X-Note".to_string(), "line\nbreak".to_string()),
        ]);

        let headers = header_map(&configured);
        assert_eq!(headers.len(), 1);
        assert_eq!(headers["content-type"], "text/html; charset=utf-8");
    }

    #[test]
    fn client_builds_from_default_settings() {
        assert!(HttpClient::new(&Settings::default()).is_ok());
    }
}
