use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use http::StatusCode;
use crate::clients::{FetchedPage, Transport};
use crate::error::Result;
use crate::logging::LogSink;

/// Serves canned responses by URL and records every request; unknown URLs get
/// a 404.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: HashMap<String, (StatusCode, String)>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn route(mut self, url: &str, status: StatusCode, body: impl Into<String>) -> Self {
        self.routes.insert(url.to_string(), (status, body.into()));
        self
    }

    pub fn feed_page(self, base: &str, entity_id: u64, page: u32, blocks: &str) -> Self {
        let url = format!(
            "{base}/engine/ajax/comments.php?cstart={page}&news_id={entity_id}&skin=Default"
        );
        let body = serde_json::json!({ "comments": blocks }).to_string();
        self.route(&url, StatusCode::OK, body)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<FetchedPage> {
        self.requests.lock().unwrap().push(url.to_string());
        let (status, body) = self
            .routes
            .get(url)
            .cloned()
            .unwrap_or((StatusCode::NOT_FOUND, "not found".to_string()));
        Ok(FetchedPage::new(status, url, body))
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub lines: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl LogSink for RecordingSink {
    fn info(&self, message: &str) {
        self.lines.lock().unwrap().push(format!("INFO: {message}"));
    }

    fn warning(&self, message: &str) {
        self.lines.lock().unwrap().push(format!("WARNING: {message}"));
    }

    fn error(&self, message: &str) {
        self.lines.lock().unwrap().push(format!("ERROR: {message}"));
    }
}

pub fn comment_block(id: u32, author: &str, positive: bool) -> String {
    let marker = if positive { r#"<div class="bad"></div>"# } else { "" };
    format!(
        r#"<div id="comment"><span class="reviewer">{author}</span><p class="dtreviewed">day {id}</p>{marker}<div id="comm-id-{id}">review {id}</div></div>"#
    )
}
