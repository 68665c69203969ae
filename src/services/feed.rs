use std::collections::VecDeque;
use serde::Deserialize;
use http::StatusCode;
use tracing::debug;
use crate::clients::Transport;
use crate::error::Result;
use crate::extractors::extract_reviews;
use crate::logging::LogSink;
use crate::models::Review;

#[derive(Debug, Deserialize)]
struct CommentsEnvelope {
    comments: String,
}

/// Lazy, one-shot walk over an entity's comment feed.
///
/// Pages are requested in order starting at 1, only when the reviews of the
/// previous page have been consumed. The first page without comment blocks ends
/// the feed; so does any error. Once ended the feed never yields again.
pub struct ReviewFeed<'a> {
    transport: &'a dyn Transport,
    sink: &'a dyn LogSink,
    base_url: String,
    entity_id: u64,
    next_page: u32,
    pages_requested: u32,
    buffer: VecDeque<Review>,
    finished: bool,
}

impl<'a> ReviewFeed<'a> {
    pub fn new(
        transport: &'a dyn Transport,
        sink: &'a dyn LogSink,
        base_url: &str,
        entity_id: u64,
    ) -> Self {
        Self {
            transport,
            sink,
            base_url: base_url.trim_end_matches('/').to_string(),
            entity_id,
            next_page: 1,
            pages_requested: 0,
            buffer: VecDeque::new(),
            finished: false,
        }
    }

    pub fn page_url(&self, page: u32) -> String {
        format!(
            "{}/engine/ajax/comments.php?cstart={}&news_id={}&skin=Default",
            self.base_url, page, self.entity_id
        )
    }

    pub fn pages_requested(&self) -> u32 {
        self.pages_requested
    }

    /// Next review in page-then-document order, `None` once the feed is over.
    pub async fn next(&mut self) -> Result<Option<Review>> {
        if let Some(review) = self.buffer.pop_front() {
            return Ok(Some(review));
        }
        if self.finished {
            return Ok(None);
        }

        let page = self.next_page;
        match self.fetch_page(page).await {
            Ok(reviews) if reviews.is_empty() => {
                debug!(entity_id = self.entity_id, page = page, "Feed exhausted");
                self.finished = true;
                Ok(None)
            }
            Ok(reviews) => {
                debug!(
                    entity_id = self.entity_id,
                    page = page,
                    reviews = reviews.len(),
                    "Feed page parsed"
                );
                self.next_page += 1;
                self.buffer.extend(reviews);
                Ok(self.buffer.pop_front())
            }
            Err(e) => {
                self.finished = true;
                Err(e)
            }
        }
    }

    /// Drains the feed into a vector.
    pub async fn collect_all(mut self) -> Result<Vec<Review>> {
        let mut reviews = Vec::new();
        while let Some(review) = self.next().await? {
            reviews.push(review);
        }

        debug!(
            entity_id = self.entity_id,
            pages = self.pages_requested(),
            reviews = reviews.len(),
            "Feed drained"
        );
        Ok(reviews)
    }

    async fn fetch_page(&mut self, page: u32) -> Result<Vec<Review>> {
        let url = self.page_url(page);
        self.pages_requested += 1;

        let response = self.transport.get(&url).await?;
        if response.status != StatusCode::OK {
            self.sink.error(&response.body);
        }
        let envelope: CommentsEnvelope = response.require_ok()?.json()?;

        extract_reviews(&envelope.comments).inspect_err(|e| self.sink.error(&e.to_string()))
    }
}
