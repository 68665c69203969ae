use chrono::{DateTime, Utc};
use http::StatusCode;
use tracing::debug;
use crate::clients::{HttpClient, Transport};
use crate::config::Settings;
use crate::error::Result;
use crate::extractors::{extract_landing, LandingPage};
use crate::logging::{LogSink, TracingSink};
use crate::models::{ExtractionReport, Rating, Review};
use crate::services::feed::ReviewFeed;

/// Scrapes the rating and all reviews of one entity.
///
/// ```no_run
/// # async fn run() -> otzyvy_scraper::Result<()> {
/// let mut scraper = otzyvy_scraper::ReviewScraper::new("5121-mtt-otzyvy")?;
/// let reviews = scraper.start().await?.reviews().len();
/// # Ok(())
/// # }
/// ```
pub struct ReviewScraper<T: Transport = HttpClient> {
    slug: String,
    base_url: String,
    transport: T,
    sink: Box<dyn LogSink>,
    id: Option<u64>,
    rating: Rating,
    reviews: Vec<Review>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl ReviewScraper<HttpClient> {
    pub fn new(slug: impl Into<String>) -> Result<Self> {
        Self::with_settings(slug, &Settings::default())
    }

    pub fn with_settings(slug: impl Into<String>, settings: &Settings) -> Result<Self> {
        let client = HttpClient::new(settings)?;
        Ok(Self::with_transport(slug, settings.base_url(), client))
    }
}

impl<T: Transport> ReviewScraper<T> {
    pub fn with_transport(slug: impl Into<String>, base_url: &str, transport: T) -> Self {
        Self {
            slug: slug.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            sink: Box::new(TracingSink),
            id: None,
            rating: Rating::new(),
            reviews: Vec::new(),
            started_at: None,
            completed_at: None,
        }
    }

    pub fn with_sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn rating(&self) -> &Rating {
        &self.rating
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn landing_url(&self) -> String {
        format!("{}/{}.html", self.base_url, self.slug)
    }

    /// Fetches the landing page and the whole comment feed.
    ///
    /// Previous results are dropped first; on error the scraper is left empty.
    pub async fn start(&mut self) -> Result<&mut Self> {
        self.reset();
        self.sink.info("scrubber is started");
        let started_at = Utc::now();

        let landing = self.fetch_landing().await?;
        let mut rating = Rating::new();
        rating.set_average(landing.average_rating)?;

        debug!(
            slug = %self.slug,
            entity_id = landing.entity_id,
            "Entity identifier resolved"
        );

        let reviews = ReviewFeed::new(
            &self.transport,
            self.sink.as_ref(),
            &self.base_url,
            landing.entity_id,
        )
        .collect_all()
        .await?;

        debug!(
            slug = %self.slug,
            reviews = reviews.len(),
            "Feed harvested"
        );

        self.id = Some(landing.entity_id);
        self.rating = rating;
        self.reviews = reviews;
        self.started_at = Some(started_at);
        self.completed_at = Some(Utc::now());

        self.sink.info("scrubber is finished");
        Ok(self)
    }

    /// Snapshot of the last successful run.
    pub fn report(&self) -> Option<ExtractionReport> {
        Some(ExtractionReport {
            slug: self.slug.clone(),
            entity_id: self.id?,
            rating: self.rating.clone(),
            reviews: self.reviews.clone(),
            extraction_started_at: self.started_at?,
            extraction_completed_at: self.completed_at?,
        })
    }

    fn reset(&mut self) {
        self.id = None;
        self.rating = Rating::new();
        self.reviews.clear();
        self.started_at = None;
        self.completed_at = None;
    }

    async fn fetch_landing(&self) -> Result<LandingPage> {
        let response = self.transport.get(&self.landing_url()).await?;
        if response.status != StatusCode::OK {
            self.sink.error(&response.body);
        }
        let page = response.require_ok()?;

        extract_landing(&page.body).inspect_err(|e| self.sink.error(&e.to_string()))
    }
}
