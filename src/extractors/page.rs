//! Site-specific extraction of the landing page and comment feed fragments.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use crate::error::{Error, Result};
use crate::extractors::markup::{self, find_by_attr_pattern, text_of, Document};
use crate::models::{Author, Review, ReviewStatus};
use crate::utils::parse_int;

const AVERAGE_RATING: &str = "div.trusting > p.trustings > span";
const CANONICAL_URL: &str = r#"meta[property="og:url"]"#;
const COMMENT_BLOCK: &str = r#"div[id="comment"]"#;
const REVIEW_DATE: &str = "p.dtreviewed";
const REVIEWER: &str = "span.reviewer";
/// Blocks carrying this marker are counted as positive, all others negative.
const POSITIVE_MARKER: &str = "div.bad";

static COMMENT_BODY_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"comm-id-[0-9]+").expect("valid regex"));

/// What the entity landing page tells us before the feed is queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingPage {
    pub average_rating: i64,
    pub entity_id: u64,
}

pub fn extract_landing(html: &str) -> Result<LandingPage> {
    let doc = Document::parse(html);

    let rating_text = doc
        .select_one(AVERAGE_RATING)?
        .map(text_of)
        .ok_or_else(|| Error::missing("average rating element"))?;
    let average_rating = parse_int(&rating_text)?;

    let canonical_url = doc
        .select_one(CANONICAL_URL)?
        .and_then(|meta| meta.value().attr("content"))
        .ok_or_else(|| Error::missing("og:url meta content"))?;
    let entity_id = u64::try_from(parse_int(canonical_url)?)
        .map_err(|_| Error::parse(canonical_url, "entity identifier"))?;

    debug!(
        average_rating = average_rating,
        entity_id = entity_id,
        "Landing page extracted"
    );

    Ok(LandingPage {
        average_rating,
        entity_id,
    })
}

/// Parses every comment block of a feed fragment, in document order.
///
/// An empty result means the feed is exhausted.
pub fn extract_reviews(fragment: &str) -> Result<Vec<Review>> {
    let doc = Document::parse_fragment(fragment);
    let date_selector = markup::selector(REVIEW_DATE)?;
    let reviewer_selector = markup::selector(REVIEWER)?;
    let positive_selector = markup::selector(POSITIVE_MARKER)?;

    doc.select_all(COMMENT_BLOCK)?
        .into_iter()
        .map(|block| -> Result<Review> {
            let text = find_by_attr_pattern(block, "div", "id", &COMMENT_BODY_ID)?
                .map(text_of)
                .ok_or_else(|| Error::missing("comment body"))?;
            let date = block
                .select(&date_selector)
                .next()
                .map(text_of)
                .ok_or_else(|| Error::missing("review date"))?;
            let name = block
                .select(&reviewer_selector)
                .next()
                .map(text_of)
                .ok_or_else(|| Error::missing("reviewer name"))?;
            let status = if block.select(&positive_selector).next().is_some() {
                ReviewStatus::Positive
            } else {
                ReviewStatus::Negative
            };

            Ok(Review {
                text,
                date,
                status,
                rating: None,
                author: Author::new(name),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(id: u32, extra: &str) -> String {
        format!(
            r#"<div id="comment"><span class="reviewer">user{id}</span>
               <p class="dtreviewed">0{id}.01.2020</p>{extra}
               <div id="comm-id-{id}"> text {id} </div></div>"#
        )
    }

    #[test]
    fn landing_page_yields_rating_and_identifier() {
        let html = r#"<html><head>
            <meta property="og:url" content="https://site/5121-mtt-otzyvy.html">
            </head><body><div class="trusting"><p class="trustings"><span>4★</span></p></div>
            </body></html>"#;
        let landing = extract_landing(html).unwrap();
        assert_eq!(landing, LandingPage { average_rating: 4, entity_id: 5121 });
    }

    #[test]
    fn landing_page_without_og_url_is_structural_error() {
        let html = r#"<div class="trusting"><p class="trustings"><span>3★</span></p></div>"#;
        assert!(matches!(extract_landing(html), Err(Error::Structure(_))));
    }

    #[test]
    fn landing_page_without_rating_is_structural_error() {
        let html = r#"<meta property="og:url" content="https://site/1-x.html">"#;
        assert!(matches!(extract_landing(html), Err(Error::Structure(_))));
    }

    #[test]
    fn unparsable_rating_is_parse_error() {
        let html = r#"<meta property="og:url" content="https://site/1-x.html">
            <div class="trusting"><p class="trustings"><span>нет</span></p></div>"#;
        assert!(matches!(extract_landing(html), Err(Error::Parse { .. })));
    }

    #[test]
    fn reviews_keep_document_order_and_fields() {
        let fragment = format!("{}{}", block(1, ""), block(2, r#"<div class="bad"></div>"#));
        let reviews = extract_reviews(&fragment).unwrap();

        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].text, " text 1 ");
        assert_eq!(reviews[0].date, "01.01.2020");
        assert_eq!(reviews[0].author.name(), "user1");
        assert_eq!(reviews[0].status, ReviewStatus::Negative);
        assert_eq!(reviews[1].status, ReviewStatus::Positive);
        assert!(reviews.iter().all(|r| r.rating.is_none()));
    }

    #[test]
    fn other_status_classes_still_count_as_negative() {
        let fragment = block(3, r#"<div class="good"></div>"#);
        let reviews = extract_reviews(&fragment).unwrap();
        assert_eq!(reviews[0].status, ReviewStatus::Negative);
    }

    #[test]
    fn empty_fragment_yields_no_reviews() {
        assert!(extract_reviews("").unwrap().is_empty());
        assert!(extract_reviews("<p>Комментариев нет</p>").unwrap().is_empty());
    }

    #[test]
    fn block_missing_reviewer_aborts() {
        let fragment = format!(
            r#"{}<div id="comment"><p class="dtreviewed">x</p><div id="comm-id-9">t</div></div>"#,
            block(1, "")
        );
        assert!(matches!(extract_reviews(&fragment), Err(Error::Structure(_))));
    }

    #[test]
    fn fields_keep_the_text_as_emitted() {
        let fragment = "<div id=\"comment\"><span class=\"reviewer\"> Гость </span>\
            <p class=\"dtreviewed\">\n  вчера, 21:04\n</p>\
            <div id=\"comm-id-8\">Строка 1<br>Строка 2\n</div></div>";
        let review = &extract_reviews(fragment).unwrap()[0];
        assert_eq!(review.author.name(), " Гость ");
        assert_eq!(review.date, "\n  вчера, 21:04\n");
        assert_eq!(review.text, "Строка 1Строка 2\n");
    }

    #[test]
    fn empty_comment_body_is_allowed() {
        let fragment = r#"<div id="comment"><span class="reviewer">a</span>
            <p class="dtreviewed">d</p><div id="comm-id-5"></div></div>"#;
        let reviews = extract_reviews(fragment).unwrap();
        assert_eq!(reviews[0].text, "");
    }
}
