//! Thin query layer over `scraper`.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use crate::error::{Error, Result};

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Selector(format!("{css}: {e}")))
}

/// Concatenated text of an element and its descendants, kept as emitted.
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Parsed HTML document or fragment.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(markup: &str) -> Self {
        Self { html: Html::parse_document(markup) }
    }

    pub fn parse_fragment(markup: &str) -> Self {
        Self { html: Html::parse_fragment(markup) }
    }

    pub fn select_one(&self, css: &str) -> Result<Option<ElementRef<'_>>> {
        let selector = selector(css)?;
        Ok(self.html.select(&selector).next())
    }

    pub fn select_all(&self, css: &str) -> Result<Vec<ElementRef<'_>>> {
        let selector = selector(css)?;
        Ok(self.html.select(&selector).collect())
    }
}

/// First `tag` descendant of `scope` whose `attr` value matches `pattern` anywhere.
pub fn find_by_attr_pattern<'a>(
    scope: ElementRef<'a>,
    tag: &str,
    attr: &str,
    pattern: &Regex,
) -> Result<Option<ElementRef<'a>>> {
    let candidates = selector(&format!("{tag}[{attr}]"))?;
    Ok(scope
        .select(&candidates)
        .find(|element| {
            element
                .value()
                .attr(attr)
                .is_some_and(|value| pattern.is_match(value))
        }))
}
