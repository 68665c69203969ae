use serde::{Deserialize, Serialize};
use std::fmt;
use crate::error::{Error, Result};

/// Star rating on the site's fixed `0..=5` scale.
///
/// The entity page only exposes whole stars, so `average_rating` is an integer
/// and stays `None` until a landing page has been parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub average_rating: Option<i64>,
    #[serde(rename = "on_scale")]
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Rating {
    pub const MIN_SCALE: f64 = 0.0;
    pub const MAX_SCALE: f64 = 5.0;

    pub fn new() -> Self {
        Self {
            average_rating: None,
            min_scale: Self::MIN_SCALE,
            max_scale: Self::MAX_SCALE,
        }
    }

    pub fn set_average(&mut self, value: i64) -> Result<()> {
        let as_float = value as f64;
        if as_float < self.min_scale || as_float > self.max_scale {
            return Err(Error::parse(&value.to_string(), "rating within scale"));
        }
        self.average_rating = Some(value);
        Ok(())
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.average_rating {
            Some(value) => write!(f, "<{} из {}>", value, self.max_scale),
            None => write!(f, "<- из {}>", self.max_scale),
        }
    }
}
