use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}: {body}")]
    Transport {
        status: u16,
        url: String,
        body: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot parse {expected} from {input:?}")]
    Parse {
        input: String,
        expected: &'static str,
    },

    #[error("Markup error: {0}")]
    Structure(String),

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    pub(crate) fn parse(input: &str, expected: &'static str) -> Self {
        Error::Parse {
            input: input.to_string(),
            expected,
        }
    }

    pub(crate) fn missing(what: &str) -> Self {
        Error::Structure(format!("missing {what}"))
    }
}
