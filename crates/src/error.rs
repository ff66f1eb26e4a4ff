use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Any failure while reading records: transport, non-2xx status or an
/// undecodable body. Callers are not expected to tell these apart.
#[derive(Debug, Error)]
#[error("GET {url} failed: {source}")]
pub struct FetchError {
    url: String,
    #[source]
    source: BoxError,
}

impl FetchError {
    pub fn new(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            url: url.into(),
            source: source.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
    #[error("invalid base url {url}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("base url must use http or https: {0}")]
    UnsupportedScheme(String),
}
