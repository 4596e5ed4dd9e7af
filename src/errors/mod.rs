use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregatorError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing failed: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Missing credentials for {platform}: {variables}")]
    MissingCredentials { platform: String, variables: String },

    // Feed errors
    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    // Output errors
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write {location}: {source}")]
    Write {
        location: String,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AggregatorResult<T> = Result<T, AggregatorError>;
