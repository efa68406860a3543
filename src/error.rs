use thiserror::Error;

#[derive(Error, Debug)]
pub enum KanbanError {
    #[error("invalid endpoint '{0}': {1}")]
    InvalidEndpoint(String, String),

    #[error("API error: {status} {reason}")]
    Api { status: u16, reason: String },

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, KanbanError>;
