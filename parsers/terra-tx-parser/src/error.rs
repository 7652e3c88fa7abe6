use thiserror::Error;

/// Errors raised while reading broadcast results, logs and decimal amounts.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid decimal '{value}': {source}")]
    InvalidDecimal {
        value: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("invalid coin '{0}': expected an amount followed by a denom")]
    InvalidCoin(String),

    #[error("no '{0}' event found in transaction logs")]
    MissingEvent(String),

    #[error("event '{event}' has no '{key}' attribute")]
    MissingAttribute { event: String, key: String },

    #[error("decimal overflow while computing {0}")]
    Overflow(&'static str),

    #[error("malformed broadcast result: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ParseResult<T> = Result<T, ParseError>;
