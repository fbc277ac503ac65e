use thiserror::Error;

/// Errors returned by Infoblox WAPI operations.
#[derive(Error, Debug)]
pub enum InfobloxError {
    /// The appliance rejected the credentials (HTTP 401).
    #[error("Unauthorized request. Infoblox API returned: {body}")]
    Unauthorized { body: String },

    /// Any other non-success status. `body` is the raw response text.
    #[error("Infoblox API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode Infoblox response: {source}. Response: {body}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Unsupported record type: {0}")]
    InvalidRecordType(String),
}

pub type Result<T> = std::result::Result<T, InfobloxError>;
