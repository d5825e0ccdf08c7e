use thiserror::Error;

#[derive(Debug, Error)]
pub enum RadixError {
    // ── Transport ────────────────────────────────────────────────────────────
    #[error("HTTP transport error: {0}")]
    Http(String),

    // ── Remote node ──────────────────────────────────────────────────────────
    /// JSON-RPC error object returned by the node, carried as-is.
    #[error("RPC error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
    },

    #[error("malformed RPC response: {0}")]
    MalformedResponse(String),

    #[error("response is missing field `{0}`")]
    MissingField(&'static str),

    // ── Serialization ────────────────────────────────────────────────────────
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RadixError {
    fn from(e: serde_json::Error) -> Self {
        RadixError::Serialization(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RadixError>;
