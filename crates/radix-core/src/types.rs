use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CURSOR;

/// Paging position for listings.
///
/// Nodes accept either a numeric start index or the opaque cursor string
/// returned by a previous page, so both are carried untagged on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cursor {
    Index(u64),
    Token(String),
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor::Index(DEFAULT_CURSOR)
    }
}

impl FromStr for Cursor {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<u64>() {
            Ok(index) => Cursor::Index(index),
            Err(_) => Cursor::Token(s.to_string()),
        })
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cursor::Index(i) => write!(f, "{i}"),
            Cursor::Token(t) => f.write_str(t),
        }
    }
}

impl From<u64> for Cursor {
    fn from(index: u64) -> Self {
        Cursor::Index(index)
    }
}

/// Signed-transaction payload wrapper sent to submit/finalize calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionBlob {
    pub blob: String,
}

impl TransactionBlob {
    pub fn new(blob: impl Into<String>) -> Self {
        Self { blob: blob.into() }
    }
}
