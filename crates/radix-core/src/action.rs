use serde::{Deserialize, Serialize};

// ── Action ────────────────────────────────────────────────────────────────────

/// One ledger action handed to the node's `buildTransaction` call.
///
/// Serialized as a flat mapping tagged by `"type"`; field names are the
/// node's camelCase wire names. Addresses, amounts and identifiers are passed
/// through untouched, the node validates them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Action {
    /// Move `amount` of `token_identifier` from one account to another.
    TokenTransfer {
        from: String,
        to: String,
        amount: String,
        #[serde(rename = "tokenIdentifier")]
        token_identifier: String,
    },

    /// Delegate `amount` of the native token to a validator.
    StakeTokens {
        from: String,
        validator: String,
        amount: String,
    },

    /// Withdraw a previous stake from a validator.
    UnstakeTokens {
        from: String,
        validator: String,
        amount: String,
    },
}

impl Action {
    pub fn transfer(from: &str, to: &str, amount: &str, token_identifier: &str) -> Self {
        Action::TokenTransfer {
            from: from.to_string(),
            to: to.to_string(),
            amount: amount.to_string(),
            token_identifier: token_identifier.to_string(),
        }
    }

    pub fn stake(from: &str, validator: &str, amount: &str) -> Self {
        Action::StakeTokens {
            from: from.to_string(),
            validator: validator.to_string(),
            amount: amount.to_string(),
        }
    }

    pub fn unstake(from: &str, validator: &str, amount: &str) -> Self {
        Action::UnstakeTokens {
            from: from.to_string(),
            validator: validator.to_string(),
            amount: amount.to_string(),
        }
    }

    /// Wire tag of this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::TokenTransfer { .. } => "TokenTransfer",
            Action::StakeTokens { .. } => "StakeTokens",
            Action::UnstakeTokens { .. } => "UnstakeTokens",
        }
    }
}
