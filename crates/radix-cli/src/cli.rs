use clap::{Parser, Subcommand};
use serde_json::Value;

use radix_client::LedgerApi;
use radix_core::{Cursor, Result, DEFAULT_PAGE_SIZE};

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "radix",
    version,
    about = "Radix node client: query the ledger and hand off transactions"
)]
pub struct Args {
    /// Node JSON-RPC endpoint. Defaults to $RADIX_NODE_URL, then the public mainnet node.
    #[arg(long, global = true)]
    pub node_url: Option<String>,

    /// Pretty-print structured output.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print the network id.
    NetworkId,

    /// Print current transaction throughput.
    NetworkTps,

    /// Print current transaction demand.
    NetworkTpsDemand,

    /// Print the native token's info.
    NativeToken,

    /// Print info for a token.
    TokenInfo {
        /// Token resource identifier.
        #[arg(long)]
        id: String,
    },

    /// Print token balances held by an account.
    TokenBalances {
        #[arg(long)]
        address: String,
    },

    /// Look up a transaction.
    TransactionInfo {
        /// Transaction id.
        #[arg(long)]
        id: String,
    },

    /// Print the status of a transaction.
    TransactionStatus {
        /// Transaction id.
        #[arg(long)]
        id: String,
    },

    /// Page through an account's transaction history.
    TransactionHistory {
        #[arg(long)]
        address: String,
        /// Page size.
        #[arg(long = "n", default_value_t = DEFAULT_PAGE_SIZE)]
        n: u32,
        /// Start index, or the cursor returned by a previous page.
        #[arg(long, default_value = "1")]
        cursor: Cursor,
    },

    /// List an account's stake positions.
    StakePositions {
        #[arg(long)]
        address: String,
    },

    /// List an account's pending unstakes.
    UnstakedPositions {
        #[arg(long)]
        address: String,
    },

    /// Look up a validator.
    ValidatorInfo {
        /// Validator address.
        #[arg(long)]
        id: String,
    },

    /// Page through the validator set.
    Validators {
        /// Page size.
        #[arg(long = "n", default_value_t = DEFAULT_PAGE_SIZE)]
        n: u32,
        /// Start index, or the cursor returned by a previous page.
        #[arg(long, default_value = "1")]
        cursor: Cursor,
    },

    /// Build a token transfer.
    TransferTokens {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// Amount as the node expects it (decimal string, subunits).
        #[arg(long)]
        amount: String,
        /// Token resource identifier.
        #[arg(long)]
        token_id: String,
    },

    /// Build a stake to a validator.
    StakeTokens {
        #[arg(long)]
        from: String,
        #[arg(long)]
        validator_id: String,
        #[arg(long)]
        amount: String,
    },

    /// Build an unstake from a validator.
    UnstakeTokens {
        #[arg(long)]
        from: String,
        #[arg(long)]
        validator_id: String,
        #[arg(long)]
        amount: String,
    },

    /// Submit a signed transaction blob.
    SubmitTransaction {
        #[arg(long)]
        public_key: String,
        #[arg(long)]
        blob: String,
        #[arg(long)]
        signature: String,
    },

    /// Finalize a signed transaction blob.
    FinalizeTransaction {
        #[arg(long)]
        public_key: String,
        #[arg(long)]
        blob: String,
        #[arg(long)]
        signature: String,
    },
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

/// Run `command` as a single call against `api`.
pub async fn dispatch<A: LedgerApi + ?Sized>(command: Command, api: &A) -> Result<Value> {
    match command {
        Command::NetworkId => api.network_id().await,
        Command::NetworkTps => api.network_tps().await,
        Command::NetworkTpsDemand => api.network_tps_demand().await,
        Command::NativeToken => api.native_token().await,
        Command::TokenInfo { id } => api.token_info(&id).await,
        Command::TokenBalances { address } => api.token_balances(&address).await,
        Command::TransactionInfo { id } => api.transaction(&id).await,
        Command::TransactionStatus { id } => api.transaction_status(&id).await,
        Command::TransactionHistory { address, n, cursor } => {
            api.transaction_history(&address, n, cursor).await
        }
        Command::StakePositions { address } => api.stake_positions(&address).await,
        Command::UnstakedPositions { address } => api.unstake_positions(&address).await,
        Command::ValidatorInfo { id } => api.validator(&id).await,
        Command::Validators { n, cursor } => api.validators(n, cursor).await,
        Command::TransferTokens { from, to, amount, token_id } => {
            api.transfer_tokens(&from, &to, &amount, &token_id).await
        }
        Command::StakeTokens { from, validator_id, amount } => {
            api.stake_tokens(&from, &validator_id, &amount).await
        }
        Command::UnstakeTokens { from, validator_id, amount } => {
            api.unstake_tokens(&from, &validator_id, &amount).await
        }
        Command::SubmitTransaction { public_key, blob, signature } => {
            api.submit_transaction(&public_key, &blob, &signature).await
        }
        Command::FinalizeTransaction { public_key, blob, signature } => {
            api.finalize_transaction(&public_key, &blob, &signature).await
        }
    }
}

/// Text shown for a returned value: strings bare, everything else as JSON.
pub fn render(value: &Value, pretty: bool) -> String {
    match value {
        Value::String(s) => s.clone(),
        other if pretty => {
            serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string())
        }
        other => other.to_string(),
    }
}
