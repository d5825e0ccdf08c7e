use async_trait::async_trait;
use serde_json::Value;

use radix_core::{Cursor, Result};

/// Radix node operations, one remote procedure each.
///
/// Values are the node's JSON as returned; methods documented as projecting
/// return a single field of the response instead of the whole mapping.
#[async_trait]
pub trait LedgerApi: Send + Sync {
    // ── Network ───────────────────────────────────────────────────────────────

    /// `networkId`, projected to its `networkId` field.
    async fn network_id(&self) -> Result<Value>;

    /// `networkTransactionThroughput`, projected to `tps`.
    async fn network_tps(&self) -> Result<Value>;

    /// `networkTransactionDemand`, projected to `tps`.
    async fn network_tps_demand(&self) -> Result<Value>;

    // ── Tokens ────────────────────────────────────────────────────────────────

    async fn native_token(&self) -> Result<Value>;

    async fn token_info(&self, token_id: &str) -> Result<Value>;

    /// `tokenBalances`, projected to `tokenBalances`.
    async fn token_balances(&self, address: &str) -> Result<Value>;

    // ── Transactions ──────────────────────────────────────────────────────────

    async fn transaction(&self, tx_id: &str) -> Result<Value>;

    async fn transaction_history(&self, address: &str, n: u32, cursor: Cursor) -> Result<Value>;

    /// `statusOfTransaction`, projected to `status`.
    async fn transaction_status(&self, tx_id: &str) -> Result<Value>;

    // ── Staking ───────────────────────────────────────────────────────────────

    async fn stake_positions(&self, address: &str) -> Result<Value>;

    async fn unstake_positions(&self, address: &str) -> Result<Value>;

    async fn validator(&self, validator_id: &str) -> Result<Value>;

    async fn validators(&self, n: u32, cursor: Cursor) -> Result<Value>;

    // ── Transaction building ──────────────────────────────────────────────────

    async fn transfer_tokens(
        &self,
        from: &str,
        to: &str,
        amount: &str,
        token_id: &str,
    ) -> Result<Value>;

    async fn stake_tokens(&self, from: &str, validator_id: &str, amount: &str) -> Result<Value>;

    async fn unstake_tokens(&self, from: &str, validator_id: &str, amount: &str) -> Result<Value>;

    /// Hand a signed blob to the node for submission.
    async fn submit_transaction(
        &self,
        public_key: &str,
        blob: &str,
        signature: &str,
    ) -> Result<Value>;

    /// Hand a signed blob to the node for finalization.
    async fn finalize_transaction(
        &self,
        public_key: &str,
        blob: &str,
        signature: &str,
    ) -> Result<Value>;
}
