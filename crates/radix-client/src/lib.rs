//! radix-client
//!
//! JSON-RPC 2.0 client for a Radix node.
//!
//! Every `LedgerApi` method is exactly one remote call under the `radix.`
//! prefix:
//!   network_id / network_tps / network_tps_demand  : network stats (projected)
//!   native_token / token_info / token_balances     : token queries
//!   transaction / transaction_status / _history    : transaction lookups
//!   stake_positions / unstake_positions            : staking state
//!   validator / validators                         : validator registry
//!   transfer_tokens / stake_tokens / unstake_tokens: `buildTransaction`
//!   submit_transaction / finalize_transaction      : signed blob hand-off

pub mod api;
pub mod client;
pub mod config;
pub mod transport;

pub use api::LedgerApi;
pub use client::RadixClient;
pub use config::NodeConfig;
pub use transport::{HttpTransport, Transport};
