/// ─── Radix node RPC constants ───────────────────────────────────────────────

// ── Endpoint ─────────────────────────────────────────────────────────────────

/// Node used when neither an explicit URL nor `RADIX_NODE_URL` is given.
pub const DEFAULT_NODE_URL: &str = "https://mainnet.radixdlt.com/rpc";

/// Environment variable consulted for the node URL.
pub const NODE_URL_ENV: &str = "RADIX_NODE_URL";

// ── Method naming ────────────────────────────────────────────────────────────

/// Every remote procedure is invoked as `radix.<name>`.
pub const RPC_METHOD_PREFIX: &str = "radix.";

/// JSON-RPC protocol version sent in every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

// ── Paging ───────────────────────────────────────────────────────────────────

/// Page size used by history and validator listings when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// First cursor position used when none is given.
pub const DEFAULT_CURSOR: u64 = 1;

/// Remote procedure names, without the prefix.
pub mod methods {
    pub const NETWORK_ID: &str = "networkId";
    pub const NETWORK_TRANSACTION_THROUGHPUT: &str = "networkTransactionThroughput";
    pub const NETWORK_TRANSACTION_DEMAND: &str = "networkTransactionDemand";
    pub const NATIVE_TOKEN: &str = "nativeToken";
    pub const TOKEN_INFO: &str = "tokenInfo";
    pub const TOKEN_BALANCES: &str = "tokenBalances";
    pub const LOOKUP_TRANSACTION: &str = "lookupTransaction";
    pub const TRANSACTION_HISTORY: &str = "transactionHistory";
    pub const STAKE_POSITIONS: &str = "stakePositions";
    pub const UNSTAKE_POSITIONS: &str = "unstakePositions";
    pub const STATUS_OF_TRANSACTION: &str = "statusOfTransaction";
    pub const LOOKUP_VALIDATOR: &str = "lookupValidator";
    pub const VALIDATORS: &str = "validators";
    pub const BUILD_TRANSACTION: &str = "buildTransaction";
    pub const SUBMIT_TRANSACTION: &str = "submitTransaction";
    pub const FINALIZE_TRANSACTION: &str = "finalizeTransaction";
}

/// Full remote method name for `name`, e.g. `radix.networkId`.
pub fn rpc_method(name: &str) -> String {
    format!("{RPC_METHOD_PREFIX}{name}")
}
