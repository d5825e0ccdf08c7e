use radix_core::constants::{DEFAULT_NODE_URL, NODE_URL_ENV};

/// Where the client sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    /// Node JSON-RPC endpoint. Not validated; a bad URL fails on first call.
    pub node_url: String,
}

impl NodeConfig {
    /// Resolve the endpoint: `explicit` wins, then `RADIX_NODE_URL`, then
    /// the built-in default.
    pub fn resolve(explicit: Option<&str>) -> Self {
        Self::resolve_with(explicit, std::env::var(NODE_URL_ENV).ok())
    }

    /// Same precedence as [`NodeConfig::resolve`] with the environment value
    /// supplied by the caller. Empty strings count as unset.
    pub fn resolve_with(explicit: Option<&str>, env: Option<String>) -> Self {
        let node_url = explicit
            .filter(|u| !u.is_empty())
            .map(str::to_string)
            .or_else(|| env.filter(|u| !u.is_empty()))
            .unwrap_or_else(|| DEFAULT_NODE_URL.to_string());
        Self { node_url }
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            node_url: DEFAULT_NODE_URL.into(),
        }
    }
}
