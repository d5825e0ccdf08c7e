use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use radix_core::constants::methods;
use radix_core::{rpc_method, Action, Cursor, RadixError, Result, TransactionBlob};

use crate::api::LedgerApi;
use crate::config::NodeConfig;
use crate::transport::{HttpTransport, Transport};

/// Proxy for a single Radix node.
///
/// The endpoint is fixed at construction; nothing is checked until the first
/// call goes out.
pub struct RadixClient<T = HttpTransport> {
    node_url: String,
    transport: T,
}

impl RadixClient<HttpTransport> {
    /// Client for `node_url`, falling back to `RADIX_NODE_URL` and then the
    /// built-in default.
    pub fn new(node_url: Option<&str>) -> Self {
        Self::from_config(NodeConfig::resolve(node_url))
    }

    pub fn from_config(config: NodeConfig) -> Self {
        let transport = HttpTransport::new(&config.node_url);
        Self {
            node_url: config.node_url,
            transport,
        }
    }
}

impl<T: Transport> RadixClient<T> {
    /// Client over an arbitrary transport. `node_url` is informational only.
    pub fn with_transport(node_url: impl Into<String>, transport: T) -> Self {
        Self {
            node_url: node_url.into(),
            transport,
        }
    }

    pub fn node_url(&self) -> &str {
        &self.node_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Ask the node to build an unsigned transaction from `actions`.
    pub async fn build_transaction(&self, actions: &[Action]) -> Result<Value> {
        debug!(
            actions = ?actions.iter().map(Action::kind).collect::<Vec<_>>(),
            "building transaction"
        );
        let actions = serde_json::to_value(actions)?;
        self.call(methods::BUILD_TRANSACTION, json!([actions])).await
    }

    async fn call(&self, name: &str, params: Value) -> Result<Value> {
        self.transport.call(&rpc_method(name), params).await
    }

    async fn call_field(&self, name: &str, params: Value, field: &'static str) -> Result<Value> {
        let response = self.call(name, params).await?;
        project(response, field)
    }
}

/// Pull `field` out of a response mapping.
fn project(response: Value, field: &'static str) -> Result<Value> {
    match response {
        Value::Object(mut map) => map.remove(field).ok_or(RadixError::MissingField(field)),
        _ => Err(RadixError::MissingField(field)),
    }
}

#[async_trait]
impl<T: Transport> LedgerApi for RadixClient<T> {
    async fn network_id(&self) -> Result<Value> {
        self.call_field(methods::NETWORK_ID, json!([]), "networkId").await
    }

    async fn network_tps(&self) -> Result<Value> {
        self.call_field(methods::NETWORK_TRANSACTION_THROUGHPUT, json!([]), "tps")
            .await
    }

    async fn network_tps_demand(&self) -> Result<Value> {
        self.call_field(methods::NETWORK_TRANSACTION_DEMAND, json!([]), "tps")
            .await
    }

    async fn native_token(&self) -> Result<Value> {
        self.call(methods::NATIVE_TOKEN, json!([])).await
    }

    async fn token_info(&self, token_id: &str) -> Result<Value> {
        self.call(methods::TOKEN_INFO, json!([token_id])).await
    }

    async fn token_balances(&self, address: &str) -> Result<Value> {
        self.call_field(methods::TOKEN_BALANCES, json!([address]), "tokenBalances")
            .await
    }

    async fn transaction(&self, tx_id: &str) -> Result<Value> {
        self.call(methods::LOOKUP_TRANSACTION, json!([tx_id])).await
    }

    async fn transaction_history(&self, address: &str, n: u32, cursor: Cursor) -> Result<Value> {
        self.call(methods::TRANSACTION_HISTORY, json!([address, n, cursor]))
            .await
    }

    async fn transaction_status(&self, tx_id: &str) -> Result<Value> {
        self.call_field(methods::STATUS_OF_TRANSACTION, json!([tx_id]), "status")
            .await
    }

    async fn stake_positions(&self, address: &str) -> Result<Value> {
        self.call(methods::STAKE_POSITIONS, json!([address])).await
    }

    async fn unstake_positions(&self, address: &str) -> Result<Value> {
        self.call(methods::UNSTAKE_POSITIONS, json!([address])).await
    }

    async fn validator(&self, validator_id: &str) -> Result<Value> {
        self.call(methods::LOOKUP_VALIDATOR, json!([validator_id])).await
    }

    async fn validators(&self, n: u32, cursor: Cursor) -> Result<Value> {
        self.call(methods::VALIDATORS, json!([n, cursor])).await
    }

    async fn transfer_tokens(
        &self,
        from: &str,
        to: &str,
        amount: &str,
        token_id: &str,
    ) -> Result<Value> {
        self.build_transaction(&[Action::transfer(from, to, amount, token_id)])
            .await
    }

    async fn stake_tokens(&self, from: &str, validator_id: &str, amount: &str) -> Result<Value> {
        self.build_transaction(&[Action::stake(from, validator_id, amount)])
            .await
    }

    async fn unstake_tokens(&self, from: &str, validator_id: &str, amount: &str) -> Result<Value> {
        self.build_transaction(&[Action::unstake(from, validator_id, amount)])
            .await
    }

    async fn submit_transaction(
        &self,
        public_key: &str,
        blob: &str,
        signature: &str,
    ) -> Result<Value> {
        let blob = TransactionBlob::new(blob);
        self.call(methods::SUBMIT_TRANSACTION, json!([blob, public_key, signature]))
            .await
    }

    async fn finalize_transaction(
        &self,
        public_key: &str,
        blob: &str,
        signature: &str,
    ) -> Result<Value> {
        let blob = TransactionBlob::new(blob);
        self.call(methods::FINALIZE_TRANSACTION, json!([blob, public_key, signature]))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Records every call and answers with a canned response.
    struct Recorder {
        response: Value,
        calls: Mutex<Vec<(String, Value)>>,
    }

    impl Recorder {
        fn answering(response: Value) -> Self {
            Self {
                response,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn single_call(&self) -> (String, Value) {
            let calls = self.calls.lock().unwrap();
            assert_eq!(calls.len(), 1, "expected exactly one remote call");
            calls[0].clone()
        }
    }

    #[async_trait]
    impl Transport for Recorder {
        async fn call(&self, method: &str, params: Value) -> Result<Value> {
            self.calls
                .lock()
                .unwrap()
                .push((method.to_string(), params));
            Ok(self.response.clone())
        }
    }

    fn client(response: Value) -> RadixClient<Recorder> {
        RadixClient::with_transport("http://mock", Recorder::answering(response))
    }

    #[tokio::test]
    async fn network_id_projects_field() {
        let c = client(json!({"networkId": 3}));
        assert_eq!(c.network_id().await.unwrap(), json!(3));
        assert_eq!(c.transport().single_call(), ("radix.networkId".to_string(), json!([])));
    }

    #[tokio::test]
    async fn throughput_and_demand_project_tps() {
        let c = client(json!({"tps": 15000}));
        assert_eq!(c.network_tps().await.unwrap(), json!(15000));
        assert_eq!(
            c.transport().single_call(),
            ("radix.networkTransactionThroughput".to_string(), json!([]))
        );

        let c = client(json!({"tps": 20000}));
        assert_eq!(c.network_tps_demand().await.unwrap(), json!(20000));
        assert_eq!(
            c.transport().single_call(),
            ("radix.networkTransactionDemand".to_string(), json!([]))
        );
    }

    #[tokio::test]
    async fn native_token_returns_whole_response() {
        let c = client(json!({"rri": "xrd_rr1", "symbol": "xrd"}));
        assert_eq!(
            c.native_token().await.unwrap(),
            json!({"rri": "xrd_rr1", "symbol": "xrd"})
        );
        assert_eq!(c.transport().single_call(), ("radix.nativeToken".to_string(), json!([])));
    }

    #[tokio::test]
    async fn token_info_passes_id() {
        let c = client(json!({"rri": "tok"}));
        assert_eq!(c.token_info("tok").await.unwrap(), json!({"rri": "tok"}));
        assert_eq!(c.transport().single_call(), ("radix.tokenInfo".to_string(), json!(["tok"])));
    }

    #[tokio::test]
    async fn token_balances_projects_field() {
        let balances = json!([{"rri": "xrd", "amount": "200"}]);
        let c = client(json!({"owner": "rdx1abc", "tokenBalances": balances.clone()}));
        assert_eq!(c.token_balances("rdx1abc").await.unwrap(), balances);
        assert_eq!(
            c.transport().single_call(),
            ("radix.tokenBalances".to_string(), json!(["rdx1abc"]))
        );
    }

    #[tokio::test]
    async fn transaction_lookup_and_status() {
        let c = client(json!({"txID": "tx-id", "sentAt": "1995-12-17T03:24:00"}));
        assert_eq!(
            c.transaction("tx-id").await.unwrap(),
            json!({"txID": "tx-id", "sentAt": "1995-12-17T03:24:00"})
        );
        assert_eq!(
            c.transport().single_call(),
            ("radix.lookupTransaction".to_string(), json!(["tx-id"]))
        );

        let c = client(json!({"txID": "tx-id", "status": "CONFIRMED"}));
        assert_eq!(c.transaction_status("tx-id").await.unwrap(), json!("CONFIRMED"));
        assert_eq!(
            c.transport().single_call(),
            ("radix.statusOfTransaction".to_string(), json!(["tx-id"]))
        );
    }

    #[tokio::test]
    async fn history_passes_size_and_cursor() {
        let c = client(json!({"cursor": "next", "transactions": []}));
        c.transaction_history("rdx1abc", 10, Cursor::Token("cursor".into()))
            .await
            .unwrap();
        assert_eq!(
            c.transport().single_call(),
            ("radix.transactionHistory".to_string(), json!(["rdx1abc", 10, "cursor"]))
        );

        let c = client(json!({}));
        c.transaction_history("rdx1abc", 100, Cursor::default())
            .await
            .unwrap();
        assert_eq!(
            c.transport().single_call().1,
            json!(["rdx1abc", 100, 1])
        );
    }

    #[tokio::test]
    async fn stake_and_unstake_positions() {
        let c = client(json!([1, 2, 3]));
        assert_eq!(c.stake_positions("rdx1abc").await.unwrap(), json!([1, 2, 3]));
        assert_eq!(
            c.transport().single_call(),
            ("radix.stakePositions".to_string(), json!(["rdx1abc"]))
        );

        let c = client(json!([4]));
        assert_eq!(c.unstake_positions("rdx1abc").await.unwrap(), json!([4]));
        assert_eq!(
            c.transport().single_call(),
            ("radix.unstakePositions".to_string(), json!(["rdx1abc"]))
        );
    }

    #[tokio::test]
    async fn validator_lookups() {
        let c = client(json!({"address": "rv1"}));
        assert_eq!(c.validator("rv1").await.unwrap(), json!({"address": "rv1"}));
        assert_eq!(
            c.transport().single_call(),
            ("radix.lookupValidator".to_string(), json!(["rv1"]))
        );

        let c = client(json!({"validators": []}));
        c.validators(10, Cursor::Index(5)).await.unwrap();
        assert_eq!(
            c.transport().single_call(),
            ("radix.validators".to_string(), json!([10, 5]))
        );
    }

    #[tokio::test]
    async fn transfer_builds_single_action() {
        let c = client(json!({"transaction": {"blob": "ab", "hashOfBlobToSign": "cd"}}));
        c.transfer_tokens("rdx1from", "rdx1to", "10", "xrd_rr1")
            .await
            .unwrap();
        assert_eq!(
            c.transport().single_call(),
            (
                "radix.buildTransaction".to_string(),
                json!([[{
                    "type": "TokenTransfer",
                    "from": "rdx1from",
                    "to": "rdx1to",
                    "amount": "10",
                    "tokenIdentifier": "xrd_rr1",
                }]])
            )
        );
    }

    #[tokio::test]
    async fn stake_and_unstake_build_single_action() {
        let c = client(json!({}));
        c.stake_tokens("rdx1from", "rv1val", "10").await.unwrap();
        assert_eq!(
            c.transport().single_call(),
            (
                "radix.buildTransaction".to_string(),
                json!([[{"type": "StakeTokens", "from": "rdx1from", "validator": "rv1val", "amount": "10"}]])
            )
        );

        let c = client(json!({}));
        c.unstake_tokens("rdx1from", "rv1val", "10").await.unwrap();
        assert_eq!(
            c.transport().single_call(),
            (
                "radix.buildTransaction".to_string(),
                json!([[{"type": "UnstakeTokens", "from": "rdx1from", "validator": "rv1val", "amount": "10"}]])
            )
        );
    }

    #[tokio::test]
    async fn submit_and_finalize_forward_blob() {
        let c = client(json!({"txID": "tx-id"}));
        assert_eq!(
            c.submit_transaction("pk", "blob", "sig").await.unwrap(),
            json!({"txID": "tx-id"})
        );
        assert_eq!(
            c.transport().single_call(),
            ("radix.submitTransaction".to_string(), json!([{"blob": "blob"}, "pk", "sig"]))
        );

        let c = client(json!({"txID": "tx-id"}));
        c.finalize_transaction("pk", "blob", "sig").await.unwrap();
        assert_eq!(
            c.transport().single_call(),
            ("radix.finalizeTransaction".to_string(), json!([{"blob": "blob"}, "pk", "sig"]))
        );
    }

    #[tokio::test]
    async fn missing_projected_field_is_an_error() {
        let c = client(json!({"somethingElse": 1}));
        let err = c.transaction_status("tx-id").await.unwrap_err();
        assert!(matches!(err, RadixError::MissingField("status")));

        let c = client(json!([1, 2]));
        assert!(matches!(
            c.network_id().await.unwrap_err(),
            RadixError::MissingField("networkId")
        ));
    }

    #[test]
    fn explicit_url_is_kept() {
        let c = RadixClient::new(Some("http://127.0.0.1:9"));
        assert_eq!(c.node_url(), "http://127.0.0.1:9");
        assert_eq!(c.transport().url(), "http://127.0.0.1:9");
    }
}
