
use std::collections::{HashMap, HashSet};
use std::io;

use parking_lot::Mutex;

use protocol::constants::endpoints::{
    ETH_COINBASE, ETH_ESTIMATE_GAS, ETH_GAS_PRICE, ETH_GET_TRANSACTION_COUNT, NET_VERSION,
};
use protocol::serde_json::{json, Value};
use protocol::tokio;
use protocol::traits::{Context, RpcCaller, TxParamsPopulator};
use protocol::types::TransactionRequest;
use protocol::{async_trait, ProtocolError, ProtocolErrorKind, ProtocolResult};

use crate::{MissingTxParamsPopulator, PopulatorConfig, PopulatorError};

const CHAIN_ID: u64 = 44787;
const COINBASE: &str = "0xB";
const GAS_PRICE: &str = "0x3b9aca00";
const SENDER: &str = "0xA";

/// A full node double answering from a fixed table and recording every call.
pub struct MockNode {
    results:  HashMap<&'static str, Value>,
    failures: HashSet<&'static str>,
    calls:    Mutex<Vec<(String, Vec<Value>)>>,
}

impl MockNode {
    pub fn new() -> MockNode {
        let mut results = HashMap::new();
        results.insert(NET_VERSION, json!(CHAIN_ID.to_string()));
        results.insert(ETH_GET_TRANSACTION_COUNT, json!(7));
        results.insert(ETH_ESTIMATE_GAS, json!(21000));
        results.insert(ETH_COINBASE, json!(COINBASE));
        results.insert(ETH_GAS_PRICE, json!(GAS_PRICE));

        MockNode {
            results,
            failures: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_result(mut self, method: &'static str, result: Value) -> Self {
        self.results.insert(method, result);
        self
    }

    pub fn with_failure(mut self, method: &'static str) -> Self {
        self.failures.insert(method);
        self
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.calls.lock().iter().filter(|(m, _)| m == method).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn params_of(&self, method: &str) -> Vec<Vec<Value>> {
        self.calls
            .lock()
            .iter()
            .filter(|(m, _)| m == method)
            .map(|(_, p)| p.clone())
            .collect()
    }
}

#[async_trait]
impl RpcCaller for MockNode {
    async fn call(&self, _ctx: Context, method: &str, params: Vec<Value>) -> ProtocolResult<Value> {
        self.calls.lock().push((method.to_owned(), params));
        // Give concurrent callers a chance to interleave.
        tokio::task::yield_now().await;

        if self.failures.contains(method) {
            return Err(ProtocolError::new(
                ProtocolErrorKind::RpcClient,
                Box::new(io::Error::new(
                    io::ErrorKind::ConnectionAborted,
                    format!("{} failed", method),
                )),
            ));
        }

        Ok(self.results.get(method).cloned().unwrap_or(Value::Null))
    }
}

fn sender_only() -> TransactionRequest {
    TransactionRequest {
        from: Some(SENDER.to_owned()),
        value: Some("100".to_owned()),
        ..Default::default()
    }
}

fn fully_set() -> TransactionRequest {
    TransactionRequest {
        from: Some(SENDER.to_owned()),
        to: Some("0xD".to_owned()),
        value: Some("100".to_owned()),
        data: Some("0xdeadbeef".to_owned()),
        chain_id: Some(1),
        nonce: Some("0x1".to_owned()),
        gas: Some("50000".to_owned()),
        gas_price: Some("0x1".to_owned()),
        fee_currency: None,
        gateway_fee_recipient: Some("0xE".to_owned()),
        gateway_fee: Some("0x10".to_owned()),
    }
}

fn populator_error(err: &ProtocolError) -> &PopulatorError {
    err.downcast_ref::<PopulatorError>()
        .expect("populator error")
}
