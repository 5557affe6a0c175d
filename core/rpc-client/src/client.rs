use std::{
    error::Error,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use jsonrpc_core::{
    response::Output,
    types::{Id, MethodCall, Params, Version},
};
use reqwest::{Client, Url};
use serde_json::Value;

use protocol::{
    async_trait,
    constants::configs::DEFAULT_RPC_TIMEOUT,
    traits::{Context, RpcCaller},
    Display, ProtocolError, ProtocolErrorKind, ProtocolResult,
};

/// JSON-RPC 2.0 over HTTP to a single full node.
#[derive(Clone)]
pub struct RpcClient {
    raw: Client,
    uri: Url,
    id:  Arc<AtomicU64>,
}

impl RpcClient {
    pub fn new(uri: &str) -> ProtocolResult<Self> {
        Self::with_timeout(uri, Duration::from_secs(DEFAULT_RPC_TIMEOUT))
    }

    pub fn with_timeout(uri: &str, timeout: Duration) -> ProtocolResult<Self> {
        let uri = Url::parse(uri).map_err(|e| RpcClientError::InvalidUrl(format!("{uri}: {e}")))?;
        let raw = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RpcClientError::Transport)?;

        Ok(RpcClient {
            raw,
            uri,
            id: Arc::new(AtomicU64::new(0)),
        })
    }

    pub fn uri(&self) -> &Url {
        &self.uri
    }

    fn build_request(&self, method: &str, params: Vec<Value>) -> MethodCall {
        MethodCall {
            jsonrpc: Some(Version::V2),
            method:  method.to_owned(),
            params:  Params::Array(params),
            id:      Id::Num(self.id.fetch_add(1, Ordering::Relaxed)),
        }
    }
}

#[async_trait]
impl RpcCaller for RpcClient {
    async fn call(&self, _ctx: Context, method: &str, params: Vec<Value>) -> ProtocolResult<Value> {
        let req = self.build_request(method, params);
        log::debug!("[rpc-client]: {} request {:?}", self.uri, req);

        let resp = self
            .raw
            .post(self.uri.clone())
            .json(&req)
            .send()
            .await
            .map_err(RpcClientError::Transport)?;
        let output = resp
            .json::<Output>()
            .await
            .map_err(RpcClientError::Decode)?;

        unpack_output(method, output)
    }
}

fn unpack_output(method: &str, output: Output) -> ProtocolResult<Value> {
    match output {
        Output::Success(success) => Ok(success.result),
        Output::Failure(failure) => {
            log::warn!("[rpc-client]: {} failed {}", method, failure.error);
            Err(RpcClientError::Node {
                method: method.to_owned(),
                error:  failure.error,
            }
            .into())
        }
    }
}

#[derive(Debug, Display)]
pub enum RpcClientError {
    #[display(fmt = "Invalid node url {}", _0)]
    InvalidUrl(String),

    #[display(fmt = "Request failed {:?}", _0)]
    Transport(reqwest::Error),

    #[display(fmt = "Decode response failed {:?}", _0)]
    Decode(reqwest::Error),

    #[display(fmt = "Node answered {} with error {}", method, error)]
    Node {
        method: String,
        error:  jsonrpc_core::Error,
    },
}

impl Error for RpcClientError {}

impl From<RpcClientError> for ProtocolError {
    fn from(error: RpcClientError) -> ProtocolError {
        ProtocolError::new(ProtocolErrorKind::RpcClient, Box::new(error))
    }
}
