use std::sync::Arc;

use creep::Context;
use serde_json::Value;

use crate::{async_trait, ProtocolResult};

/// A connection to a full node able to serve JSON-RPC requests.
///
/// `params` are the positional parameters of `method`. The returned value is
/// the `result` member of the response; error responses and transport
/// failures are reported as `Err`.
#[async_trait]
pub trait RpcCaller: Send + Sync {
    async fn call(&self, ctx: Context, method: &str, params: Vec<Value>) -> ProtocolResult<Value>;
}

#[async_trait]
impl<T: RpcCaller + ?Sized> RpcCaller for Arc<T> {
    async fn call(&self, ctx: Context, method: &str, params: Vec<Value>) -> ProtocolResult<Value> {
        (**self).call(ctx, method, params).await
    }
}

#[async_trait]
impl<T: RpcCaller + ?Sized> RpcCaller for &T {
    async fn call(&self, ctx: Context, method: &str, params: Vec<Value>) -> ProtocolResult<Value> {
        (**self).call(ctx, method, params).await
    }
}
