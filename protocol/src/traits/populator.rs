use creep::Context;

use crate::types::TransactionRequest;
use crate::{async_trait, ProtocolResult};

#[async_trait]
pub trait TxParamsPopulator: Send + Sync {
    /// Fill every unset field of `tx` required for signing and broadcast.
    ///
    /// The input is left untouched and the completed request is returned as a
    /// new value. Fields the caller already set are never overwritten.
    async fn populate(
        &self,
        ctx: Context,
        tx: &TransactionRequest,
    ) -> ProtocolResult<TransactionRequest>;
}
