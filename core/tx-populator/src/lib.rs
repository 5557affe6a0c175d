#[cfg(test)]
mod tests;

use std::error::Error;

use protocol::constants::configs::DEFAULT_GATEWAY_FEE;
use protocol::constants::endpoints::{
    BLOCK_TAG_PENDING, ETH_COINBASE, ETH_ESTIMATE_GAS, ETH_GAS_PRICE, ETH_GET_TRANSACTION_COUNT,
    NET_VERSION,
};
use protocol::serde_json::{self, Value};
use protocol::tokio::sync::OnceCell;
use protocol::traits::{Context, RpcCaller, TxParamsPopulator};
use protocol::types::{
    is_empty_value, parse_u64_quantity, to_unprefixed_hex, TransactionRequest,
    TransactionRequestBuilder, U256,
};
use protocol::{async_trait, Display, ProtocolError, ProtocolErrorKind, ProtocolResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopulatorConfig {
    /// Written to `gatewayFee` whenever a recipient is known and the caller
    /// left the fee unset.
    pub default_gateway_fee:        U256,
    /// Ask the node for its coinbase when `gatewayFeeRecipient` is unset.
    /// When disabled an unset recipient stays unset and so does the fee.
    pub fill_gateway_fee_recipient: bool,
}

impl Default for PopulatorConfig {
    fn default() -> Self {
        PopulatorConfig {
            default_gateway_fee:        U256::from(DEFAULT_GATEWAY_FEE),
            fill_gateway_fee_recipient: true,
        }
    }
}

/// Completes transaction requests against a full node.
///
/// The chain id and the node coinbase are fetched at most once per instance
/// and reused for every later request. Build a new instance to refresh them.
pub struct MissingTxParamsPopulator<R> {
    rpc:    R,
    config: PopulatorConfig,

    chain_id:              OnceCell<u64>,
    gateway_fee_recipient: OnceCell<String>,
}

impl<R: RpcCaller> MissingTxParamsPopulator<R> {
    pub fn new(rpc: R) -> Self {
        Self::with_config(rpc, PopulatorConfig::default())
    }

    pub fn with_config(rpc: R, config: PopulatorConfig) -> Self {
        MissingTxParamsPopulator {
            rpc,
            config,
            chain_id: OnceCell::new(),
            gateway_fee_recipient: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &PopulatorConfig {
        &self.config
    }

    async fn get_chain_id(&self, ctx: Context) -> ProtocolResult<u64> {
        self.chain_id
            .get_or_try_init(|| self.fetch_chain_id(ctx))
            .await
            .copied()
    }

    async fn fetch_chain_id(&self, ctx: Context) -> ProtocolResult<u64> {
        let result = self.rpc.call(ctx, NET_VERSION, vec![]).await?;
        let parsed = match &result {
            Value::String(s) => parse_u64_quantity(s).ok(),
            Value::Number(n) => n.as_u64(),
            _ => None,
        };
        // A chain id of zero reads as unset.
        let chain_id = parsed
            .filter(|id| *id != 0)
            .ok_or_else(|| PopulatorError::malformed(NET_VERSION, result))?;

        log::debug!("[tx-populator]: cache chain id {}", chain_id);
        Ok(chain_id)
    }

    async fn get_nonce(&self, ctx: Context, address: Option<&str>) -> ProtocolResult<String> {
        // A missing sender is forwarded as null and the node decides.
        let address = address.map_or(Value::Null, |a| Value::String(a.to_owned()));
        let result = self
            .rpc
            .call(ctx, ETH_GET_TRANSACTION_COUNT, vec![
                address,
                Value::String(BLOCK_TAG_PENDING.to_owned()),
            ])
            .await?;
        result_to_string(ETH_GET_TRANSACTION_COUNT, result)
    }

    async fn estimate_gas(&self, ctx: Context, tx: &TransactionRequest) -> ProtocolResult<String> {
        let result = self
            .rpc
            .call(ctx, ETH_ESTIMATE_GAS, vec![serde_json::to_value(tx)?])
            .await?;
        result_to_string(ETH_ESTIMATE_GAS, result)
    }

    async fn get_coinbase(&self, ctx: Context) -> ProtocolResult<String> {
        self.gateway_fee_recipient
            .get_or_try_init(|| self.fetch_coinbase(ctx))
            .await
            .cloned()
    }

    async fn fetch_coinbase(&self, ctx: Context) -> ProtocolResult<String> {
        let coinbase = match self.rpc.call(ctx, ETH_COINBASE, vec![]).await? {
            Value::Null => None,
            other => Some(result_to_string(ETH_COINBASE, other)?),
        };

        match coinbase {
            Some(c) if !c.is_empty() && !is_empty_value(Some(c.as_str())) => {
                log::debug!("[tx-populator]: cache gateway fee recipient {}", c);
                Ok(c)
            }
            _ => {
                log::warn!("[tx-populator]: node returned an empty coinbase");
                Err(PopulatorError::NodeUnreachableOrUnconfigured.into())
            }
        }
    }

    async fn get_gas_price(&self, ctx: Context, fee_currency: Option<&str>) -> ProtocolResult<String> {
        let fee_currency = fee_currency.filter(|c| !c.is_empty() && !is_empty_value(Some(*c)));
        if let Some(currency) = fee_currency {
            log::warn!(
                "[tx-populator]: gas price requested for fee currency {}",
                currency
            );
            return Err(PopulatorError::UnsupportedFeeCurrency(currency.to_owned()).into());
        }

        let result = self.rpc.call(ctx, ETH_GAS_PRICE, vec![]).await?;
        result_to_string(ETH_GAS_PRICE, result)
    }
}

#[async_trait]
impl<R: RpcCaller> TxParamsPopulator for MissingTxParamsPopulator<R> {
    async fn populate(
        &self,
        ctx: Context,
        tx: &TransactionRequest,
    ) -> ProtocolResult<TransactionRequest> {
        let mut builder = TransactionRequestBuilder::from_request(tx);

        if tx.chain_id_is_empty() {
            builder = builder.chain_id(self.get_chain_id(ctx.clone()).await?);
        }

        if tx.nonce_is_empty() {
            let nonce = self.get_nonce(ctx.clone(), tx.from.as_deref()).await?;
            builder = builder.nonce(nonce);
        }

        if tx.gas_is_empty() {
            let gas = self.estimate_gas(ctx.clone(), builder.peek()).await?;
            builder = builder.gas(gas);
        }

        if self.config.fill_gateway_fee_recipient && tx.gateway_fee_recipient_is_empty() {
            builder = builder.gateway_fee_recipient(self.get_coinbase(ctx.clone()).await?);
        }

        if !builder.peek().gateway_fee_recipient_is_empty() && tx.gateway_fee_is_empty() {
            builder = builder.gateway_fee(to_unprefixed_hex(self.config.default_gateway_fee));
        }

        if tx.gas_price_is_empty() {
            let gas_price = self
                .get_gas_price(ctx, tx.fee_currency.as_deref())
                .await?;
            builder = builder.gas_price(gas_price);
        }

        let populated = builder.build();
        log::debug!("[tx-populator]: populated tx {:?}", populated);
        Ok(populated)
    }
}

/// Node results are taken verbatim when they are strings and rendered in
/// base 10 when they are numbers.
fn result_to_string(method: &'static str, result: Value) -> ProtocolResult<String> {
    match result {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(PopulatorError::malformed(method, other).into()),
    }
}

#[derive(Debug, Display)]
pub enum PopulatorError {
    #[display(
        fmt = "Gas price for fee currency {} cannot be computed, pass it explicitly",
        _0
    )]
    UnsupportedFeeCurrency(String),

    #[display(
        fmt = "Coinbase is empty, the node is not connected to the network and cannot relay transactions"
    )]
    NodeUnreachableOrUnconfigured,

    #[display(fmt = "Malformed {} result {}", method, value)]
    MalformedResponse { method: &'static str, value: Value },
}

impl PopulatorError {
    fn malformed(method: &'static str, value: Value) -> Self {
        PopulatorError::MalformedResponse { method, value }
    }
}

impl Error for PopulatorError {}

impl From<PopulatorError> for ProtocolError {
    fn from(error: PopulatorError) -> ProtocolError {
        ProtocolError::new(ProtocolErrorKind::TxPopulator, Box::new(error))
    }
}
