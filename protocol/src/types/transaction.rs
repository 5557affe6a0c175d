use serde::{Deserialize, Serialize};

use crate::types::is_empty_value;

/// An outgoing transaction before signing.
///
/// Numeric fields other than `chain_id` are kept as the strings the caller or
/// the node supplied, decimal or hex, so that they survive completion
/// unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct TransactionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from:                  Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to:                    Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value:                 Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data:                  Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id:              Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce:                 Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas:                   Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price:             Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_currency:          Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_fee_recipient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_fee:           Option<String>,
}

impl TransactionRequest {
    pub fn chain_id_is_empty(&self) -> bool {
        matches!(self.chain_id, None | Some(0))
    }

    pub fn nonce_is_empty(&self) -> bool {
        is_empty_value(self.nonce.as_deref())
    }

    pub fn gas_is_empty(&self) -> bool {
        is_empty_value(self.gas.as_deref())
    }

    pub fn gas_price_is_empty(&self) -> bool {
        is_empty_value(self.gas_price.as_deref())
    }

    pub fn fee_currency_is_empty(&self) -> bool {
        is_empty_value(self.fee_currency.as_deref())
    }

    pub fn gateway_fee_recipient_is_empty(&self) -> bool {
        is_empty_value(self.gateway_fee_recipient.as_deref())
    }

    pub fn gateway_fee_is_empty(&self) -> bool {
        is_empty_value(self.gateway_fee.as_deref())
    }
}

/// Accumulates resolved fields on top of a copy of the caller's request.
///
/// Setters only record a value; deciding whether a field needs resolving is
/// left to the caller of the builder.
#[derive(Clone, Debug)]
pub struct TransactionRequestBuilder {
    inner: TransactionRequest,
}

impl TransactionRequestBuilder {
    pub fn from_request(tx: &TransactionRequest) -> Self {
        TransactionRequestBuilder { inner: tx.clone() }
    }

    /// The request as accumulated so far.
    pub fn peek(&self) -> &TransactionRequest {
        &self.inner
    }

    pub fn chain_id(mut self, chain_id: u64) -> Self {
        self.inner.chain_id = Some(chain_id);
        self
    }

    pub fn nonce(mut self, nonce: String) -> Self {
        self.inner.nonce = Some(nonce);
        self
    }

    pub fn gas(mut self, gas: String) -> Self {
        self.inner.gas = Some(gas);
        self
    }

    pub fn gas_price(mut self, gas_price: String) -> Self {
        self.inner.gas_price = Some(gas_price);
        self
    }

    pub fn gateway_fee_recipient(mut self, recipient: String) -> Self {
        self.inner.gateway_fee_recipient = Some(recipient);
        self
    }

    pub fn gateway_fee(mut self, fee: String) -> Self {
        self.inner.gateway_fee = Some(fee);
        self
    }

    pub fn build(self) -> TransactionRequest {
        self.inner
    }
}
