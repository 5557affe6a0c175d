// reference: https://ethereum.org/en/developers/docs/apis/json-rpc/
pub const NET_VERSION: &str = "net_version";
pub const ETH_GET_TRANSACTION_COUNT: &str = "eth_getTransactionCount";
pub const ETH_ESTIMATE_GAS: &str = "eth_estimateGas";
pub const ETH_COINBASE: &str = "eth_coinbase";
pub const ETH_GAS_PRICE: &str = "eth_gasPrice";

pub const BLOCK_TAG_PENDING: &str = "pending";
