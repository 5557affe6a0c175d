pub use core_rpc_client::{RpcClient, RpcClientError};
pub use core_tx_populator::{MissingTxParamsPopulator, PopulatorConfig, PopulatorError};
pub use protocol::{
    async_trait,
    traits::{Context, RpcCaller, TxParamsPopulator},
    types::{is_empty_value, TransactionRequest, TransactionRequestBuilder, U256},
    ProtocolError, ProtocolErrorKind, ProtocolResult,
};

use core_cli::PopulatorCli;

/// Run the command line with the process arguments.
pub fn run(cli_version: &'static str) -> anyhow::Result<()> {
    PopulatorCli::init(cli_version)
        .start()
        .map_err(|e| anyhow::anyhow!("{e}"))
}
