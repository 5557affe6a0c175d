use std::{ffi::OsStr, time::Duration};

use clap::{
    builder::{StringValueParser, TypedValueParser},
    Parser,
};

use common_config_parser::types::{Config, JsonValueParser};
use core_rpc_client::RpcClient;
use core_tx_populator::MissingTxParamsPopulator;
use protocol::tokio;
use protocol::traits::{Context, TxParamsPopulator};
use protocol::types::TransactionRequest;

use crate::{
    error::{Error, Result},
    utils,
};

#[derive(Parser, Debug)]
#[command(about = "Fill the missing fields of a transaction request")]
pub struct PopulateArgs {
    #[arg(
        short = 'c',
        long = "config",
        value_name = "CONFIG_FILE",
        help = "File path of client configurations."
    )]
    pub config:  Config,
    #[arg(
        short = 't',
        long = "tx",
        value_name = "TX",
        help = "Transaction request, inline JSON or a JSON file path."
    )]
    #[arg(value_parser = TxRequestValueParser)]
    pub tx:      TransactionRequest,
    #[arg(long = "compact", help = "Print the populated request on one line.")]
    pub compact: bool,
}

impl PopulateArgs {
    pub(crate) fn execute(self) -> Result<()> {
        let Self {
            config,
            tx,
            compact,
        } = self;
        utils::register_log(&config);

        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(Error::Runtime)?;
        let populated = rt.block_on(populate(&config, &tx))?;

        let output = if compact {
            serde_json::to_string(&populated)
        } else {
            serde_json::to_string_pretty(&populated)
        }
        .map_err(Error::Output)?;
        println!("{output}");
        Ok(())
    }
}

async fn populate(config: &Config, tx: &TransactionRequest) -> Result<TransactionRequest> {
    let client =
        RpcClient::with_timeout(&config.rpc.url, Duration::from_secs(config.rpc.timeout))
            .map_err(Error::Running)?;
    let populator =
        MissingTxParamsPopulator::with_config(client, utils::populator_config(&config.populator));

    log::info!(
        "[cli]: populate tx from {:?} via {}",
        tx.from,
        config.rpc.url
    );
    populator
        .populate(Context::new(), tx)
        .await
        .map_err(Error::Running)
}

#[derive(Clone, Debug)]
struct TxRequestValueParser;

impl TypedValueParser for TxRequestValueParser {
    type Value = TransactionRequest;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let raw = StringValueParser::new().parse_ref(cmd, arg, value)?;
        if !raw.trim_start().starts_with('{') {
            return JsonValueParser::<TransactionRequest>::default().parse_ref(cmd, arg, value);
        }

        serde_json::from_str(&raw).map_err(|err| {
            let kind = clap::error::ErrorKind::InvalidValue;
            let msg = format!("failed to parse transaction request since {err}");
            clap::Error::raw(kind, msg)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use crate::PopulatorCli;

    use super::*;

    const CONFIG: &str = r#"
        [rpc]
        url = "http://127.0.0.1:8545"
        timeout = 3

        [populator]
        fill_gateway_fee_recipient = false
    "#;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn parse(args: &[&str]) -> Result<PopulateArgs> {
        let cli = PopulatorCli::try_parse_from(
            "0.1.0",
            std::iter::once("tx-populator").chain(args.iter().copied()),
        )?;
        match cli.inner.command {
            crate::Commands::Populate(args) => Ok(args),
        }
    }

    #[test]
    fn test_inline_tx() {
        let config = write_temp(CONFIG);
        let args = parse(&[
            "populate",
            "-c",
            config.path().to_str().unwrap(),
            "--tx",
            r#"{"from": "0xA", "value": "100"}"#,
        ])
        .unwrap();

        assert_eq!(args.config.rpc.url, "http://127.0.0.1:8545");
        assert_eq!(args.config.rpc.timeout, 3);
        assert!(!args.config.populator.fill_gateway_fee_recipient);
        assert_eq!(args.tx.from.as_deref(), Some("0xA"));
        assert_eq!(args.tx.value.as_deref(), Some("100"));
        assert!(!args.compact);

        let populator = utils::populator_config(&args.config.populator);
        assert!(!populator.fill_gateway_fee_recipient);
        assert_eq!(populator.default_gateway_fee.as_u64(), 10_000);
    }

    #[test]
    fn test_tx_file() {
        let config = write_temp(CONFIG);
        let tx = write_temp(r#"{"from": "0xA", "chainId": 44787, "feeCurrency": "0xC"}"#);
        let args = parse(&[
            "populate",
            "--config",
            config.path().to_str().unwrap(),
            "-t",
            tx.path().to_str().unwrap(),
            "--compact",
        ])
        .unwrap();

        assert_eq!(args.tx.chain_id, Some(44787));
        assert_eq!(args.tx.fee_currency.as_deref(), Some("0xC"));
        assert!(args.compact);
    }

    #[test]
    fn test_invalid_tx() {
        let config = write_temp(CONFIG);
        for tx in [r#"{"from": "0xA", "gasLimit": "1"}"#, r#"{"from": "#] {
            let res = parse(&["populate", "-c", config.path().to_str().unwrap(), "-t", tx]);
            assert!(matches!(res, Err(Error::Args(_))), "{tx}");
        }
    }

    #[test]
    fn test_missing_config() {
        let res = parse(&["populate", "-t", r#"{"from": "0xA"}"#]);
        assert!(matches!(res, Err(Error::Args(_))));
    }
}
