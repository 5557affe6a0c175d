use std::{collections::HashMap, ffi::OsStr, path::PathBuf};

use clap::builder::{StringValueParser, TypedValueParser, ValueParserFactory};
use serde::Deserialize;

use protocol::constants::configs::{DEFAULT_GATEWAY_FEE, DEFAULT_RPC_TIMEOUT};

use crate::parse_file;

/// The configuration for the populator command line.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub rpc:       ConfigRpc,
    #[serde(default)]
    pub populator: ConfigPopulator,
    #[serde(default)]
    pub logger:    ConfigLogger,
}

impl ValueParserFactory for Config {
    type Parser = ConfigValueParser;

    fn value_parser() -> Self::Parser {
        ConfigValueParser
    }
}

#[derive(Clone, Debug)]
pub struct ConfigValueParser;

impl TypedValueParser for ConfigValueParser {
    type Value = Config;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let file_path = StringValueParser::new()
            .parse_ref(cmd, arg, value)
            .map(PathBuf::from)?;
        parse_file(&file_path, false).map_err(|err| {
            let kind = clap::error::ErrorKind::InvalidValue;
            let msg = format!(
                "failed to parse config file {} since {err}",
                file_path.display()
            );
            clap::Error::raw(kind, msg)
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ConfigRpc {
    /// HTTP endpoint of the full node, e.g. `http://127.0.0.1:8545`.
    pub url:     String,
    #[serde(default = "default_rpc_timeout")]
    pub timeout: u64, // seconds
}

#[derive(Clone, Debug, Deserialize)]
pub struct ConfigPopulator {
    #[serde(default = "default_gateway_fee")]
    pub default_gateway_fee:        u64,
    #[serde(default = "default_true")]
    pub fill_gateway_fee_recipient: bool,
}

impl Default for ConfigPopulator {
    fn default() -> Self {
        Self {
            default_gateway_fee:        default_gateway_fee(),
            fill_gateway_fee_recipient: true,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ConfigLogger {
    #[serde(default = "default_filter")]
    pub filter:                     String,
    #[serde(default)]
    pub console_show_file_and_line: bool,
    #[serde(default)]
    pub modules_level:              HashMap<String, String>,
}

impl Default for ConfigLogger {
    fn default() -> Self {
        Self {
            filter:                     default_filter(),
            console_show_file_and_line: false,
            modules_level:              HashMap::new(),
        }
    }
}

fn default_rpc_timeout() -> u64 {
    DEFAULT_RPC_TIMEOUT
}

fn default_gateway_fee() -> u64 {
    DEFAULT_GATEWAY_FEE
}

fn default_filter() -> String {
    "info".into()
}

fn default_true() -> bool {
    true
}
