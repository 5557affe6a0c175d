mod args;
mod error;
pub(crate) mod utils;

pub use args::populate::PopulateArgs;
pub use error::{Error, Result};

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};

pub struct PopulatorCli {
    inner: Cli,
}

#[derive(Parser, Debug)]
#[command(name = "tx-populator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Populate(PopulateArgs),
}

impl PopulatorCli {
    /// Parse the process arguments. Exits the process on invalid input, the
    /// way clap does.
    pub fn init(cli_version: &'static str) -> Self {
        let matches = Cli::command().version(cli_version).get_matches();
        Self::from_matches(matches)
    }

    pub fn try_parse_from<I, T>(cli_version: &'static str, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Cli::command()
            .version(cli_version)
            .try_get_matches_from(args)
            .map_err(Error::Args)?;
        Cli::from_arg_matches(&matches)
            .map(|inner| PopulatorCli { inner })
            .map_err(Error::Args)
    }

    fn from_matches(matches: clap::ArgMatches) -> Self {
        match Cli::from_arg_matches(&matches) {
            Ok(inner) => PopulatorCli { inner },
            Err(e) => e.exit(),
        }
    }

    pub fn start(self) -> Result<()> {
        match self.inner.command {
            Commands::Populate(args) => args.execute(),
        }
    }
}
