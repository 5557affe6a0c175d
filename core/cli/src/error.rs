use std::io;

use thiserror::Error;

use protocol::ProtocolError;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Args(clap::Error),
    #[error("building runtime: {0}")]
    Runtime(#[source] io::Error),
    #[error("encoding populated transaction: {0}")]
    Output(#[source] serde_json::Error),

    #[error(transparent)]
    Running(ProtocolError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
