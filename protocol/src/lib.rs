pub mod constants;
pub mod traits;
pub mod types;

use std::error::Error;

pub use derive_more::{Constructor, Display, From};
pub use {async_trait::async_trait, serde_json, tokio};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProtocolErrorKind {
    // traits
    RpcClient,
    TxPopulator,

    // types
    Types,
}

// refer to https://github.com/rust-lang/rust/blob/a17951c4f80eb5208030f91fdb4ae93919fa6b12/src/libstd/io/error.rs#L73
#[derive(Debug, Constructor, Display)]
#[display(fmt = "[ProtocolError] Kind: {:?}, Error: {}", kind, error)]
pub struct ProtocolError {
    kind:  ProtocolErrorKind,
    error: Box<dyn Error + Send>,
}

impl ProtocolError {
    pub fn kind(&self) -> ProtocolErrorKind {
        self.kind
    }

    /// Borrow the wrapped error as a concrete type, e.g. to tell a policy
    /// failure from a transport failure.
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.error.downcast_ref::<E>()
    }
}

impl From<ProtocolError> for Box<dyn Error + Send> {
    fn from(error: ProtocolError) -> Self {
        Box::new(error) as Box<dyn Error + Send>
    }
}

impl From<ProtocolError> for String {
    fn from(error: ProtocolError) -> String {
        error.to_string()
    }
}

impl From<serde_json::Error> for ProtocolError {
    fn from(error: serde_json::Error) -> Self {
        ProtocolError {
            kind:  ProtocolErrorKind::Types,
            error: Box::new(error),
        }
    }
}

impl Error for ProtocolError {}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
