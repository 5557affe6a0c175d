pub use ethereum_types::{H160, U256};

pub use primitive::*;
pub use transaction::*;

pub mod primitive;
pub mod transaction;

use std::error::Error;

use derive_more::Display;

use crate::{ProtocolError, ProtocolErrorKind};

#[derive(Debug, Display)]
pub enum TypesError {
    #[display(fmt = "{:?} is not a valid quantity", _0)]
    InvalidQuantity(String),
}

impl Error for TypesError {}

impl From<TypesError> for ProtocolError {
    fn from(error: TypesError) -> ProtocolError {
        ProtocolError::new(ProtocolErrorKind::Types, Box::new(error))
    }
}
