mod populator;
mod rpc;

pub use creep::{Cloneable, Context};
pub use populator::TxParamsPopulator;
pub use rpc::RpcCaller;
