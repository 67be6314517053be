pub mod cnf;
pub mod error;
pub mod rng;
pub mod sat;

pub use error::CnfError;
