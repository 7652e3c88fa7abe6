//! Normalized output records for Terra transaction broadcasts.
//!
//! - [`output`] - the [`TxOutput`] record, fee estimate, log processing and formatters
//! - [`config`] - environment-driven settings for the command-line front end
//! - [`error`] - front-end errors

pub mod config;
pub mod error;
pub mod output;

pub use config::FacadeConfig;
pub use error::{Error, Result};
pub use output::{OperationError, OutputContext, OutputFormat, TxOutput, TxOutputData, TxType};
