//! Output module for normalized transaction records and formatters.
//!
//! This module provides:
//! - [`TxOutput`] - The normalized record built from a broadcast result
//! - [`OutputContext`] - Request parameters the record is built from
//! - [`OutputFormat`] - Configurable output formatting (text, JSON)
//! - [`compute_tax`] - Fee estimate reported with successful transactions
//! - [`process_log`] - Amount and currency extraction from transaction logs
//! - [`OperationError`] - Failure record for operations that could not be formatted

pub mod clock;
mod fee;
pub mod log_parser;
mod operation_error;
mod tx_output;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use fee::{compute_tax, FEE_CURRENCY};
pub use log_parser::process_log;
pub use operation_error::OperationError;
pub use tx_output::{
    parse_output_format, OutputContext, OutputFormat, TxDetails, TxOutcome, TxOutput,
    TxOutputData, TxSuccess, DEFAULT_DEDUCTED_TAX,
};
pub use types::{Chain, Status, TxType};
