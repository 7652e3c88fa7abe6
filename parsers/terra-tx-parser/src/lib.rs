//! Parsing helpers for Terra block broadcast results.
//!
//! - [`broadcast`] - broadcast responses as a success/error union, plus the
//!   per-message transaction logs
//! - [`decimal`] - micro-unit to natural decimal conversion and arithmetic
//! - [`error`] - typed failures shared by both

pub mod broadcast;
pub mod decimal;
pub mod error;

pub use broadcast::{
    find_attribute, Attribute, BroadcastResult, Event, RawBroadcastResult, TxErrorResult, TxLog,
    TxSuccessResult,
};
pub use decimal::{get_natural_decimals, parse_coin, parse_decimal, sub_natural_decimals};
pub use error::{ParseError, ParseResult};
pub use rust_decimal::Decimal;
