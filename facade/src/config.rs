//! Configuration module for reading formatter settings from environment variables.
//!
//! Every setting has a default; invalid values are logged and replaced by the
//! default rather than aborting.

use {
    crate::output::{parse_output_format, Chain, OutputContext, OutputFormat, TxType},
    std::{env, str::FromStr},
    terra_tx_parser::{decimal::parse_decimal, Decimal},
};

pub const TX_TYPE_VAR: &str = "FACADE_TX_TYPE";
pub const CHAIN_VAR: &str = "FACADE_CHAIN";
pub const NETWORK_VAR: &str = "FACADE_NETWORK";
pub const TAX_FEE_VAR: &str = "FACADE_TAX_FEE";
pub const GAS_PRICE_VAR: &str = "FACADE_GAS_PRICE";
pub const REQUESTED_AMOUNT_VAR: &str = "FACADE_REQUESTED_AMOUNT";
pub const OUTPUT_FORMAT_VAR: &str = "OUTPUT_FORMAT";

const DEFAULT_NETWORK: &str = "mainnet";
const DEFAULT_TAX_FEE: &str = "0";
/// uusd gas price used by the public fee estimates
const DEFAULT_GAS_PRICE: &str = "0.15";

/// Settings for formatting a single broadcast result.
#[derive(Debug, Clone)]
pub struct FacadeConfig {
    pub context: OutputContext,
    pub output_format: OutputFormat,
}

impl FacadeConfig {
    /// Loads the configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `FACADE_TX_TYPE` - deposit, withdraw, send or sendAUST (default: send)
    /// - `FACADE_CHAIN` - chain identifier (default: terra)
    /// - `FACADE_NETWORK` - network identifier (default: mainnet)
    /// - `FACADE_TAX_FEE` - tax rate as a decimal string (default: 0)
    /// - `FACADE_GAS_PRICE` - gas price in micro units (default: 0.15)
    /// - `FACADE_REQUESTED_AMOUNT` - requested amount; unset means no deducted tax
    /// - `OUTPUT_FORMAT` - text, json or json_pretty (default: text)
    pub fn from_env() -> Self {
        let mut context = OutputContext::new(
            parse_tx_type(TX_TYPE_VAR),
            env_string(CHAIN_VAR).unwrap_or_else(|| Chain::default().to_string()),
            env_string(NETWORK_VAR).unwrap_or_else(|| DEFAULT_NETWORK.to_string()),
        )
        .with_tax_fee(parse_decimal_string(TAX_FEE_VAR, DEFAULT_TAX_FEE))
        .with_gas_price(parse_gas_price(GAS_PRICE_VAR));
        context.requested_amount = env_string(REQUESTED_AMOUNT_VAR);

        Self {
            context,
            output_format: parse_output_format(OUTPUT_FORMAT_VAR),
        }
    }
}

/// Reads a non-empty, trimmed environment variable.
fn env_string(env_var: &str) -> Option<String> {
    env::var(env_var)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// Parses the transaction type, defaulting to `Send` if unset or invalid.
pub fn parse_tx_type(env_var: &str) -> TxType {
    env_string(env_var)
        .and_then(|val| match TxType::from_str(&val) {
            Ok(tx_type) => Some(tx_type),
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        })
        .unwrap_or_default()
}

/// Reads a decimal string, falling back to `default` if unset or not a decimal.
pub fn parse_decimal_string(env_var: &str, default: &str) -> String {
    env_string(env_var)
        .filter(|val| match parse_decimal(val) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("Invalid {}: {}", env_var, e);
                false
            }
        })
        .unwrap_or_else(|| default.to_string())
}

/// Parses the gas price, defaulting to 0.15 if unset or invalid.
pub fn parse_gas_price(env_var: &str) -> Decimal {
    let value = parse_decimal_string(env_var, DEFAULT_GAS_PRICE);
    parse_decimal(&value).unwrap_or_else(|e| {
        log::warn!("Invalid gas price '{}': {}", value, e);
        Decimal::ZERO
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tx_type_default() {
        assert_eq!(parse_tx_type("NON_EXISTENT_TX_TYPE_12345"), TxType::Send);
    }

    #[test]
    fn test_parse_tx_type_values() {
        env::set_var("TEST_TX_TYPE_VALUE", " sendAUST ");
        assert_eq!(parse_tx_type("TEST_TX_TYPE_VALUE"), TxType::SendAust);
        env::set_var("TEST_TX_TYPE_VALUE", "bogus");
        assert_eq!(parse_tx_type("TEST_TX_TYPE_VALUE"), TxType::Send);
        env::remove_var("TEST_TX_TYPE_VALUE");
    }

    #[test]
    fn test_parse_decimal_string() {
        env::set_var("TEST_TAX_FEE_VALUE", "0.0035");
        assert_eq!(parse_decimal_string("TEST_TAX_FEE_VALUE", "0"), "0.0035");
        env::set_var("TEST_TAX_FEE_VALUE", "lots");
        assert_eq!(parse_decimal_string("TEST_TAX_FEE_VALUE", "0"), "0");
        env::set_var("TEST_TAX_FEE_VALUE", "   ");
        assert_eq!(parse_decimal_string("TEST_TAX_FEE_VALUE", "0"), "0");
        env::remove_var("TEST_TAX_FEE_VALUE");
    }

    #[test]
    fn test_parse_gas_price() {
        assert_eq!(
            parse_gas_price("NON_EXISTENT_GAS_PRICE_12345"),
            Decimal::from_str("0.15").unwrap()
        );
        env::set_var("TEST_GAS_PRICE_VALUE", "0.456");
        assert_eq!(
            parse_gas_price("TEST_GAS_PRICE_VALUE"),
            Decimal::from_str("0.456").unwrap()
        );
        env::remove_var("TEST_GAS_PRICE_VALUE");
    }

    #[test]
    fn test_env_string_trims_and_drops_empty() {
        env::set_var("TEST_ENV_STRING_VALUE", "  bombay-12 ");
        assert_eq!(env_string("TEST_ENV_STRING_VALUE").as_deref(), Some("bombay-12"));
        env::set_var("TEST_ENV_STRING_VALUE", "");
        assert!(env_string("TEST_ENV_STRING_VALUE").is_none());
        env::remove_var("TEST_ENV_STRING_VALUE");
    }
}
