//! Transaction fee estimate reported with successful broadcasts.

use terra_tx_parser::{decimal, Decimal, ParseError, ParseResult};

/// Currency the fee estimate is quoted in.
pub const FEE_CURRENCY: &str = "UST";

/// Estimates the fee paid by a transaction.
///
/// Computes `tax_fee * 10^6 + gas_price * gas_wanted + 1` in micro units and
/// renders it as natural decimals followed by ` UST`. The result is an
/// estimate built from the request parameters, not a value read from chain.
///
/// # Examples
///
/// ```
/// use terra_facade::output::compute_tax;
/// use terra_tx_parser::Decimal;
///
/// let fee = compute_tax(Decimal::from(100u64), 10, "1.0").unwrap();
/// assert_eq!(fee, "1.001001 UST");
/// ```
pub fn compute_tax(gas_price: Decimal, gas_wanted: u64, tax_fee: &str) -> ParseResult<String> {
    let rate = decimal::parse_decimal(tax_fee)?;

    let micro_tax = rate
        .checked_mul(Decimal::from(decimal::MICRO_UNITS))
        .ok_or(ParseError::Overflow("tax"))?;
    let gas_fee = gas_price
        .checked_mul(Decimal::from(gas_wanted))
        .and_then(|fee| fee.checked_add(Decimal::ONE))
        .ok_or(ParseError::Overflow("gas fee"))?;
    let total = micro_tax
        .checked_add(gas_fee)
        .ok_or(ParseError::Overflow("transaction fee"))?;

    let natural = decimal::get_natural_decimals(&total.to_string())?;
    Ok(format!("{natural} {FEE_CURRENCY}"))
}
