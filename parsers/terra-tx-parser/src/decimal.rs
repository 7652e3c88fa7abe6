//! Natural decimal helpers.
//!
//! Terra amounts travel on chain in micro units (`1 UST = 1_000_000 uusd`).
//! "Natural" decimals are the human-scale values obtained by shifting the
//! micro amount six places to the right.

use {
    crate::error::{ParseError, ParseResult},
    rust_decimal::Decimal,
    std::str::FromStr,
};

/// Number of micro units in one natural unit.
pub const MICRO_UNITS: u64 = 1_000_000;

/// Parses a decimal string such as `"1.0"`, `"42"` or `"0.000001"`.
pub fn parse_decimal(value: &str) -> ParseResult<Decimal> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed).map_err(|source| ParseError::InvalidDecimal {
        value: trimmed.to_string(),
        source,
    })
}

/// Renders a decimal without trailing fractional zeros.
pub fn render(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Shifts a micro amount into natural units.
pub fn to_natural(micro: Decimal) -> ParseResult<Decimal> {
    micro
        .checked_div(Decimal::from(MICRO_UNITS))
        .ok_or(ParseError::Overflow("natural decimals"))
}

/// Converts a micro amount string into a natural decimal string.
///
/// `"1001001"` becomes `"1.001001"` and `"1000000"` becomes `"1"`.
pub fn get_natural_decimals(micro: &str) -> ParseResult<String> {
    to_natural(parse_decimal(micro)?).map(render)
}

/// Subtracts two natural decimal strings, `lhs - rhs`.
pub fn sub_natural_decimals(lhs: &str, rhs: &str) -> ParseResult<String> {
    parse_decimal(lhs)?
        .checked_sub(parse_decimal(rhs)?)
        .map(render)
        .ok_or(ParseError::Overflow("natural decimal difference"))
}

/// Checks a denom against the Cosmos SDK rule `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}`.
pub fn is_valid_denom(denom: &str) -> bool {
    let mut chars = denom.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    starts_with_letter
        && (3..=128).contains(&denom.len())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-'))
}

/// Splits a single Cosmos coin string (`"1000000uusd"`) into amount and denom.
pub fn parse_coin(coin: &str) -> ParseResult<(Decimal, String)> {
    let coin = coin.trim();
    let split = coin
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .ok_or_else(|| ParseError::InvalidCoin(coin.to_string()))?;
    let (amount, denom) = coin.split_at(split);
    if amount.is_empty() || !is_valid_denom(denom) {
        return Err(ParseError::InvalidCoin(coin.to_string()));
    }
    Ok((parse_decimal(amount)?, denom.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_natural_decimals() {
        assert_eq!(get_natural_decimals("1001001").unwrap(), "1.001001");
        assert_eq!(get_natural_decimals("1000000").unwrap(), "1");
        assert_eq!(get_natural_decimals("1000000.000").unwrap(), "1");
        assert_eq!(get_natural_decimals("1").unwrap(), "0.000001");
        assert_eq!(get_natural_decimals("0").unwrap(), "0");
    }

    #[test]
    fn test_get_natural_decimals_rejects_garbage() {
        let err = get_natural_decimals("12abc").unwrap_err();
        assert!(matches!(err, ParseError::InvalidDecimal { .. }));
        assert!(err.to_string().contains("12abc"));
    }

    #[test]
    fn test_sub_natural_decimals() {
        assert_eq!(sub_natural_decimals("10", "9.5").unwrap(), "0.5");
        assert_eq!(sub_natural_decimals("10", "10").unwrap(), "0");
        assert_eq!(sub_natural_decimals("1.25", "2").unwrap(), "-0.75");
    }

    #[test]
    fn test_parse_coin() {
        let (amount, denom) = parse_coin("1000000uusd").unwrap();
        assert_eq!(amount, Decimal::from(1_000_000u64));
        assert_eq!(denom, "uusd");

        let (amount, denom) = parse_coin(" 42uluna ").unwrap();
        assert_eq!(amount, Decimal::from(42u64));
        assert_eq!(denom, "uluna");
    }

    #[test]
    fn test_parse_coin_invalid() {
        assert!(matches!(parse_coin("uusd"), Err(ParseError::InvalidCoin(_))));
        assert!(matches!(parse_coin("1000"), Err(ParseError::InvalidCoin(_))));
        assert!(parse_coin("").is_err());
        assert!(matches!(
            parse_coin("1000000uusd,500uluna"),
            Err(ParseError::InvalidCoin(_))
        ));
        assert!(matches!(parse_coin("5u"), Err(ParseError::InvalidCoin(_))));
    }

    #[test]
    fn test_is_valid_denom() {
        assert!(is_valid_denom("uusd"));
        assert!(is_valid_denom("ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2"));
        assert!(!is_valid_denom("uusd,500uluna"));
        assert!(!is_valid_denom("1usd"));
        assert!(!is_valid_denom("ab"));
        assert!(!is_valid_denom(""));
    }
}
