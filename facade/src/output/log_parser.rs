//! Amount and currency extraction from transaction logs.
//!
//! Each transaction kind reports what actually moved in a different event:
//!
//! - **Deposit**: `from_contract` / `deposit_amount` in uusd
//! - **Withdraw**: `from_contract` / `redeem_amount` in uusd
//! - **Send**: `transfer` / `amount` as a coin string (`1000000uusd`)
//! - **SendAust**: `from_contract` / `amount` in micro aUST

use {
    super::TxType,
    terra_tx_parser::{decimal, find_attribute, ParseResult, TxLog},
};

const FROM_CONTRACT: &str = "from_contract";
const TRANSFER: &str = "transfer";

/// Maps a native denom to its display currency.
///
/// Unknown denoms are returned uppercased.
pub fn denom_to_currency(denom: &str) -> String {
    match denom {
        "uusd" => "UST".to_string(),
        "uluna" => "LUNA".to_string(),
        "ukrw" => "KRT".to_string(),
        "usdr" => "SDT".to_string(),
        "umnt" => "MNT".to_string(),
        other => other.to_uppercase(),
    }
}

/// Extracts `(amount, currency)` from the logs of a successful transaction.
///
/// The amount is returned in natural decimals.
pub fn process_log(logs: &[TxLog], tx_type: TxType) -> ParseResult<(String, String)> {
    let processed = match tx_type {
        TxType::Deposit => {
            let micro = find_attribute(logs, FROM_CONTRACT, "deposit_amount")?;
            (decimal::get_natural_decimals(micro)?, "UST".to_string())
        }
        TxType::Withdraw => {
            let micro = find_attribute(logs, FROM_CONTRACT, "redeem_amount")?;
            (decimal::get_natural_decimals(micro)?, "UST".to_string())
        }
        TxType::Send => {
            let coin = find_attribute(logs, TRANSFER, "amount")?;
            let (micro, denom) = decimal::parse_coin(coin)?;
            let amount = decimal::render(decimal::to_natural(micro)?);
            (amount, denom_to_currency(&denom))
        }
        TxType::SendAust => {
            let micro = find_attribute(logs, FROM_CONTRACT, "amount")?;
            (decimal::get_natural_decimals(micro)?, "aUST".to_string())
        }
    };

    log::debug!(
        "Processed {} log(s) for {}: amount={}, currency={}",
        logs.len(),
        tx_type,
        processed.0,
        processed.1
    );

    Ok(processed)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        terra_tx_parser::{Attribute, Event, ParseError},
    };

    fn log_with(kind: &str, attributes: &[(&str, &str)]) -> TxLog {
        TxLog {
            msg_index: 0,
            log: String::new(),
            events: vec![Event {
                kind: kind.to_string(),
                attributes: attributes
                    .iter()
                    .map(|(key, value)| Attribute {
                        key: key.to_string(),
                        value: value.to_string(),
                    })
                    .collect(),
            }],
        }
    }

    #[test]
    fn test_process_deposit_log() {
        let logs = vec![log_with(
            FROM_CONTRACT,
            &[("action", "deposit_stable"), ("deposit_amount", "10000000")],
        )];
        let (amount, currency) = process_log(&logs, TxType::Deposit).unwrap();
        assert_eq!(amount, "10");
        assert_eq!(currency, "UST");
    }

    #[test]
    fn test_process_withdraw_log() {
        let logs = vec![log_with(
            FROM_CONTRACT,
            &[("action", "redeem_stable"), ("redeem_amount", "9500000")],
        )];
        let (amount, currency) = process_log(&logs, TxType::Withdraw).unwrap();
        assert_eq!(amount, "9.5");
        assert_eq!(currency, "UST");
    }

    #[test]
    fn test_process_send_log() {
        let logs = vec![log_with(
            TRANSFER,
            &[("recipient", "terra1abc"), ("amount", "2500000uluna")],
        )];
        let (amount, currency) = process_log(&logs, TxType::Send).unwrap();
        assert_eq!(amount, "2.5");
        assert_eq!(currency, "LUNA");
    }

    #[test]
    fn test_process_send_aust_log() {
        let logs = vec![log_with(
            FROM_CONTRACT,
            &[("action", "transfer"), ("amount", "1234567")],
        )];
        let (amount, currency) = process_log(&logs, TxType::SendAust).unwrap();
        assert_eq!(amount, "1.234567");
        assert_eq!(currency, "aUST");
    }

    #[test]
    fn test_process_log_missing_event() {
        let logs = vec![log_with(TRANSFER, &[("amount", "1uusd")])];
        let err = process_log(&logs, TxType::Deposit).unwrap_err();
        assert!(matches!(err, ParseError::MissingEvent(_)));
    }

    #[test]
    fn test_process_log_malformed_coin() {
        let logs = vec![log_with(TRANSFER, &[("amount", "uusd")])];
        let err = process_log(&logs, TxType::Send).unwrap_err();
        assert!(matches!(err, ParseError::InvalidCoin(_)));
    }

    #[test]
    fn test_process_log_rejects_multi_coin_amount() {
        let logs = vec![log_with(TRANSFER, &[("amount", "1000000uusd,500uluna")])];
        let err = process_log(&logs, TxType::Send).unwrap_err();
        assert!(matches!(err, ParseError::InvalidCoin(_)));
    }

    #[test]
    fn test_denom_to_currency() {
        assert_eq!(denom_to_currency("uusd"), "UST");
        assert_eq!(denom_to_currency("uluna"), "LUNA");
        assert_eq!(denom_to_currency("ukrw"), "KRT");
        assert_eq!(denom_to_currency("ibc/abc"), "IBC/ABC");
    }
}
