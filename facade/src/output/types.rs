//! Transaction kinds, broadcast statuses and chain identifiers.

use {
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
};

/// Kind of transaction submitted through the facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TxType {
    /// Deposit stablecoins into the savings market
    #[serde(rename = "deposit")]
    Deposit,
    /// Redeem aUST back into stablecoins
    #[serde(rename = "withdraw")]
    Withdraw,
    /// Plain native-coin transfer
    #[default]
    #[serde(rename = "send")]
    Send,
    /// aUST transfer, which includes the transfer tax; reported as [`TxType::Send`]
    #[serde(rename = "sendAUST")]
    SendAust,
}

impl TxType {
    /// Collapses tax-inclusive variants onto the kind reported to callers.
    pub fn normalized(self) -> Self {
        match self {
            Self::SendAust => Self::Send,
            other => other,
        }
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "DEPOSIT"),
            Self::Withdraw => write!(f, "WITHDRAW"),
            Self::Send => write!(f, "SEND"),
            Self::SendAust => write!(f, "SEND-AUST"),
        }
    }
}

impl FromStr for TxType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().trim() {
            "deposit" => Ok(Self::Deposit),
            "withdraw" => Ok(Self::Withdraw),
            "send" => Ok(Self::Send),
            "sendaust" | "send_aust" | "send-aust" => Ok(Self::SendAust),
            _ => Err(format!(
                "Unknown transaction type: '{s}'. Valid options: deposit, withdraw, send, sendAUST"
            )),
        }
    }
}

/// Broadcast outcome as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Successful,
    Unsuccessful,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Successful => write!(f, "successful"),
            Self::Unsuccessful => write!(f, "unsuccessful"),
        }
    }
}

/// Chains the facade knows how to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Chain {
    #[default]
    Terra,
}

impl Chain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Terra => "terra",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
