//! Block-mode broadcast results and their transaction logs.
//!
//! The LCD answers a block-mode broadcast with a single JSON document. A
//! result whose `code` is present and non-zero is a failed transaction; any
//! other result carries the logs emitted by each message.

use {
    crate::error::{ParseError, ParseResult},
    serde::{de, Deserialize, Deserializer, Serialize},
};

/// The LCD encodes int64 fields as strings; older nodes send plain numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum U64OrString {
    Number(u64),
    String(String),
}

fn deserialize_u64_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match U64OrString::deserialize(deserializer)? {
        U64OrString::Number(n) => Ok(n),
        U64OrString::String(s) => s
            .trim()
            .parse()
            .map_err(|e| de::Error::custom(format!("invalid integer '{s}': {e}"))),
    }
}

/// Key/value pair attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

/// Event emitted while executing a message (`transfer`, `from_contract`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Event {
    /// Returns the first attribute value stored under `key`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.key == key)
            .map(|attr| attr.value.as_str())
    }
}

/// Log of a single message inside a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxLog {
    #[serde(default)]
    pub msg_index: u32,
    #[serde(default)]
    pub log: String,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl TxLog {
    /// Returns the events of the given type in emission order.
    pub fn events_by_type<'a, 'k>(
        &'a self,
        kind: &'k str,
    ) -> impl Iterator<Item = &'a Event> + 'k
    where
        'a: 'k,
    {
        self.events.iter().filter(move |event| event.kind == kind)
    }
}

/// Finds the first `key` attribute of a `kind` event across all logs.
///
/// # Errors
///
/// [`ParseError::MissingEvent`] when no log carries a `kind` event, and
/// [`ParseError::MissingAttribute`] when such events exist but none has `key`.
pub fn find_attribute<'a>(logs: &'a [TxLog], kind: &str, key: &str) -> ParseResult<&'a str> {
    let mut seen_event = false;
    for log in logs {
        for event in log.events_by_type(kind) {
            seen_event = true;
            if let Some(value) = event.attribute(key) {
                return Ok(value);
            }
        }
    }

    if seen_event {
        Err(ParseError::MissingAttribute {
            event: kind.to_string(),
            key: key.to_string(),
        })
    } else {
        Err(ParseError::MissingEvent(kind.to_string()))
    }
}

/// Broadcast response as returned by the LCD, before classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBroadcastResult {
    #[serde(default, deserialize_with = "deserialize_u64_or_string")]
    pub height: u64,
    pub txhash: String,
    #[serde(default)]
    pub raw_log: String,
    #[serde(default, deserialize_with = "deserialize_u64_or_string")]
    pub gas_wanted: u64,
    #[serde(default, deserialize_with = "deserialize_u64_or_string")]
    pub gas_used: u64,
    #[serde(default)]
    pub logs: Vec<TxLog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codespace: Option<String>,
}

impl RawBroadcastResult {
    /// Returns true if the chain rejected the transaction.
    pub fn is_tx_error(&self) -> bool {
        matches!(self.code, Some(code) if code != 0)
    }
}

/// Successful broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxSuccessResult {
    pub height: u64,
    pub txhash: String,
    pub raw_log: String,
    pub gas_wanted: u64,
    pub gas_used: u64,
    pub logs: Vec<TxLog>,
}

/// Broadcast rejected by the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxErrorResult {
    pub height: u64,
    pub txhash: String,
    pub raw_log: String,
    pub code: u32,
    pub codespace: Option<String>,
}

/// Outcome of a block-mode broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawBroadcastResult")]
pub enum BroadcastResult {
    Success(TxSuccessResult),
    Error(TxErrorResult),
}

impl BroadcastResult {
    /// Parses a broadcast response from its JSON text.
    pub fn from_json(json: &str) -> ParseResult<Self> {
        let result: Self = serde_json::from_str(json)?;
        log::debug!(
            "Parsed broadcast result: txhash={}, error={}",
            result.txhash(),
            result.is_tx_error()
        );
        Ok(result)
    }

    pub fn is_tx_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn txhash(&self) -> &str {
        match self {
            Self::Success(ok) => &ok.txhash,
            Self::Error(err) => &err.txhash,
        }
    }

    pub fn height(&self) -> u64 {
        match self {
            Self::Success(ok) => ok.height,
            Self::Error(err) => err.height,
        }
    }
}

impl From<RawBroadcastResult> for BroadcastResult {
    fn from(raw: RawBroadcastResult) -> Self {
        match raw.code {
            Some(code) if code != 0 => Self::Error(TxErrorResult {
                height: raw.height,
                txhash: raw.txhash,
                raw_log: raw.raw_log,
                code,
                codespace: raw.codespace,
            }),
            _ => Self::Success(TxSuccessResult {
                height: raw.height,
                txhash: raw.txhash,
                raw_log: raw.raw_log,
                gas_wanted: raw.gas_wanted,
                gas_used: raw.gas_used,
                logs: raw.logs,
            }),
        }
    }
}
