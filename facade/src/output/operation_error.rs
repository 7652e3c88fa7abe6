use {
    super::{Status, TxType},
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Structured failure record for operations that could not produce a [`super::TxOutput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationError {
    #[serde(rename = "type")]
    pub tx_type: TxType,
    pub chain: String,
    pub status: Status,
    pub error_msg: String,
}

impl OperationError {
    pub fn new(tx_type: TxType, chain: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            tx_type: tx_type.normalized(),
            chain: chain.into(),
            status: Status::Unsuccessful,
            error_msg: error.to_string(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|e| format!("{{\"error\": \"serialization failed: {e}\"}}"))
    }
}
