//! Normalized transaction output record.
//!
//! [`TxOutput`] turns a block broadcast result plus the parameters of the
//! request into the record handed back to callers: status, amount, currency,
//! fee estimate and the tax deducted from the requested amount.

use {
    super::{
        clock::{Clock, SystemClock},
        fee::compute_tax,
        log_parser::process_log,
        Status, TxType,
    },
    chrono::{DateTime, SecondsFormat, Utc},
    serde::{Deserialize, Serialize},
    std::{env, str::FromStr},
    terra_tx_parser::{decimal, BroadcastResult, Decimal, ParseResult},
};

/// Deducted tax reported when no requested amount is known.
pub const DEFAULT_DEDUCTED_TAX: &str = "0";

/// Parameters of the request that produced a broadcast result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputContext {
    /// Kind of transaction that was broadcast
    pub tx_type: TxType,
    /// Chain identifier, e.g. "terra"
    pub chain: String,
    /// Network identifier, e.g. "mainnet" or "bombay-12"
    pub network: String,
    /// Tax rate applied to the transfer (decimal string)
    pub tax_fee: String,
    /// Gas price in micro units
    pub gas_price: Decimal,
    /// Amount the caller asked to move (natural decimals), if known
    pub requested_amount: Option<String>,
}

impl OutputContext {
    /// Creates a context with zero tax, zero gas price and no requested amount.
    pub fn new(tx_type: TxType, chain: impl Into<String>, network: impl Into<String>) -> Self {
        Self {
            tx_type,
            chain: chain.into(),
            network: network.into(),
            tax_fee: "0".to_string(),
            gas_price: Decimal::ZERO,
            requested_amount: None,
        }
    }

    /// Sets the tax rate.
    pub fn with_tax_fee(mut self, tax_fee: impl Into<String>) -> Self {
        self.tax_fee = tax_fee.into();
        self
    }

    /// Sets the gas price.
    pub fn with_gas_price(mut self, gas_price: Decimal) -> Self {
        self.gas_price = gas_price;
        self
    }

    /// Sets the requested amount.
    pub fn with_requested_amount(mut self, amount: impl Into<String>) -> Self {
        self.requested_amount = Some(amount.into());
        self
    }
}

/// Where and when a transaction landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxDetails {
    pub chain: String,
    pub height: u64,
    #[serde(with = "millis_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "txHash")]
    pub tx_hash: String,
}

/// RFC 3339 timestamps with fixed millisecond precision (`2021-09-01T12:30:00.000Z`).
mod millis_timestamp {
    use {
        super::{DateTime, SecondsFormat, Utc},
        serde::{de, Deserialize, Deserializer, Serializer},
    };

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}

/// Fields only a successful broadcast carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxSuccess {
    pub currency: String,
    pub amount: String,
    pub tx_details: TxDetails,
    pub tx_fee: String,
    pub deducted_tax: String,
}

/// Outcome of the broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxOutcome {
    Successful(TxSuccess),
    Unsuccessful,
}

/// Normalized output record for a single broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOutput {
    tx_type: TxType,
    chain: String,
    network: String,
    outcome: TxOutcome,
}

impl TxOutput {
    /// Builds the record, stamping successful transactions with wall-clock time.
    pub fn new(result: &BroadcastResult, ctx: &OutputContext) -> ParseResult<Self> {
        Self::with_clock(result, ctx, &SystemClock)
    }

    /// Builds the record using `clock` for the transaction timestamp.
    ///
    /// # Errors
    ///
    /// Returns the [`terra_tx_parser::ParseError`] of the fee computation, the
    /// log processor or the tax subtraction. A rejected broadcast is not an
    /// error: it yields an [`TxOutcome::Unsuccessful`] record.
    pub fn with_clock(
        result: &BroadcastResult,
        ctx: &OutputContext,
        clock: &impl Clock,
    ) -> ParseResult<Self> {
        let outcome = match result {
            BroadcastResult::Error(err) => {
                log::warn!(
                    "Broadcast failed: txhash={}, code={}, codespace={}, raw_log={}",
                    err.txhash,
                    err.code,
                    err.codespace.as_deref().unwrap_or("-"),
                    err.raw_log
                );
                TxOutcome::Unsuccessful
            }
            BroadcastResult::Success(ok) => {
                let tx_details = TxDetails {
                    chain: ctx.chain.clone(),
                    height: ok.height,
                    timestamp: clock.now(),
                    tx_hash: ok.txhash.clone(),
                };
                let tx_fee = compute_tax(ctx.gas_price, ok.gas_wanted, &ctx.tax_fee)?;
                // Logs are keyed by the requested kind, before normalization
                let (amount, currency) = process_log(&ok.logs, ctx.tx_type)?;
                let deducted_tax = match ctx.requested_amount.as_deref() {
                    Some(requested) if !requested.is_empty() => {
                        decimal::sub_natural_decimals(requested, &amount)?
                    }
                    _ => DEFAULT_DEDUCTED_TAX.to_string(),
                };

                TxOutcome::Successful(TxSuccess {
                    currency,
                    amount,
                    tx_details,
                    tx_fee,
                    deducted_tax,
                })
            }
        };

        let output = Self {
            tx_type: ctx.tx_type.normalized(),
            chain: ctx.chain.clone(),
            network: ctx.network.clone(),
            outcome,
        };
        log::debug!(
            "Built output: type={}, status={}, txhash={}",
            output.tx_type,
            output.status(),
            result.txhash()
        );
        Ok(output)
    }

    pub fn tx_type(&self) -> TxType {
        self.tx_type
    }

    pub fn chain(&self) -> &str {
        &self.chain
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    pub fn outcome(&self) -> &TxOutcome {
        &self.outcome
    }

    pub fn status(&self) -> Status {
        match self.outcome {
            TxOutcome::Successful(_) => Status::Successful,
            TxOutcome::Unsuccessful => Status::Unsuccessful,
        }
    }

    /// Returns the success payload, if the broadcast succeeded.
    pub fn success(&self) -> Option<&TxSuccess> {
        match &self.outcome {
            TxOutcome::Successful(success) => Some(success),
            TxOutcome::Unsuccessful => None,
        }
    }

    /// Returns the deducted tax, `"0"` when unset.
    pub fn deducted_tax(&self) -> &str {
        self.success()
            .map(|s| s.deducted_tax.as_str())
            .unwrap_or(DEFAULT_DEDUCTED_TAX)
    }

    /// Converts the record into its plain serializable form.
    pub fn to_data(&self) -> TxOutputData {
        let success = self.success();
        TxOutputData {
            tx_type: self.tx_type,
            status: self.status(),
            tx_details: success.map(|s| vec![s.tx_details.clone()]),
            currency: success.map(|s| s.currency.clone()),
            amount: success.map(|s| s.amount.clone()),
            tx_fee: success.map(|s| s.tx_fee.clone()),
            deducted_tax: self.deducted_tax().to_string(),
            chain: self.chain.clone(),
            network: self.network.clone(),
        }
    }

    /// Formats the record according to the specified output format.
    pub fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.format_text(),
            OutputFormat::Json => self.format_json(),
            OutputFormat::JsonPretty => self.format_json_pretty(),
        }
    }

    /// Formats as emoji-rich human-readable text.
    ///
    /// Example output:
    /// ```text
    /// ✅ SEND [terra/mainnet]
    /// 💵 Amount: 9.5 UST
    /// 💸 Fee: 1.001001 UST
    /// 🧾 Deducted tax: 0.5
    /// 📦 Height: 4985346
    /// 🔗 Tx: A1B2C3D4
    /// ```
    fn format_text(&self) -> String {
        let header = format!("[{}/{}]", self.chain, self.network);
        let Some(success) = self.success() else {
            return format!("❌ {} {} {}", self.tx_type, header, self.status());
        };

        [
            format!("✅ {} {}", self.tx_type, header),
            format!("💵 Amount: {} {}", success.amount, success.currency),
            format!("💸 Fee: {}", success.tx_fee),
            format!("🧾 Deducted tax: {}", success.deducted_tax),
            format!("📦 Height: {}", success.tx_details.height),
            format!("🔗 Tx: {}", success.tx_details.tx_hash),
        ]
        .join("\n")
    }

    /// Formats as compact JSON.
    fn format_json(&self) -> String {
        serde_json::to_string(&self.to_data())
            .unwrap_or_else(|e| format!("{{\"error\": \"serialization failed: {e}\"}}"))
    }

    /// Formats as pretty-printed JSON.
    fn format_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.to_data())
            .unwrap_or_else(|e| format!("{{\n  \"error\": \"serialization failed: {e}\"\n}}"))
    }
}

/// Plain data form of [`TxOutput`], ready for JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutputData {
    #[serde(rename = "type")]
    pub tx_type: TxType,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_details: Option<Vec<TxDetails>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_fee: Option<String>,
    pub deducted_tax: String,
    pub chain: String,
    pub network: String,
}

/// Output format for records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format with emojis (default)
    #[default]
    Text,
    /// Compact JSON format (one line per record)
    Json,
    /// Pretty-printed JSON format
    JsonPretty,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().trim() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "json_pretty" | "json-pretty" | "jsonpretty" => Ok(Self::JsonPretty),
            _ => Err(format!(
                "Unknown output format: '{s}'. Valid options: text, json, json_pretty"
            )),
        }
    }
}

/// Parses the output format from an environment variable.
///
/// Defaults to `Text` if the variable is not set or invalid.
pub fn parse_output_format(env_var: &str) -> OutputFormat {
    env::var(env_var)
        .ok()
        .and_then(|val| {
            let trimmed = val.trim();
            if trimmed.is_empty() {
                return None;
            }
            match OutputFormat::from_str(trimmed) {
                Ok(f) => Some(f),
                Err(e) => {
                    log::warn!("{}", e);
                    None
                }
            }
        })
        .unwrap_or_default()
}
