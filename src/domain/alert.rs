use serde::{Deserialize, Serialize};

use crate::utils::time_utils;

/// Severity of an emitted alert line.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum AlertLevel {
    /// Deviation threshold crossed
    Info,
    /// Evaluation of the pair failed; data fields are blank
    Error,
}

/// Numeric payload, rendered as decimal strings so no float artifacts leak into the output.
/// Either every field is populated (INFO) or every field is empty (ERROR).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertData {
    pub last_price: String,
    pub average: String,
    pub change: String,
    /// The deviation score (multiples of the standard deviation), not the deviation itself
    pub sdev: String,
}

impl AlertData {
    pub fn new(
        last_price: impl ToString,
        average: impl ToString,
        change: impl ToString,
        sdev: impl ToString,
    ) -> Self {
        Self {
            last_price: last_price.to_string(),
            average: average.to_string(),
            change: change.to_string(),
            sdev: sdev.to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.fields().iter().all(|f| f.is_empty())
    }

    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|f| !f.is_empty())
    }

    fn fields(&self) -> [&str; 4] {
        [
            self.last_price.as_str(),
            self.average.as_str(),
            self.change.as_str(),
            self.sdev.as_str(),
        ]
    }
}

/// One line of output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    timestamp: String,
    level: AlertLevel,
    trading_pair: String,
    data: AlertData,
}

impl Alert {
    /// Threshold crossed for `symbol`.
    pub fn info(symbol: &str, data: AlertData) -> Self {
        debug_assert!(data.is_complete(), "INFO alert for {} with blank data", symbol);
        Self::at(time_utils::local_now_iso8601(), AlertLevel::Info, symbol, data)
    }

    /// Evaluation of `symbol` failed. Carries no diagnostic detail.
    pub fn error(symbol: &str) -> Self {
        Self::at(
            time_utils::local_now_iso8601(),
            AlertLevel::Error,
            symbol,
            AlertData::default(),
        )
    }

    /// Explicit timestamp; ERROR alerts always get blank data.
    pub fn at(timestamp: String, level: AlertLevel, symbol: &str, data: AlertData) -> Self {
        let data = match level {
            AlertLevel::Info => data,
            AlertLevel::Error => AlertData::default(),
        };
        Self {
            timestamp,
            level,
            trading_pair: symbol.to_string(),
            data,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn level(&self) -> AlertLevel {
        self.level
    }

    pub fn trading_pair(&self) -> &str {
        &self.trading_pair
    }

    pub fn data(&self) -> &AlertData {
        &self.data
    }

    /// Single-line JSON, field order: timestamp, level, trading_pair, data.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
