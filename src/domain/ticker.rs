use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Subset of the Gemini v2 ticker payload. Unknown fields (open/high/low/bid/ask) are ignored.
///
/// Both fields are optional on the wire: a missing `changes` means "no data for this pair"
/// and a missing `close` only matters once there is a series to compare it against.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerResponse {
    #[serde(default)]
    pub symbol: Option<String>,
    /// Hourly prices over the last 24h, newest first, as decimal strings
    #[serde(default)]
    pub changes: Option<Vec<String>>,
    /// Most recent trade price
    #[serde(default)]
    pub close: Option<String>,
}

impl TickerResponse {
    /// Only a JSON object is a ticker. Any other valid JSON (`[]`, `null`, `42`) is a decode
    /// error, never an empty ticker.
    pub fn from_body(body: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        if value.is_object() {
            return serde_json::from_value(value);
        }
        let unexpected = match &value {
            Value::Object(_) => Unexpected::Map,
            Value::Array(_) => Unexpected::Seq,
            Value::Null => Unexpected::Unit,
            Value::Bool(b) => Unexpected::Bool(*b),
            Value::Number(_) => Unexpected::Other("number"),
            Value::String(s) => Unexpected::Str(s),
        };
        Err(serde_json::Error::invalid_type(unexpected, &"a ticker object"))
    }

    /// `None` for an absent or empty series.
    pub fn changes(&self) -> Option<&[String]> {
        self.changes.as_deref().filter(|c| !c.is_empty())
    }
}
