//! Monetary amount as entered (numeric text).

use core::fmt;

use ganesh_core::ValueObject;
use serde::{Deserialize, Deserializer, Serialize};

/// A contribution or expense amount.
///
/// The raw text is kept verbatim so the value sent to the remote is exactly
/// what was entered. The numeric value is derived on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Amount(String);

impl ValueObject for Amount {}

impl Amount {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Numeric value of the amount.
    ///
    /// Blank text is `0`. Returns `None` when the text is not a finite number.
    pub fn value(&self) -> Option<f64> {
        let raw = self.0.trim();
        if raw.is_empty() {
            return Some(0.0);
        }
        raw.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The remote may echo amounts back as JSON numbers, or as `null`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Text(String),
    Number(serde_json::Number),
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawAmount>::deserialize(deserializer)? {
            Some(RawAmount::Text(text)) => Self(text),
            Some(RawAmount::Number(number)) => Self(number.to_string()),
            None => Self::default(),
        })
    }
}
