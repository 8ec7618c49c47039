use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// A recorded observation that a target violated a property or faulted.
///
/// Findings are created only through [`crate::core::recorder::record`] and are
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    target: String,
    detail: String,
    payload: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Finding {
    pub(crate) fn new(target: &str, detail: &str, payload: Value, error: Option<String>) -> Self {
        Self {
            target: target.to_string(),
            detail: detail.to_string(),
            payload,
            error,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
