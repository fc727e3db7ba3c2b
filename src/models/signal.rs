use serde::{Deserialize, Serialize};
use std::fmt;

/// Trading recommendation derived from the two latest enriched rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Long,
    Short,
    #[default]
    Hold,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Long => "LONG",
            Signal::Short => "SHORT",
            Signal::Hold => "HOLD",
        }
    }

    pub fn is_actionable(&self) -> bool {
        !matches!(self, Signal::Hold)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signal plus the name of the rule group that produced it (None for the
/// default HOLD).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalDecision {
    pub signal: Signal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

impl SignalDecision {
    pub fn hold() -> Self {
        Self {
            signal: Signal::Hold,
            rule: None,
        }
    }
}
