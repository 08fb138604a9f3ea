//! Startup-time configuration errors
//!
//! Gameplay never produces errors; only malformed level data or tuning
//! values do, and those are reported before the first tick runs.

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    /// Level or tuning JSON failed to parse (includes missing required fields)
    Parse(serde_json::Error),
    /// The level list is empty
    NoLevels,
    /// A level descriptor parsed but is unusable (1-based level index)
    InvalidLevel { level: usize, reason: String },
    /// A tuning value is out of range
    InvalidTuning(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "failed to parse config: {e}"),
            Self::NoLevels => write!(f, "no levels defined"),
            Self::InvalidLevel { level, reason } => write!(f, "level {level}: {reason}"),
            Self::InvalidTuning(m) => write!(f, "invalid tuning: {m}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
