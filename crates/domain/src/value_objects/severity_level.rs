//! Severity level for trace telemetry

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Severity of a trace telemetry message
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    /// Verbose diagnostic output
    #[default]
    Verbose,
    /// Informational message
    Information,
    /// Warning, the operation continued
    Warning,
    /// Error, the operation failed
    Error,
    /// Critical failure
    Critical,
}

impl SeverityLevel {
    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Verbose => "Verbose",
            Self::Information => "Information",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Critical => "Critical",
        }
    }

    /// Whether this level indicates a failure
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Error | Self::Critical)
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SeverityLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" | "debug" => Ok(Self::Verbose),
            "information" | "info" => Ok(Self::Information),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            _ => Err(DomainError::InvalidSeverityLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_verbose() {
        assert_eq!(SeverityLevel::default(), SeverityLevel::Verbose);
    }

    #[test]
    fn ordering_follows_severity() {
        assert!(SeverityLevel::Verbose < SeverityLevel::Information);
        assert!(SeverityLevel::Warning < SeverityLevel::Error);
        assert!(SeverityLevel::Error < SeverityLevel::Critical);
    }

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(
            "info".parse::<SeverityLevel>().unwrap(),
            SeverityLevel::Information
        );
        assert_eq!(
            "WARN".parse::<SeverityLevel>().unwrap(),
            SeverityLevel::Warning
        );
        assert_eq!(
            "debug".parse::<SeverityLevel>().unwrap(),
            SeverityLevel::Verbose
        );
    }

    #[test]
    fn parse_rejects_unknown_level() {
        let result = "loud".parse::<SeverityLevel>();
        assert!(matches!(result, Err(DomainError::InvalidSeverityLevel(_))));
    }

    #[test]
    fn is_failure() {
        assert!(SeverityLevel::Error.is_failure());
        assert!(SeverityLevel::Critical.is_failure());
        assert!(!SeverityLevel::Warning.is_failure());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(SeverityLevel::Critical.to_string(), "Critical");
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&SeverityLevel::Warning).unwrap();
        assert_eq!(json, r#""warning""#);
        let parsed: SeverityLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, SeverityLevel::Warning);
    }
}
