//! Scheduler configuration.
//!
//! Both types deserialize with defaults for missing fields, so `{}` is a
//! valid configuration (60-minute rest, crew-scoped trials).

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Default minimum rest between arrival and the next departure.
pub const DEFAULT_MIN_REST_MINUTES: i64 = 60;

/// Legality rule parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegalityRules {
    /// Minimum gap (minutes) between a crew's arrival and next departure.
    pub min_rest_minutes: i64,
}

/// How much of the roster a scheduling trial re-validates.
///
/// Legality is crew-local, so both scopes produce the same roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationScope {
    /// Validate a snapshot of the candidate crew's sequence; commit on success.
    #[default]
    Crew,
    /// Assign into the roster, validate the whole roster, roll back on failure.
    Roster,
}

/// Configuration for a scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Legality rule parameters.
    pub rules: LegalityRules,
    /// Trial validation scope.
    pub validation_scope: ValidationScope,
}

impl Default for LegalityRules {
    fn default() -> Self {
        Self {
            min_rest_minutes: DEFAULT_MIN_REST_MINUTES,
        }
    }
}

impl LegalityRules {
    /// Sets the minimum rest (minutes).
    pub fn with_min_rest_minutes(mut self, minutes: i64) -> Self {
        self.min_rest_minutes = minutes;
        self
    }
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the legality rules.
    pub fn with_rules(mut self, rules: LegalityRules) -> Self {
        self.rules = rules;
        self
    }

    /// Sets the validation scope.
    pub fn with_validation_scope(mut self, scope: ValidationScope) -> Self {
        self.validation_scope = scope;
        self
    }

    /// Parses and validates a JSON configuration.
    ///
    /// ```
    /// use crew_roster::config::{SchedulerConfig, ValidationScope};
    ///
    /// let cfg = SchedulerConfig::from_json_str(
    ///     r#"{"rules": {"min_rest_minutes": 90}, "validation_scope": "roster"}"#,
    /// ).unwrap();
    /// assert_eq!(cfg.rules.min_rest_minutes, 90);
    /// assert_eq!(cfg.validation_scope, ValidationScope::Roster);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.rules.min_rest_minutes < 0 {
            return Err(RosterError::InvalidConfig(format!(
                "rules.min_rest_minutes must not be negative (got {})",
                self.rules.min_rest_minutes
            )));
        }
        if Duration::try_minutes(self.rules.min_rest_minutes).is_none() {
            return Err(RosterError::InvalidConfig(format!(
                "rules.min_rest_minutes is out of range (got {})",
                self.rules.min_rest_minutes
            )));
        }
        Ok(())
    }
}
