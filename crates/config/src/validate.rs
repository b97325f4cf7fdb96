//! Configuration validation.
//!
//! Checks field values against what the handoff and wizard actually require
//! and reports diagnostics instead of failing hard: a bad config should
//! still let the wizard run with defaults where possible.

use std::path::PathBuf;

use crate::schema::AtendeConfig;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A single validation diagnostic.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Category: "value" or "pacing".
    pub category: &'static str,
    /// Dotted path, e.g. "handoff.destination".
    pub path: String,
    pub message: String,
}

/// Result of validating a configuration.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
    pub config_path: Option<PathBuf>,
}

impl ValidationResult {
    /// Returns `true` if any diagnostic is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Count diagnostics by severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

/// Validate a loaded config.
pub fn validate_config(config: &AtendeConfig, config_path: Option<PathBuf>) -> ValidationResult {
    let mut diagnostics = Vec::new();

    let dest = &config.handoff.destination;
    if dest.is_empty() {
        diagnostics.push(Diagnostic {
            severity: Severity::Error,
            category: "value",
            path: "handoff.destination".into(),
            message: "destination number is empty; the handoff link cannot be built".into(),
        });
    } else if !dest.chars().all(|c| c.is_ascii_digit()) {
        diagnostics.push(Diagnostic {
            severity: Severity::Error,
            category: "value",
            path: "handoff.destination".into(),
            message: format!("destination must be digits only (got {dest:?})"),
        });
    } else if dest.len() < 10 {
        diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            category: "value",
            path: "handoff.destination".into(),
            message: format!(
                "destination has {} digits; international numbers usually have more",
                dest.len()
            ),
        });
    }

    if config.handoff.site_label.is_empty() {
        diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            category: "value",
            path: "handoff.site_label".into(),
            message: "site label is empty; the summary header will be bare".into(),
        });
    }

    for (path, value) in [
        ("wizard.reply_delay_ms", config.wizard.reply_delay_ms),
        ("wizard.redirect_delay_ms", config.wizard.redirect_delay_ms),
    ] {
        if value > 10_000 {
            diagnostics.push(Diagnostic {
                severity: Severity::Warning,
                category: "pacing",
                path: path.into(),
                message: format!("{value} ms is a long pause; users may give up waiting"),
            });
        }
    }

    ValidationResult {
        diagnostics,
        config_path,
    }
}
