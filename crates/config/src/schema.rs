//! Config schema types for the intake wizard and the messaging handoff.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AtendeConfig {
    pub handoff: HandoffConfig,
    pub wizard: WizardConfig,
}

/// Where completed intakes are delivered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HandoffConfig {
    /// Destination phone number in international format, digits only
    /// (country code included, no `+`). Becomes the `wa.me` path segment.
    pub destination: String,
    /// Brand label used in the summary header line.
    pub site_label: String,
    /// Signature line appended to the summary.
    pub signature: String,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            destination: "5583993193241".into(),
            site_label: "ESCRITA MESTRA".into(),
            signature: "Mensagem enviada através do site escritamestra.com".into(),
        }
    }
}

/// Pacing for the conversation itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Cosmetic pause before the next prompt is shown, in milliseconds.
    pub reply_delay_ms: u64,
    /// Pause between the closing message and the redirect, in milliseconds.
    pub redirect_delay_ms: u64,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1_000,
            redirect_delay_ms: 2_000,
        }
    }
}
