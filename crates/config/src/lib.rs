//! Configuration schema, discovery, and validation for atende.

pub mod loader;
pub mod schema;
pub mod validate;

pub use {
    loader::{
        config_dir, discover_and_load, find_or_default_config_path, load_config, save_config,
        save_config_to,
    },
    schema::{AtendeConfig, HandoffConfig, WizardConfig},
    validate::{Diagnostic, Severity, ValidationResult, validate_config},
};
