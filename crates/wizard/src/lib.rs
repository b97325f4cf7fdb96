//! Scripted contact-intake conversation wizard.
//!
//! Flow: name → e-mail → phone → request type → message, then handoff to
//! the messaging deep link. The state machine itself is pure
//! ([`state::Session`]); pacing and the redirect live in [`service`] and
//! [`terminal`].

pub mod script;
pub mod service;
pub mod state;
pub mod terminal;
pub mod validate;
