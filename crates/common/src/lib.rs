//! Error plumbing shared by the atende crates.

pub mod error;

pub use error::FromMessage;
