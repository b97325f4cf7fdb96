//! Handoff of a completed intake to an external messaging deep link.
//!
//! Formats the collected answers into the fixed-label summary block, builds
//! the `wa.me` URL, and asks a [`LinkOpener`] to open it. No delivery
//! confirmation is expected; opening the link is fire-and-forget.

pub mod error;
pub mod link;
pub mod opener;
pub mod summary;

pub use {
    error::{Context, Error, Result},
    link::deep_link,
    opener::{LinkOpener, SystemOpener},
    summary::{ContactRequest, format_summary},
};
