//! Abstraction over "open this URL somewhere".
//!
//! The wizard only constructs the URL and requests it be opened; tests and
//! headless hosts substitute their own opener.

use tracing::info;

use crate::error::Context;

/// Opens a URL in an external context (browser, messaging app).
pub trait LinkOpener: Send + Sync {
    fn open_link(&self, url: &str) -> crate::Result<()>;
}

/// Opener backed by the OS default handler.
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open_link(&self, url: &str) -> crate::Result<()> {
        info!(url, "opening handoff link");
        open::that(url).with_context(|| format!("no handler opened {url}"))
    }
}
