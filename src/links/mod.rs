//! Hyperlink handling for linked script segments.
//!
//! Links are opened by handing the URL to the platform opener as a detached
//! process, so nothing about the player leaks to the page being opened.

mod error;
mod opener;

pub use error::LinkError;
pub use opener::{platform_openers, CommandOpener, LinkOpener};

/// Schemes a script may link to.
const SUPPORTED_SCHEMES: &[&str] = &["http://", "https://", "mailto:"];

/// Whether `url` uses a scheme we are willing to open.
pub fn is_supported_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    SUPPORTED_SCHEMES
        .iter()
        .any(|scheme| lower.starts_with(scheme) && lower.len() > scheme.len())
}

/// Opens links using the first available opener.
pub struct Links {
    openers: Vec<Box<dyn LinkOpener>>,
}

impl Links {
    /// Create with platform-appropriate openers.
    pub fn new() -> Self {
        Self {
            openers: platform_openers(),
        }
    }

    /// Create with specific openers (for testing).
    pub fn with_openers(openers: Vec<Box<dyn LinkOpener>>) -> Self {
        Self { openers }
    }

    /// Open a link, returning the name of the opener that handled it.
    pub fn open(&self, url: &str) -> Result<&'static str, LinkError> {
        if !is_supported_url(url) {
            return Err(LinkError::UnsupportedUrl(url.to_string()));
        }

        let mut last_error = None;
        for opener in self.openers.iter().filter(|o| o.is_available()) {
            match opener.open(url) {
                Ok(()) => {
                    tracing::info!(url, opener = opener.name(), "opened link");
                    return Ok(opener.name());
                }
                Err(e) => last_error = Some(e),
            }
        }

        Err(last_error.unwrap_or(LinkError::NoOpenerAvailable))
    }
}

impl Default for Links {
    fn default() -> Self {
        Self::new()
    }
}
