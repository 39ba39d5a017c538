//! Link opening errors.

/// Errors that can occur when opening a hyperlink.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("Unsupported link '{0}' (expected http, https or mailto)")]
    UnsupportedUrl(String),

    #[error("No link opener available. On Linux, install xdg-utils.")]
    NoOpenerAvailable,

    #[error("Link opener '{opener}' failed: {message}")]
    OpenerFailed {
        opener: &'static str,
        message: String,
    },
}
