//! Inspection failure taxonomy
//!
//! A missing config file is not an error (the client is simply not
//! installed). A file that exists but cannot be read or parsed is.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ClientKind;

/// Failure surfaced by client inspection.
#[derive(Debug, Error)]
pub enum InspectError {
    /// The client's config file exists but could not be read or parsed.
    #[error("{client} config at {} is unavailable: {source}", .path.display())]
    ConfigUnavailable {
        /// Client whose config failed
        client: ClientKind,
        /// Path that was being read
        path: PathBuf,
        /// Underlying read or parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl InspectError {
    pub(crate) fn unavailable(
        client: ClientKind,
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::ConfigUnavailable {
            client,
            path: path.into(),
            source: source.into(),
        }
    }
}
