use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of a sync run, one variant per step that can go wrong:
/// config resolution, config content, transport, remote payload shape.
#[derive(Error, Debug)]
pub enum Error {
    #[error("config file not found in user or system directories")]
    ConfigNotFound,

    #[error("config file {} is invalid: {reason}", .path.display())]
    ConfigInvalid { path: PathBuf, reason: String },

    /// Transport failure or non-success HTTP status from either service.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid response from {endpoint}: {reason}")]
    RemoteData { endpoint: String, reason: String },
}
