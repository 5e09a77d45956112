use std::fmt::Display;

use thiserror::Error;

/// Failures raised while configuring, driving, or decorating the garden scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// A cycle constant is unusable; the app must not start.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The host handed the frame driver a timestamp that is not a finite number.
    #[error("malformed timestamp: {0}")]
    MalformedTimestamp(f64),
    /// An external model could not be fetched; the scene continues without it.
    #[error("failed to load asset `{path}`: {reason}")]
    AssetLoadFailure {
        /// Asset path that failed.
        path: String,
        /// Loader-provided failure description.
        reason: String,
    },
}

impl SceneError {
    /// Build an asset-load failure from a path and any displayable loader error.
    pub(crate) fn asset_load(path: &str, reason: impl Display) -> Self {
        Self::AssetLoadFailure {
            path: path.to_owned(),
            reason: reason.to_string(),
        }
    }
}
