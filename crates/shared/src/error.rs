use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input problems caught before any request leaves the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Please enter a URL")]
    EmptyUrl,
    #[error("Please enter a valid URL")]
    InvalidUrl,
    #[error("Please enter a file name to save")]
    EmptyFilename,
    #[error("No results to save")]
    NothingToSave,
}
