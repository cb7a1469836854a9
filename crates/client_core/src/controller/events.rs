//! Commands flowing from the UI to the backend and the outcomes flowing back.

use shared::{
    domain::AnalysisResult,
    protocol::{AnalysisRequest, SaveRequest},
};

use crate::error::ClientError;

#[derive(Debug, Clone)]
pub enum BackendCommand {
    Analyze {
        generation: u64,
        request: AnalysisRequest,
    },
    Save {
        generation: u64,
        request: SaveRequest,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Analyze { .. } => "analyze",
            BackendCommand::Save { .. } => "save",
        }
    }

    /// The completion event to report when this command never reached the
    /// backend.
    pub fn into_failure(self, err: ClientError) -> UiEvent {
        match self {
            BackendCommand::Analyze { generation, .. } => UiEvent::AnalysisCompleted {
                generation,
                outcome: Err(err),
            },
            BackendCommand::Save {
                generation,
                request,
            } => UiEvent::SaveCompleted {
                generation,
                filename: request.filename,
                outcome: Err(err),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    AnalysisCompleted {
        generation: u64,
        outcome: Result<AnalysisResult, ClientError>,
    },
    SaveCompleted {
        generation: u64,
        filename: String,
        outcome: Result<bool, ClientError>,
    },
    /// Failures of the command plumbing itself rather than of a request.
    BackendFailure(String),
}
