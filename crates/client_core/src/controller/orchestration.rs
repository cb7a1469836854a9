//! Runs a single backend command against an [`AbstractApi`].

use tracing::debug;

use crate::{
    controller::events::{BackendCommand, UiEvent},
    AbstractApi,
};

pub async fn execute<A>(api: &A, command: BackendCommand) -> UiEvent
where
    A: AbstractApi + ?Sized,
{
    debug!(command = command.name(), "executing backend command");
    match command {
        BackendCommand::Analyze {
            generation,
            request,
        } => UiEvent::AnalysisCompleted {
            generation,
            outcome: api.create_abstract(&request).await,
        },
        BackendCommand::Save {
            generation,
            request,
        } => UiEvent::SaveCompleted {
            generation,
            outcome: api.save(&request).await,
            filename: request.filename,
        },
    }
}
