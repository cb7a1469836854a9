//! Command orchestration helpers from UI actions to backend command queue.

use client_core::{BackendCommand, ClientError, UiEvent};
use crossbeam_channel::{Sender, TrySendError};

/// Queues `cmd` for the backend worker. When the queue refuses it, returns the
/// failure event the controller should apply so the action does not hang.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Option<UiEvent> {
    let cmd_name = cmd.name();
    tracing::debug!(command = cmd_name, "queueing ui->backend command");
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            None
        }
        Err(TrySendError::Full(cmd)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            Some(cmd.into_failure(ClientError::Network(
                "UI command queue is full; please retry".to_string(),
            )))
        }
        Err(TrySendError::Disconnected(cmd)) => {
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
            Some(cmd.into_failure(ClientError::Network(
                "Backend command processor disconnected (possible startup/runtime failure)"
                    .to_string(),
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::{AnalysisResult, AppController, DisplayState, SaveRequest};
    use crossbeam_channel::bounded;
    use std::time::Instant;

    #[test]
    fn full_queue_turns_into_failed_analysis() {
        let (cmd_tx, _cmd_rx) = bounded::<BackendCommand>(1);
        let mut controller = AppController::new("https://example.com");

        let first = controller.submit_analysis().expect("first");
        assert!(dispatch_backend_command(&cmd_tx, first).is_none());

        let second = controller.submit_analysis().expect("second");
        let event = dispatch_backend_command(&cmd_tx, second).expect("queue full");
        controller.apply_event(event, Instant::now());

        assert!(!controller.is_analyzing());
        assert_eq!(controller.display_state(), DisplayState::ErrorShown);
        assert_eq!(
            controller.error_message(),
            Some("Failed to analyze URL: UI command queue is full; please retry")
        );
    }

    #[test]
    fn disconnected_queue_reports_save_failure() {
        let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(1);
        drop(cmd_rx);
        let result = AnalysisResult::default();
        let request = SaveRequest::new("notes", Some(&result)).expect("valid");

        let event = dispatch_backend_command(
            &cmd_tx,
            BackendCommand::Save {
                generation: 3,
                request,
            },
        );
        match event {
            Some(UiEvent::SaveCompleted {
                generation,
                filename,
                outcome: Err(ClientError::Network(message)),
            }) => {
                assert_eq!(generation, 3);
                assert_eq!(filename, "notes");
                assert!(message.contains("disconnected"), "{message}");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
