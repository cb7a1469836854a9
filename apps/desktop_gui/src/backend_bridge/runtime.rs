//! Backend worker: drains UI commands and runs each one as its own task.

use std::{sync::Arc, thread};

use client_core::{execute, AbstractClient, BackendCommand, ClientSettings, UiEvent};
use crossbeam_channel::{Receiver, Sender, TrySendError};

pub fn launch(settings: ClientSettings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BackendFailure(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let client = match AbstractClient::new(&settings) {
            Ok(client) => Arc::new(client),
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BackendFailure(format!(
                    "backend worker startup failure: failed to build HTTP client: {err}"
                )));
                tracing::error!("failed to build HTTP client: {err}");
                return;
            }
        };
        tracing::info!(base_url = client.base_url(), "backend worker ready");

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                let client = Arc::clone(&client);
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let event = execute(client.as_ref(), cmd).await;
                    forward_event(ui_tx, event).await;
                });
            }
            tracing::debug!("ui command channel closed; backend worker exiting");
        });
    });
}

/// Completion events must reach the UI or it stays in Loading, so a full
/// queue falls back to a blocking send off the async workers.
async fn forward_event(ui_tx: Sender<UiEvent>, event: UiEvent) {
    let event = match ui_tx.try_send(event) {
        Ok(()) => return,
        Err(TrySendError::Full(event)) => event,
        Err(TrySendError::Disconnected(_)) => {
            tracing::debug!("ui closed before backend event could be delivered");
            return;
        }
    };
    tracing::warn!("backend->ui event queue is full; waiting for the ui to drain it");
    match tokio::task::spawn_blocking(move || ui_tx.send(event)).await {
        Ok(Ok(())) => {}
        Ok(Err(_)) => tracing::debug!("ui closed before backend event could be delivered"),
        Err(err) => tracing::error!("blocking event forward failed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crossbeam_channel::bounded;

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn full_queue_delays_completion_instead_of_dropping_it() {
        let (ui_tx, ui_rx) = bounded(1);
        ui_tx
            .try_send(UiEvent::BackendFailure("earlier".into()))
            .expect("fill queue");

        let forward = tokio::spawn(forward_event(
            ui_tx,
            UiEvent::BackendFailure("completion".into()),
        ));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!forward.is_finished());

        assert!(matches!(
            ui_rx.recv().expect("first"),
            UiEvent::BackendFailure(message) if message == "earlier"
        ));
        forward.await.expect("forward task");
        assert!(matches!(
            ui_rx.recv().expect("second"),
            UiEvent::BackendFailure(message) if message == "completion"
        ));
    }

    #[tokio::test]
    async fn closed_ui_is_not_an_error() {
        let (ui_tx, ui_rx) = bounded(1);
        drop(ui_rx);
        forward_event(ui_tx, UiEvent::BackendFailure("late".into())).await;
    }
}
