mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::{load_settings, BackendCommand, UiEvent};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::ui::AbstractViewerApp;

const COMMAND_QUEUE_CAPACITY: usize = 64;
const EVENT_QUEUE_CAPACITY: usize = 256;

#[derive(Parser, Debug)]
#[command(about = "Desktop viewer for the text summarization service")]
struct Args {
    /// Base URL of the summarization service, e.g. http://localhost:8000
    #[arg(long)]
    api_base_url: Option<String>,
    /// Article URL to pre-fill instead of the sample
    #[arg(long)]
    url: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(api_base_url) = args.api_base_url {
        settings = settings.with_api_base_url(api_base_url);
    }
    tracing::info!(api_base_url = %settings.api_base_url, "starting abstract viewer");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(COMMAND_QUEUE_CAPACITY);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(EVENT_QUEUE_CAPACITY);
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Abstract Viewer")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Abstract Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(AbstractViewerApp::new(cmd_tx, ui_rx, args.url)))),
    )
}
