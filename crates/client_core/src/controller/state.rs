//! Application state owned by the UI thread.
//!
//! The controller never talks to the network itself. Actions validate input,
//! update the display state and hand back a [`BackendCommand`] for whoever
//! owns the transport; outcomes come back through [`AppController::apply_event`].

use std::time::{Duration, Instant};

use shared::{
    domain::AnalysisResult,
    protocol::{AnalysisRequest, SaveRequest},
};
use tracing::{debug, info, warn};

use crate::{
    controller::events::{BackendCommand, UiEvent},
    view::{render_results, ResultsView},
};

pub const SAMPLE_URL: &str =
    "https://www.recipetineats.com/a-pumpkin-layer-cake-with-cream-cheese-frosting-and-toffee-pecans/";
pub const SUCCESS_NOTICE_TTL: Duration = Duration::from_secs(5);

const ANALYZE_LABEL: &str = "Analyze";
const ANALYZE_BUSY_LABEL: &str = "Analyzing...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayState {
    #[default]
    Idle,
    Loading,
    ResultsShown,
    ErrorShown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessNotice {
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug)]
pub struct AppController {
    pub url_input: String,
    pub filename_input: String,
    display: DisplayState,
    error_message: Option<String>,
    results_view: Option<ResultsView>,
    current_result: Option<AnalysisResult>,
    notice: Option<SuccessNotice>,
    analysis_generation: u64,
    pending_analysis: Option<u64>,
    save_generation: u64,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new(SAMPLE_URL)
    }
}

impl AppController {
    pub fn new(initial_url: impl Into<String>) -> Self {
        Self {
            url_input: initial_url.into(),
            filename_input: String::new(),
            display: DisplayState::Idle,
            error_message: None,
            results_view: None,
            current_result: None,
            notice: None,
            analysis_generation: 0,
            pending_analysis: None,
            save_generation: 0,
        }
    }

    pub fn display_state(&self) -> DisplayState {
        self.display
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// The rendered results, only while they are the active display.
    pub fn results(&self) -> Option<&ResultsView> {
        match self.display {
            DisplayState::ResultsShown => self.results_view.as_ref(),
            _ => None,
        }
    }

    /// Results still rendered underneath an error banner, e.g. after a failed
    /// save, so the save form stays reachable without dismissing first.
    pub fn results_behind_error(&self) -> Option<&ResultsView> {
        match self.display {
            DisplayState::ErrorShown => self.results_view.as_ref(),
            _ => None,
        }
    }

    pub fn current_result(&self) -> Option<&AnalysisResult> {
        self.current_result.as_ref()
    }

    pub fn is_analyzing(&self) -> bool {
        self.pending_analysis.is_some()
    }

    pub fn analyze_button_label(&self) -> &'static str {
        if self.is_analyzing() {
            ANALYZE_BUSY_LABEL
        } else {
            ANALYZE_LABEL
        }
    }

    pub fn success_notice(&self, now: Instant) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|notice| notice.expires_at > now)
            .map(|notice| notice.message.as_str())
    }

    pub fn expire_notice(&mut self, now: Instant) {
        if self
            .notice
            .as_ref()
            .is_some_and(|notice| notice.expires_at <= now)
        {
            self.notice = None;
        }
    }

    /// Validates the URL input and, when it is usable, enters the loading
    /// state and returns the request to send.
    pub fn submit_analysis(&mut self) -> Option<BackendCommand> {
        let request = match AnalysisRequest::from_input(&self.url_input) {
            Ok(request) => request,
            Err(err) => {
                self.show_error(err.to_string());
                return None;
            }
        };

        self.analysis_generation += 1;
        let generation = self.analysis_generation;
        self.pending_analysis = Some(generation);
        self.error_message = None;
        self.results_view = None;
        self.display = DisplayState::Loading;
        info!(generation, url = %request.url, "analysis requested");

        Some(BackendCommand::Analyze {
            generation,
            request,
        })
    }

    /// Validates the filename and snapshots the current result for saving.
    pub fn submit_save(&mut self) -> Option<BackendCommand> {
        let request = match SaveRequest::new(&self.filename_input, self.current_result.as_ref()) {
            Ok(request) => request,
            Err(err) => {
                self.show_error(err.to_string());
                return None;
            }
        };

        self.save_generation += 1;
        info!(
            generation = self.save_generation,
            filename = %request.filename,
            "save requested"
        );
        Some(BackendCommand::Save {
            generation: self.save_generation,
            request,
        })
    }

    pub fn apply_event(&mut self, event: UiEvent, now: Instant) {
        match event {
            UiEvent::AnalysisCompleted {
                generation,
                outcome,
            } => {
                if self.pending_analysis != Some(generation) {
                    debug!(generation, "dropping stale analysis response");
                    return;
                }
                self.pending_analysis = None;
                match outcome {
                    Ok(result) => self.set_result(result),
                    Err(err) => {
                        warn!(generation, "analysis failed: {err}");
                        self.show_error(format!("Failed to analyze URL: {err}"));
                    }
                }
            }
            UiEvent::SaveCompleted {
                generation,
                filename,
                outcome,
            } => match outcome {
                Ok(true) => {
                    info!(generation, %filename, "results saved");
                    self.notice = Some(SuccessNotice {
                        message: format!("Results saved to file: {filename}.json"),
                        expires_at: now + SUCCESS_NOTICE_TTL,
                    });
                    if generation == self.save_generation {
                        self.filename_input.clear();
                    }
                }
                Ok(false) => {
                    debug!(generation, %filename, "save endpoint declined");
                }
                Err(err) => {
                    warn!(generation, %filename, "save failed: {err}");
                    self.show_error(format!("Failed to save results: {err}"));
                }
            },
            UiEvent::BackendFailure(message) => self.show_error(message),
        }
    }

    /// Surfaces a failure that happened outside the request flow, such as a
    /// full command queue.
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.show_error(message.into());
    }

    /// Hides the error area, falling back to the results if there are any.
    pub fn dismiss_error(&mut self) {
        if self.display != DisplayState::ErrorShown {
            return;
        }
        self.error_message = None;
        self.display = if self.is_analyzing() {
            DisplayState::Loading
        } else if self.results_view.is_some() {
            DisplayState::ResultsShown
        } else {
            DisplayState::Idle
        };
    }

    fn set_result(&mut self, result: AnalysisResult) {
        self.results_view = Some(render_results(&result));
        self.current_result = Some(result);
        self.error_message = None;
        self.display = DisplayState::ResultsShown;
    }

    fn show_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.display = DisplayState::ErrorShown;
    }
}

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;
