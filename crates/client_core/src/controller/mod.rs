//! Controller layer: UI events, state transitions, and command execution.

pub mod events;
pub mod orchestration;
pub mod state;

pub use events::{BackendCommand, UiEvent};
pub use orchestration::execute;
pub use state::{AppController, DisplayState, SuccessNotice, SAMPLE_URL, SUCCESS_NOTICE_TTL};
