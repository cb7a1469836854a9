//! UI layer for the desktop viewer: draws the controller's view model.

pub mod app;

pub use app::AbstractViewerApp;
