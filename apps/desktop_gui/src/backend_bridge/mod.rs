//! Bridge between the UI thread and the async HTTP client.

pub mod runtime;
