//! Command orchestration from UI actions to the backend queue.

pub mod orchestration;
