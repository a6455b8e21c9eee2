//! # linkscope-core
//!
//! * **[`summarizer`]**: link snapshot to display-ready summary.
//! * **[`details`]**: Wi-Fi radio details, sign-in and forget decisions.
//! * **[`monitor`]**: event debouncing and the async driver feeding a presentation sink.
//! * **[`system`]**: snapshots of the local machine's interfaces.

pub mod details;
pub mod monitor;
pub mod summarizer;
pub mod system;

pub use summarizer::summarize;
