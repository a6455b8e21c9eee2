//! # linkscope-common
//!
//! Value types shared by every layer of `linkscope`.
//!
//! * **[`network`]**: addresses, routes, link snapshots and their summaries.
//! * **[`wifi`]**: radio-level details of a Wi-Fi connection.
//! * **[`error`]**: the error taxonomy of the library crates.
//! * **[`config`]**: runtime options collected from the command line.

pub mod config;
pub mod error;
pub mod network;
pub mod wifi;

/// Logs a positive outcome. Rendered with the success symbol by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "linkscope::success", $($arg)*)
    };
}
