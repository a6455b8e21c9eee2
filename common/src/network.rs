//! # Network Link Model
//!
//! * [`snapshot::LinkSnapshot`]: what the observation layer captured for a link.
//! * [`summary::LinkSummary`]: the display-ready digest of a snapshot.
//! * [`address::LinkAddress`] / [`route::Route`]: the raw pieces of a snapshot.

pub mod address;
pub mod interface;
pub mod ip;
pub mod mac;
pub mod route;
pub mod snapshot;
pub mod summary;
