//! Server-side domain models and parameter types.
//!
//! Types here travel between controllers, services and repositories but never
//! appear directly on the wire.

pub mod action_log;
pub mod pagination;
pub mod proceeding_file;
pub mod verification;
