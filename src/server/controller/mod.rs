//! HTTP handlers.
//!
//! Handlers extract and normalize the request, run payload validation, call the
//! matching service and wrap the outcome in the response envelope. Extraction
//! failures are taken as `Result`s so they are rendered as envelopes too.

pub mod aircraft;
pub mod employee_bank;
pub mod notification;
pub mod proceeding_file;
pub mod resource;
pub mod shift_change;
