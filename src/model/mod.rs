//! Wire models shared by every endpoint.
//!
//! Request DTOs are deserialized straight from the HTTP body, normalized by the
//! helpers in `normalize` and checked with `validation::Validate` before they
//! reach a service. Response DTOs are always wrapped in `api::EnvelopeDto`.

pub mod api;
pub mod aviation;
pub mod catalog;
pub mod employee;
pub mod exception_request;
pub mod normalize;
pub mod notification;
pub mod proceeding_file;
pub mod setting;
pub mod shift_change;
pub mod validation;
pub mod work_disability;
