//! Business logic layer.
//!
//! Services validate business rules, coordinate repositories and collaborators
//! (storage, mail) and write the audit trail. Controllers call into services;
//! services never build HTTP responses.

pub mod action_log;
pub mod birthday;
pub mod proceeding_file;
pub mod resource;
pub mod shift_change;

#[cfg(test)]
mod test;
