//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and supply default values for
//! the factories. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let employee = fixture::employee::entity();
//!
//! let hr = fixture::user::entity_builder()
//!     .role("rh")
//!     .business_access("norte,sur")
//!     .build();
//! ```

pub mod business_unit;
pub mod employee;
pub mod user;

pub use business_unit::{
    entity as business_unit_entity, entity_builder as business_unit_entity_builder,
};
pub use employee::{entity as employee_entity, entity_builder as employee_entity_builder};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
