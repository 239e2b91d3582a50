//! Database repository layer for all domain entities.
//!
//! `resource` holds the generic repository shared by every CRUD resource and the
//! [`resource::Resource`] trait each entity module implements. Entity modules add
//! the queries specific to them (birthday lookups, shift change mirrors, ...).
//! All database queries, inserts, updates, and deletes are performed here.

pub mod action_log;
pub mod address;
pub mod aircraft;
pub mod aircraft_pilot;
pub mod airport;
pub mod bank;
pub mod business_unit;
pub mod employee;
pub mod employee_bank;
pub mod employee_child;
pub mod employee_medical_condition;
pub mod employee_spouse;
pub mod exception_request;
pub mod exception_type;
pub mod medical_condition;
pub mod notification_email;
pub mod proceeding_file;
pub mod resource;
pub mod shift;
pub mod shift_change;
pub mod system_setting;
pub mod user;
pub mod work_disability;

#[cfg(test)]
mod test;
