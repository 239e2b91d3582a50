//! SeaORM entities for the personnel database.
//!
//! One module per table. Every table carries `created_at` / `updated_at`
//! timestamps; tables that support soft deletion additionally carry a nullable
//! `deleted_at` column, which the repository layer uses to hide inactive rows.

pub mod prelude;

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
pub mod employee_shift_change;
pub mod employee_spouse;
pub mod exception_request;
pub mod exception_type;
pub mod medical_condition;
pub mod notification_email;
pub mod proceeding_file;
pub mod shift;
pub mod system_setting;
pub mod user;
pub mod work_disability;
