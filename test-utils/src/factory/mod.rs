//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has its own module with a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let unit = factory::business_unit::create_business_unit(&db).await?;
//! let employee = factory::employee::EmployeeFactory::new(&db, unit.id)
//!     .first_name("Luis")
//!     .build()
//!     .await?;
//! ```

pub mod business_unit;
pub mod catalog;
pub mod employee;
pub mod helpers;
pub mod user;

pub use business_unit::create_business_unit;
pub use catalog::{create_bank, create_exception_type, create_medical_condition, create_shift};
pub use employee::create_employee;
pub use user::create_user;
