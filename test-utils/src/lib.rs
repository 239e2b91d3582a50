//! Personnel Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the personnel
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, plus factories and fixtures for the most commonly needed records.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert records with sensible defaults
//! - **fixture**: In-memory models without database insertion
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_employee_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_migrations()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
