//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the personnel service: API
//! endpoints, business logic, data access and the collaborators it talks to
//! (object storage, mail relay). The backend uses Axum as the web framework and
//! SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, extraction and envelope responses
//! - **Service Layer** (`service/`) - Business rules, conflict checks, transactions and audit logging
//! - **Data Layer** (`data/`) - The `Resource` bindings and all database queries
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token resolution of the acting user
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, storage, mailer, cipher, config)
//! - **Startup** (`startup`) - Initialization of database and collaborators
//! - **Router** (`router`) - Axum route configuration
//! - **Scheduler** (`scheduler/`) - Cron jobs (birthday reminders)
//! - **External** (`external/`) - Object storage and mail relay clients
//! - **I18n** (`i18n`) - Spanish/English titles and messages chosen by `Accept-Language`
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the matching controller
//! 2. **Controller** extracts locale, actor and payload, runs field validation
//! 3. **Service** runs business checks and conflict checks, then writes
//! 4. **Data** queries the database through SeaORM
//! 5. **Service** records the audit entry and returns the model
//! 6. **Controller** wraps the result in the `{ type, title, message, data }` envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod external;
pub mod i18n;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
mod test;
