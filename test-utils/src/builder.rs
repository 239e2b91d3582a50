use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Either add individual entity tables with `with_table()`, or run the full
/// migration set with `with_migrations()` when the test depends on indexes the migrations
/// create (the partial unique indexes on live rows, for example).
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{BusinessUnit, Employee};
///
/// let test = TestBuilder::new()
///     .with_table(BusinessUnit)
///     .with_table(Employee)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Whether to run the application migrations instead of the entity statements.
    migrations: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            migrations: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Runs every application migration against the test database.
    ///
    /// Produces exactly the production schema, including the unique indexes that
    /// only cover rows where `deleted_at IS NULL`. Tables added through
    /// `with_table()` are ignored when migrations are enabled.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_migrations(mut self) -> Self {
        self.migrations = true;
        self
    }

    /// Adds the tables required by employee-scoped records.
    ///
    /// Adds BusinessUnit, User, ActionLog and Employee in dependency order.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_employee_tables(self) -> Self {
        use entity::prelude::*;

        self.with_table(BusinessUnit)
            .with_table(User)
            .with_table(ActionLog)
            .with_table(Employee)
    }

    /// Builds and initializes the test context with the configured schema.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        if self.migrations {
            setup.with_migrations().await?;
        } else {
            setup.with_tables(self.tables).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
