use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` (or one of the grouped helpers) and call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Order, OrderItem, Product};
///
/// let test = TestBuilder::new()
///     .with_table(Product)
///     .with_table(Order)
///     .with_table(OrderItem)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the entity using SQLite syntax. Tables
    /// with foreign keys should be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables used by member registration and reconciliation.
    ///
    /// Adds `Member` and `CodeSequence`.
    pub fn with_member_tables(self) -> Self {
        self.with_table(Member).with_table(CodeSequence)
    }

    /// Adds the tables used by order placement in dependency order.
    ///
    /// Adds `Product`, `Order` and `OrderItem`.
    pub fn with_order_tables(self) -> Self {
        self.with_table(Product)
            .with_table(Order)
            .with_table(OrderItem)
    }

    /// Adds every table of the club schema.
    ///
    /// Used by controller tests that build a full application state.
    pub fn with_club_tables(self) -> Self {
        self.with_member_tables()
            .with_order_tables()
            .with_table(Fixture)
            .with_table(News)
            .with_table(Contact)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
