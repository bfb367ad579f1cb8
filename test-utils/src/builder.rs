use entity::prelude::*;
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Clan, ClanMember};
///
/// let test = TestBuilder::new()
///     .with_table(Clan)
///     .with_table(ClanMember)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements for `#[sea_orm(indexed)]` columns.
    ///
    /// Executed after every table exists so the lookups exercised in tests use the same
    /// secondary indexes the migrations create.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table and its column indexes to the test database schema.
    ///
    /// Generates CREATE TABLE and CREATE INDEX statements from the provided SeaORM entity
    /// using SQLite backend syntax. Tables should be added in dependency order (tables with
    /// foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self.indexes.extend(schema.create_index_from_entity(entity));
        self
    }

    /// Adds the clan tables (`clan`, `clan_member`).
    pub fn with_clan_tables(self) -> Self {
        self.with_table(Clan).with_table(ClanMember)
    }

    /// Adds the player tables (`player`, `player_history`).
    pub fn with_player_tables(self) -> Self {
        self.with_table(Player).with_table(PlayerHistory)
    }

    /// Adds every table the sync pass touches.
    ///
    /// Use this for orchestrator tests and anything crossing the clan/player boundary,
    /// such as orphan detection.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_clan_history_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_clan_history_tables(self) -> Self {
        self.with_clan_tables().with_player_tables()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
