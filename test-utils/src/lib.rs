//! Clan History Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the clan
//! history sync. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, entity factories for seeding stored state, and JSON fixtures shaped like
//! the remote clan API responses.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert clans and players with sensible defaults
//! - **fixture**: Remote API payloads for mock servers (no database)
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_player_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_clan_history_tables()
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
