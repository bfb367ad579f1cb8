//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults, reducing boilerplate in repository and
//! sync tests. Each entity has a `Factory` builder for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let clan = factory::clan::ClanFactory::new(&db)
//!         .clan_id(7)
//!         .name("Foo")
//!         .member_ids(vec![42])
//!         .build()
//!         .await?;
//!
//!     let player = factory::player::PlayerFactory::new(&db)
//!         .account_id(42)
//!         .history_entry(7, "Foo", 1000)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod clan;
pub mod helpers;
pub mod player;

pub use clan::create_clan;
pub use player::create_player;
