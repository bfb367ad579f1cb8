//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT touch the database. They build the JSON bodies the
//! remote clan API returns so mock servers can serve realistic responses.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture::wot;
//!
//! let body = wot::clan_list_page(&[wot::clan_summary(7, "Foo", 1)], Some(1));
//! let info = wot::clan_info(&[wot::clan(7, "Foo", &[wot::member(42, "Alice", 1000)])]);
//! ```

pub mod wot;
