//! Data transfer objects returned by the read API.
//!
//! Every timestamp is serialized as Unix seconds.

pub mod api;
pub mod clan;
pub mod player;
