//! HTTP handlers of the read-only query API.

pub mod clan;
pub mod player;
