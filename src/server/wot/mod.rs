//! Client for the remote clan API.
//!
//! Two endpoints are used: the paginated clan list and the batched clan details lookup.
//! Responses are decoded from the API's `{status, meta, data, error}` envelope into
//! domain models; nothing outside this module sees the wire format.

pub mod client;
mod dto;

pub use client::{WotApiClient, MAX_CLAN_IDS_PER_REQUEST};
