//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary, built from
//! remote API records by the clan client, and transformed to DTOs at the controller
//! boundary.

pub mod clan;
pub mod player;
pub mod sync;
