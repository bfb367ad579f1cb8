//! Database repository layer.
//!
//! Repositories handle all database operations for clans and players. They use SeaORM
//! entity models internally and return domain models, so the reconciliation and sync
//! layers never deal with rows. Every repository borrows an explicitly passed
//! `DatabaseConnection`; there is no global handle.

pub mod clan;
pub mod player;

#[cfg(test)]
mod test;
