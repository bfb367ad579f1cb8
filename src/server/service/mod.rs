//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller layer and the data layer:
//!
//! - **Read services** (`clan`, `player`) back the query API
//! - **Reconciliation** (`reconcile`) maps observed rosters onto stored player history
//! - **Synchronization** (`sync`) runs the paged fetch, reconcile and orphan sweep pass

pub mod clan;
pub mod player;
pub mod reconcile;
pub mod sync;

#[cfg(test)]
mod test;
