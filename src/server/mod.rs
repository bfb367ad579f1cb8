//! Server-side synchronization engine and read API.
//!
//! The server keeps a local store of clans and players in step with the remote clan API
//! and serves the stored data through a small read-only HTTP API. The backend uses Axum
//! as the web framework, SeaORM for database operations, and reqwest for the remote API.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Read services, reconciliation, and the sync pass
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and sync parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Remote API** (`wot/`) - Client and wire format of the remote clan API
//! - **Dispatch** (`dispatch`) - Bounded-concurrency execution of sync work units
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool)
//! - **Startup** (`startup`) - Database connection, migrations, and sync service setup
//! - **Router** (`router`) - Axum route configuration
//! - **Scheduler** (`scheduler/`) - Cron job running the sync pass
//!
//! # Sync Flow
//!
//! 1. **Scheduler** fires and asks the sync service for a pass
//! 2. **Service** fetches clan list pages through the **Remote API** client
//! 3. **Service** fetches clan rosters in chunks and runs **Reconciliation** per clan
//! 4. **Data** stores clans and players, then serves the orphan sweep

pub mod config;
pub mod controller;
pub mod data;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod wot;
