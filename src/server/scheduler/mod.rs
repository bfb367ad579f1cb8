//! Cron jobs driving background work.

pub mod clan_sync;
