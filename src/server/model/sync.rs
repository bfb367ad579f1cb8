//! Sync pass parameters and results.

use crate::server::model::clan::ClanSummary;

/// Which clan list pages a pass requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRange {
    /// Inclusive, externally configured page range.
    Fixed { start: u32, end: u32 },
    /// Start at `start` and derive the last page from the total the API reports.
    Discover { start: u32 },
}

/// One clan list page.
#[derive(Debug, Clone, PartialEq)]
pub struct ClanPage {
    pub clans: Vec<ClanSummary>,
    /// Total number of clans across all pages, when the API reports it.
    pub total: Option<u64>,
    /// Last page number, reported by the API or derived from `total`.
    pub last_page: Option<u32>,
}

/// Outcome counters of a single sync pass.
///
/// A pass never fails as a whole; dropped units show up here instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub pages_requested: usize,
    pub pages_failed: usize,
    /// Distinct clans collected from the list pages.
    pub clans_seen: usize,
    /// Sum of the member counts the list pages report for those clans.
    pub members_listed: u64,
    pub clans_stored: usize,
    pub chunks_failed: usize,
    pub players_written: usize,
    pub players_orphaned: usize,
    /// Clanless players found in a stored roster and flagged back.
    pub players_restored: usize,
}
