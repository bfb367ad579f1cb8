//! Clan and player synchronization pass.
//!
//! One pass walks three phases, each a barrier for the next:
//!
//! 1. **Fetching pages**: the configured clan list pages are fetched and the clan ids
//!    collected, de-duplicated across pages.
//! 2. **Fetching members**: clan ids are chunked, each chunk's full records are fetched in
//!    one request, and every clan is stored and its roster reconciled into player history.
//! 3. **Sweeping orphans**: every stored player that no stored clan roster contains is
//!    flagged as clanless.
//!
//! Pages and chunks are independent units handed to a [`Dispatcher`]. A unit that fails
//! is logged and dropped; the pass always runs to completion and reports what it dropped.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tokio::{sync::Mutex, time::Instant};

use crate::server::{
    config::SyncConfig,
    data::{clan::ClanRepository, player::PlayerRepository},
    dispatch::Dispatcher,
    error::{wot::WotApiError, AppError},
    model::{
        clan::ClanDetails,
        sync::{ClanPage, PageRange, SyncReport},
    },
    service::reconcile::reconcile_clan,
    wot::WotApiClient,
};

/// Players loaded per page while sweeping for orphans.
const SWEEP_PAGE_SIZE: u64 = 500;

/// Result of one successfully processed clan chunk.
#[derive(Debug, Default)]
struct ChunkOutcome {
    clans_stored: usize,
    players_written: usize,
}

/// Runs synchronization passes against the remote clan API.
///
/// The service owns clones of the database pool and the API client so that every unit of
/// work it dispatches is self-contained. At most one pass runs at a time.
pub struct SyncService<D> {
    db: DatabaseConnection,
    client: WotApiClient,
    dispatcher: D,
    page_range: PageRange,
    chunk_size: usize,
    running: Mutex<()>,
}

impl<D: Dispatcher> SyncService<D> {
    /// Creates a new SyncService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `client` - Remote clan API client
    /// - `dispatcher` - Executes the pages and chunks of each phase
    /// - `config` - Page range and chunk size
    pub fn new(
        db: DatabaseConnection,
        client: WotApiClient,
        dispatcher: D,
        config: &SyncConfig,
    ) -> Self {
        Self {
            db,
            client,
            dispatcher,
            page_range: config.page_range,
            chunk_size: config.chunk_size.max(1),
            running: Mutex::new(()),
        }
    }

    /// Runs one full synchronization pass.
    ///
    /// # Returns
    /// - `Some(SyncReport)` - The pass ran; dropped pages and chunks are counted in the report
    /// - `None` - Another pass was already running, so this one was skipped
    pub async fn run(&self) -> Option<SyncReport> {
        let Ok(_running) = self.running.try_lock() else {
            tracing::warn!("Sync pass already in progress, skipping");
            return None;
        };

        let started = Instant::now();
        let mut report = SyncReport::default();
        tracing::info!("Starting sync pass ({:?})", self.page_range);

        let clan_ids = self.fetch_pages(&mut report).await;
        tracing::info!(
            "Collected {} clans from {} pages ({} failed)",
            clan_ids.len(),
            report.pages_requested,
            report.pages_failed
        );

        self.fetch_members(clan_ids, &mut report).await;
        tracing::info!(
            "Stored {} clans and {} players ({} chunks failed)",
            report.clans_stored,
            report.players_written,
            report.chunks_failed
        );

        self.sweep_orphans(&mut report).await;

        tracing::info!(
            "Sync pass finished in {:.1}s: {:?}",
            started.elapsed().as_secs_f64(),
            report
        );
        Some(report)
    }

    /// Fetches the clan list pages and returns the distinct clan ids, ascending.
    async fn fetch_pages(&self, report: &mut SyncReport) -> Vec<u64> {
        // Clan id to the member count the list reports for it.
        let mut clan_ids = BTreeMap::new();

        let pages: Vec<u32> = match self.page_range {
            PageRange::Fixed { start, end } => (start..=end).collect(),
            PageRange::Discover { start } => {
                report.pages_requested += 1;
                let first = match self.client.list_clans(start).await {
                    Ok(page) => page,
                    Err(e) => {
                        log_page_failure(start, &e);
                        report.pages_failed += 1;
                        return Vec::new();
                    }
                };

                if let Some(total) = first.total {
                    tracing::info!("Clan API reports {} clans in total", total);
                }
                let last_page = first.last_page;
                let first_empty = first.clans.is_empty();
                collect_ids(&mut clan_ids, first);

                match last_page {
                    Some(last) => (start.saturating_add(1)..=last).collect(),
                    None => {
                        if !first_empty {
                            self.walk_pages(start.saturating_add(1), &mut clan_ids, report)
                                .await;
                        }
                        Vec::new()
                    }
                }
            }
        };

        report.pages_requested += pages.len();
        let client = self.client.clone();
        let outcomes = self
            .dispatcher
            .dispatch(pages, move |page_no| {
                let client = client.clone();
                async move { (page_no, client.list_clans(page_no).await) }
            })
            .await;

        for (page_no, outcome) in outcomes {
            match outcome {
                Ok(page) => collect_ids(&mut clan_ids, page),
                Err(e) => {
                    log_page_failure(page_no, &e);
                    report.pages_failed += 1;
                }
            }
        }

        report.clans_seen = clan_ids.len();
        report.members_listed = clan_ids.values().map(|&count| u64::from(count)).sum();
        tracing::info!(
            "Found {} clans and {} players in total",
            report.clans_seen,
            report.members_listed
        );
        clan_ids.into_keys().collect()
    }

    /// Walks pages one by one until an empty page, for APIs that report no total.
    async fn walk_pages(
        &self,
        mut page_no: u32,
        clan_ids: &mut BTreeMap<u64, u32>,
        report: &mut SyncReport,
    ) {
        loop {
            report.pages_requested += 1;
            match self.client.list_clans(page_no).await {
                Ok(page) if page.clans.is_empty() => break,
                Ok(page) => collect_ids(clan_ids, page),
                Err(e) => {
                    log_page_failure(page_no, &e);
                    tracing::warn!("Stopping page walk at page {}", page_no);
                    report.pages_failed += 1;
                    break;
                }
            }
            page_no = page_no.saturating_add(1);
        }
    }

    async fn fetch_members(&self, clan_ids: Vec<u64>, report: &mut SyncReport) {
        let chunks: Vec<Vec<u64>> = clan_ids
            .chunks(self.chunk_size)
            .map(<[u64]>::to_vec)
            .collect();

        let client = self.client.clone();
        let db = self.db.clone();
        let outcomes = self
            .dispatcher
            .dispatch(chunks, move |chunk| {
                let client = client.clone();
                let db = db.clone();
                async move {
                    let first = chunk.first().copied().unwrap_or_default();
                    let outcome = sync_chunk(&client, &db, &chunk).await;
                    (first, chunk.len(), outcome)
                }
            })
            .await;

        for (first, len, outcome) in outcomes {
            match outcome {
                Ok(outcome) => {
                    report.clans_stored += outcome.clans_stored;
                    report.players_written += outcome.players_written;
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to sync chunk of {} clans starting at {}: {}",
                        len,
                        first,
                        e
                    );
                    report.chunks_failed += 1;
                }
            }
        }
    }

    /// Aligns every player's `has_clan` flag with the stored clan rosters.
    ///
    /// Players no roster contains are flagged clanless. Players a roster contains but who
    /// are flagged clanless, which happens when their own write failed after the roster
    /// was stored, are flagged back.
    async fn sweep_orphans(&self, report: &mut SyncReport) {
        let players = PlayerRepository::new(&self.db);
        let clans = ClanRepository::new(&self.db);
        let mut pages = players.iterate_all(SWEEP_PAGE_SIZE);

        loop {
            let page = match pages.next_page().await {
                Ok(Some(page)) => page,
                Ok(None) => break,
                Err(e) => {
                    tracing::error!("Orphan sweep aborted: {}", e);
                    break;
                }
            };

            let mut orphans = Vec::new();
            let mut members = Vec::new();
            for player in &page {
                match clans.find_clan_containing_member(player.account_id).await {
                    Ok(Some(clan_id)) if !player.has_clan => {
                        tracing::debug!(
                            "Player {} is listed in clan {} but flagged clanless",
                            player.account_id,
                            clan_id
                        );
                        members.push(player.account_id);
                    }
                    Ok(None) if player.has_clan => {
                        tracing::debug!("Player {} is no longer in any clan", player.account_id);
                        orphans.push(player.account_id);
                    }
                    Ok(_) => {}
                    Err(e) => tracing::error!(
                        "Failed to check clan membership of player {}: {}",
                        player.account_id,
                        e
                    ),
                }
            }

            match players.mark_clanless(&orphans).await {
                Ok(updated) => report.players_orphaned += updated as usize,
                Err(e) => tracing::error!(
                    "Failed to flag {} players as clanless: {}",
                    orphans.len(),
                    e
                ),
            }
            match players.mark_in_clan(&members).await {
                Ok(updated) => report.players_restored += updated as usize,
                Err(e) => tracing::error!(
                    "Failed to flag {} players as clan members: {}",
                    members.len(),
                    e
                ),
            }
        }

        tracing::info!(
            "Orphan sweep flagged {} players clanless and restored {}",
            report.players_orphaned,
            report.players_restored
        );
    }
}

fn collect_ids(clan_ids: &mut BTreeMap<u64, u32>, page: ClanPage) {
    clan_ids.extend(page.clans.into_iter().map(|c| (c.clan_id, c.members_count)));
}

fn log_page_failure(page_no: u32, e: &WotApiError) {
    if e.is_connection_failure() {
        tracing::error!(
            "Clan API unreachable for list page {}, dropping it for this pass: {}",
            page_no,
            e
        );
    } else {
        tracing::error!("Failed to fetch clan list page {}: {}", page_no, e);
    }
}

/// Fetches one chunk of clans and stores them with their reconciled rosters.
///
/// Clans are processed in chunk order. The first database error aborts the rest of the
/// chunk; clans stored before it stay stored.
async fn sync_chunk(
    client: &WotApiClient,
    db: &DatabaseConnection,
    chunk: &[u64],
) -> Result<ChunkOutcome, AppError> {
    let details = client.get_clan_details(chunk).await?;
    let mut outcome = ChunkOutcome::default();

    for clan_id in chunk {
        let Some(clan) = details.get(clan_id) else {
            tracing::debug!("Clan {} has no details, skipping", clan_id);
            continue;
        };

        outcome.players_written += sync_clan(db, clan, Utc::now()).await?;
        outcome.clans_stored += 1;
    }

    Ok(outcome)
}

/// Stores one clan and reconciles its roster.
///
/// A clan without members is still stored, with an empty roster, and reconciles no
/// players.
///
/// # Returns
/// - `Ok(usize)` - Number of players written
/// - `Err(AppError::DbErr)` - Database error while storing the clan or its players
async fn sync_clan(
    db: &DatabaseConnection,
    clan: &ClanDetails,
    now: DateTime<Utc>,
) -> Result<usize, AppError> {
    ClanRepository::new(db).upsert(&clan.to_clan(now)).await?;

    if clan.members.is_empty() {
        tracing::debug!("Clan {} has no members", clan.clan_id);
        return Ok(0);
    }

    let players = PlayerRepository::new(db);
    let mut existing = players.find_by_account_ids(&clan.member_ids()).await?;
    let reconciled = reconcile_clan(clan, &mut existing, now);

    Ok(players.bulk_upsert(&reconciled).await?)
}
