use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored player has no history rows.
    ///
    /// Every player is written together with at least one history entry, so this only
    /// happens if the rows were modified outside the sync. Results in a 500 Internal
    /// Server Error with a generic message returned to client.
    #[error("Player {account_id} is stored without any clan history")]
    EmptyHistory { account_id: u64 },
}
