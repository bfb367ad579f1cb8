use thiserror::Error;

/// Failures talking to the remote clan API.
///
/// The orchestrator treats every variant the same way: the affected page or clan chunk
/// is logged and dropped for this pass. `ConnectionFailure` is kept distinct because it
/// is the only kind the client retries on its own.
#[derive(Error, Debug)]
pub enum WotApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The API could not be reached or did not answer within the request timeout.
    #[error("Connection to the clan API failed: {0}")]
    ConnectionFailure(#[source] reqwest::Error),

    /// The API answered with a non-success HTTP status.
    #[error("Clan API returned HTTP {status} for {endpoint}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    /// The body could not be decoded into the expected envelope.
    #[error("Malformed response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    /// The envelope carried a status other than `ok`.
    #[error("Clan API error {code} on {endpoint}: {message}")]
    Api {
        endpoint: String,
        code: u16,
        message: String,
    },

    /// More clan ids were passed to one details request than the API accepts.
    #[error("Requested {requested} clans in one batch, the API accepts at most {max}")]
    BatchTooLarge { requested: usize, max: usize },
}

impl WotApiError {
    /// Whether the failure happened at the transport level.
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, Self::ConnectionFailure(_))
    }
}
