use std::{collections::HashMap, time::Duration};

use serde::de::DeserializeOwned;

use crate::server::{
    config::ApiConfig,
    error::wot::WotApiError,
    model::{clan::ClanDetails, sync::ClanPage},
    wot::dto::{ClanInfoDto, ClanSummaryDto, Envelope, Meta},
};

/// Upper bound on clan ids per `clan/info/` request imposed by the API.
pub const MAX_CLAN_IDS_PER_REQUEST: usize = 100;

/// Clans requested per `clan/list/` page.
pub const LIST_PAGE_SIZE: u32 = 100;

const CONNECT_RETRY_BACKOFF: Duration = Duration::from_millis(200);

/// HTTP client for the remote clan API.
///
/// Cheap to clone; clones share the underlying connection pool. Every request carries the
/// configured timeout. Connect failures are retried transparently a bounded number of
/// times; every other failure is returned to the caller on the first occurrence.
#[derive(Clone)]
pub struct WotApiClient {
    http: reqwest::Client,
    base_url: String,
    application_id: String,
    max_connect_retries: u32,
}

impl WotApiClient {
    /// Creates a client from the API configuration.
    ///
    /// # Returns
    /// - `Ok(WotApiClient)` - Client ready for use
    /// - `Err(WotApiError::Client)` - The HTTP client could not be built
    pub fn new(config: &ApiConfig) -> Result<Self, WotApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(WotApiError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
            application_id: config.application_id.clone(),
            max_connect_retries: config.max_connect_retries,
        })
    }

    /// Fetches one page of the clan list.
    ///
    /// # Arguments
    /// - `page_no` - 1-based page number
    ///
    /// # Returns
    /// - `Ok(ClanPage)` - The clans on this page (empty past the last page) and the
    ///   pagination bounds when the API reports them
    /// - `Err(WotApiError)` - Transport, HTTP, decoding or API-level failure
    pub async fn list_clans(&self, page_no: u32) -> Result<ClanPage, WotApiError> {
        let (clans, meta) = self
            .get::<Vec<ClanSummaryDto>>(
                "clan/list/",
                &[
                    ("page_no", page_no.to_string()),
                    ("limit", LIST_PAGE_SIZE.to_string()),
                ],
            )
            .await?;

        let meta = meta.unwrap_or_default();
        let last_page = meta.page_total.or_else(|| {
            let limit = u64::from(meta.limit.unwrap_or(LIST_PAGE_SIZE).max(1));
            meta.total.map(|total| total.div_ceil(limit) as u32)
        });

        Ok(ClanPage {
            clans: clans.into_iter().map(Into::into).collect(),
            total: meta.total,
            last_page,
        })
    }

    /// Fetches full records, including rosters, for a batch of clans.
    ///
    /// Ids the API does not know come back as `null` and are left out of the result.
    ///
    /// # Arguments
    /// - `clan_ids` - At most `MAX_CLAN_IDS_PER_REQUEST` clan ids
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Clan records keyed by clan id
    /// - `Err(WotApiError::BatchTooLarge)` - Too many ids; no request was sent
    /// - `Err(WotApiError)` - Transport, HTTP, decoding or API-level failure
    pub async fn get_clan_details(
        &self,
        clan_ids: &[u64],
    ) -> Result<HashMap<u64, ClanDetails>, WotApiError> {
        if clan_ids.is_empty() {
            return Ok(HashMap::new());
        }
        if clan_ids.len() > MAX_CLAN_IDS_PER_REQUEST {
            return Err(WotApiError::BatchTooLarge {
                requested: clan_ids.len(),
                max: MAX_CLAN_IDS_PER_REQUEST,
            });
        }

        let ids = clan_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let (data, _) = self
            .get::<HashMap<String, Option<ClanInfoDto>>>("clan/info/", &[("clan_id", ids)])
            .await?;

        Ok(data
            .into_iter()
            .filter_map(|(key, info)| match info {
                Some(info) => Some((info.clan_id, ClanDetails::from(info))),
                None => {
                    tracing::debug!("Clan {} is unknown to the clan API", key);
                    None
                }
            })
            .collect())
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<(T, Option<Meta>), WotApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self.send_with_retry(&url, params).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WotApiError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(WotApiError::ConnectionFailure)?;
        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|e| WotApiError::MalformedResponse {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            })?;

        if envelope.status != "ok" {
            let error = envelope.error;
            return Err(WotApiError::Api {
                endpoint: endpoint.to_string(),
                code: error.as_ref().and_then(|e| e.code).unwrap_or_default(),
                message: error
                    .and_then(|e| e.message)
                    .unwrap_or_else(|| format!("status '{}'", envelope.status)),
            });
        }

        let data = envelope
            .data
            .ok_or_else(|| WotApiError::MalformedResponse {
                endpoint: endpoint.to_string(),
                reason: "missing data".to_string(),
            })?;

        Ok((data, envelope.meta))
    }

    async fn send_with_retry(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<reqwest::Response, WotApiError> {
        let mut attempt = 0;
        loop {
            let result = self
                .http
                .get(url)
                .query(&[("application_id", self.application_id.as_str())])
                .query(params)
                .send()
                .await;

            match result {
                Ok(response) => return Ok(response),
                Err(e) if e.is_connect() && attempt < self.max_connect_retries => {
                    attempt += 1;
                    tracing::warn!(
                        "Connect to {} failed (attempt {}/{}): {}",
                        url,
                        attempt,
                        self.max_connect_retries,
                        e
                    );
                    tokio::time::sleep(CONNECT_RETRY_BACKOFF * attempt).await;
                }
                Err(e) => return Err(WotApiError::ConnectionFailure(e)),
            }
        }
    }
}
