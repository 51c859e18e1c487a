//! Core HTTP client for the Semaphore CI v1 API

use compact_str::{format_compact, CompactString, ToCompactString};
use reqwest::{header::HeaderMap, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};

use super::{
    config::ClientConfig,
    error::{ClientError, Result},
};
use crate::{
    domain::{
        BranchHistory, BranchStatus, BriefBranchInfo, BuildInfo, BuildLog, Pagination, Project,
    },
    id::{BranchId, BuildNumber},
};

/// Response header carrying pagination metadata. The live API spells it
/// `pagination` on the initial history fetch and `Pagination` on paged
/// fetches; header lookup is case-insensitive, so both resolve here.
const PAGINATION_HEADER: &str = "pagination";

/// Authenticated HTTP client for the Semaphore API
#[derive(Debug, Clone)]
pub struct SemaphoreApi {
    client: reqwest::Client,
    config: ClientConfig,
}

impl SemaphoreApi {
    /// Create a new Semaphore API client
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Transport)?;

        Ok(Self { client, config })
    }

    /// List all projects visible to the authenticated account
    #[instrument(skip(self))]
    pub async fn projects(&self) -> Result<Vec<Project>> {
        self.get_json("projects", &[]).await
    }

    /// Bind a project hash id for follow-up requests; no network call
    pub fn project(&self, hash_id: impl Into<CompactString>) -> ProjectApi {
        ProjectApi {
            api: self.clone(),
            hash_id: hash_id.into(),
        }
    }

    /// Get current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Perform an authenticated GET and return the raw body and headers.
    ///
    /// The query string always starts with `auth_token`; extra parameters
    /// are appended in caller order as `&key=value`. Values are not
    /// URL-encoded, so reserved characters in a value will corrupt the
    /// request.
    ///
    /// A non-200 status fails with [`ClientError::Status`], which discards
    /// the body but keeps the response headers. Decoding a successful body
    /// is the caller's responsibility.
    pub async fn get_request(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<(Vec<u8>, HeaderMap)> {
        let url = self.build_url(path, params);
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        if status != StatusCode::OK {
            debug!(%status, path, "discarding response body");
            return Err(ClientError::status(status, path, headers));
        }

        let body = response.bytes().await?;
        Ok((body.to_vec(), headers))
    }

    // Private helper methods

    /// Authenticated GET followed by a JSON body decode
    async fn get_json<T>(&self, path: &str, params: &[(&str, &str)]) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let (body, _headers) = self.get_request(path, params).await?;
        serde_json::from_slice(&body).map_err(|e| ClientError::decode(path, e))
    }

    /// Build the full request URL for a relative path
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> CompactString {
        let mut url = format_compact!(
            "{}/{}?auth_token={}",
            self.config.base_url,
            path,
            self.config.auth_token
        );

        for (key, value) in params {
            url.push_str(&format_compact!("&{key}={value}"));
        }

        url
    }
}

/// Accessors scoped to a single project, identified by its hash id
#[derive(Debug, Clone)]
pub struct ProjectApi {
    api: SemaphoreApi,
    hash_id: CompactString,
}

impl ProjectApi {
    /// Hash id this handle is bound to
    pub fn hash_id(&self) -> &str {
        &self.hash_id
    }

    /// List branches of the project
    #[instrument(skip_all, fields(hash_id = %self.hash_id))]
    pub async fn branches(&self) -> Result<Vec<BriefBranchInfo>> {
        let path = format_compact!("projects/{}/branches", self.hash_id);
        self.api.get_json(&path, &[]).await
    }

    /// Latest build status of a branch
    #[instrument(skip_all, fields(hash_id = %self.hash_id))]
    pub async fn branch_status(&self, branch: impl Into<BranchId>) -> Result<BranchStatus> {
        let branch: BranchId = branch.into();
        let path = format_compact!("projects/{}/{}/status", self.hash_id, branch);
        self.api.get_json(&path, &[]).await
    }

    /// First page of a branch's build history
    #[instrument(skip_all, fields(hash_id = %self.hash_id))]
    pub async fn branch_history(&self, branch: impl Into<BranchId>) -> Result<BranchHistory> {
        let branch: BranchId = branch.into();
        let path = format_compact!("projects/{}/{}", self.hash_id, branch);
        self.fetch_history(&path, &[]).await
    }

    /// Fetch the page following the one recorded in `history`
    #[instrument(skip_all, fields(hash_id = %self.hash_id))]
    pub async fn branch_history_next_page(
        &self,
        history: &BranchHistory,
    ) -> Result<BranchHistory> {
        let page = (history.pagination.current_page + 1).to_compact_string();
        let path = format_compact!("projects/{}/{}", self.hash_id, history.branch.branch_name);
        self.fetch_history(&path, &[("page", page.as_str())]).await
    }

    /// Full detail of a single build
    #[instrument(skip_all, fields(hash_id = %self.hash_id))]
    pub async fn build_info(
        &self,
        branch: impl Into<BranchId>,
        number: impl Into<BuildNumber>,
    ) -> Result<BuildInfo> {
        let branch: BranchId = branch.into();
        let number: BuildNumber = number.into();
        let path = format_compact!("projects/{}/{}/builds/{}", self.hash_id, branch, number);
        self.api.get_json(&path, &[]).await
    }

    /// Per-thread command log of a single build
    #[instrument(skip_all, fields(hash_id = %self.hash_id))]
    pub async fn build_log(
        &self,
        branch: impl Into<BranchId>,
        number: impl Into<BuildNumber>,
    ) -> Result<BuildLog> {
        let branch: BranchId = branch.into();
        let number: BuildNumber = number.into();
        let path = format_compact!("projects/{}/{}/builds/{}/log", self.hash_id, branch, number);
        self.api.get_json(&path, &[]).await
    }

    // Private helper methods

    /// Decode a history response: body first, then the pagination header.
    ///
    /// A body decode failure is a plain [`ClientError::Decode`]. A header
    /// decode failure attaches the body-decoded history to the error, so
    /// callers can still inspect the branch and builds. A missing header
    /// decodes from an empty byte slice and takes the same path.
    async fn fetch_history(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<BranchHistory> {
        let (body, headers) = self.api.get_request(path, params).await?;
        let mut history: BranchHistory =
            serde_json::from_slice(&body).map_err(|e| ClientError::decode(path, e))?;

        let raw = headers
            .get(PAGINATION_HEADER)
            .map(|value| value.as_bytes())
            .unwrap_or_default();

        match serde_json::from_slice::<Pagination>(raw) {
            Ok(pagination) => {
                debug!(
                    current_page = pagination.current_page,
                    total_pages = pagination.total_pages,
                    "decoded pagination header"
                );
                history.pagination = pagination;
                Ok(history)
            },
            Err(e) => Err(ClientError::pagination_decode(path, history, e)),
        }
    }
}
