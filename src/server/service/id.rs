//! Identifier generation.
//!
//! This module provides the `IdGenerator` for issuing numeric row IDs that stay unique
//! across independently operating partitions, and opaque time-ordered tokens for sessions.
//! A node either draws IDs locally or, when configured with a root node, asks that node for
//! each ID so a whole cluster shares one de-duplication set.

use std::{collections::HashSet, sync::Arc};

use rand::Rng;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::server::error::AppError;

/// Exclusive upper bound of the candidate range.
const ID_CANDIDATE_RANGE: i64 = 8_223_372_036_854_775_807;

/// Added to every candidate so issued IDs never overlap small hand-seeded IDs.
pub const ID_OFFSET: i64 = 100_000_000_001;

/// Path on the root node that issues IDs.
pub const GENERATE_PATH: &str = "/admin/generate";

/// Node that issues IDs on behalf of this process.
#[derive(Clone)]
struct RootNode {
    url: String,
    client: reqwest::Client,
}

/// Issues unique numeric IDs and opaque tokens.
///
/// Cloning is cheap; clones share the issued-candidate set, so every handler in the
/// process draws from the same pool.
#[derive(Clone)]
pub struct IdGenerator {
    /// Candidates already issued by this process.
    issued: Arc<Mutex<HashSet<i64>>>,
    /// Root node to delegate to, if configured.
    root: Option<RootNode>,
}

impl IdGenerator {
    /// Creates a generator that draws IDs locally.
    ///
    /// # Returns
    /// - `IdGenerator` - Generator with an empty issued set
    pub fn local() -> Self {
        Self {
            issued: Arc::new(Mutex::new(HashSet::new())),
            root: None,
        }
    }

    /// Creates a generator that delegates every ID to the root node at `url`.
    ///
    /// # Arguments
    /// - `url` - Base URL of the root node, e.g. `http://root:8080`
    /// - `client` - HTTP client used for the delegation call
    ///
    /// # Returns
    /// - `IdGenerator` - Delegating generator
    pub fn with_root(url: String, client: reqwest::Client) -> Self {
        Self {
            issued: Arc::new(Mutex::new(HashSet::new())),
            root: Some(RootNode {
                url: url.trim_end_matches('/').to_string(),
                client,
            }),
        }
    }

    /// Issues a new numeric ID.
    ///
    /// # Returns
    /// - `Ok(i64)` - A positive ID this process (or the root node) has not issued before
    /// - `Err(AppError::ReqwestErr)` - The root node could not be reached or returned an
    ///   error status
    /// - `Err(AppError::InternalError)` - The root node's response was not an integer
    pub async fn new_id(&self) -> Result<i64, AppError> {
        match &self.root {
            Some(root) => Self::fetch_from_root(root).await,
            None => Ok(self.new_local_id().await),
        }
    }

    /// Issues an ID from this process's own candidate set, ignoring any root node.
    ///
    /// Backs the root node's generate endpoint.
    pub async fn new_local_id(&self) -> i64 {
        let mut issued = self.issued.lock().await;

        loop {
            let candidate = rand::rng().random_range(0..ID_CANDIDATE_RANGE);
            if issued.insert(candidate) {
                return candidate + ID_OFFSET;
            }
        }
    }

    /// Creates a sortable opaque token (hyphenated UUIDv7).
    pub fn new_opaque_token(&self) -> String {
        Uuid::now_v7().to_string()
    }

    async fn fetch_from_root(root: &RootNode) -> Result<i64, AppError> {
        let body = root
            .client
            .get(format!("{}{}", root.url, GENERATE_PATH))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        body.trim().parse::<i64>().map_err(|e| {
            AppError::InternalError(format!(
                "Root node returned an invalid ID '{}': {}",
                body.trim(),
                e
            ))
        })
    }
}
