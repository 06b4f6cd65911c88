//! Present service: listing pending presents and redeeming them.
//!
//! Redemption classifies pending presents by reward kind and applies each kind as its own
//! partition transaction, all running concurrently. The kinds are not atomic as a unit: a
//! bucket that commits stays committed when a sibling fails, and the failed bucket's
//! presents stay pending so a retry can pick them up. The first error seen is reported once
//! every bucket has finished.

pub mod bucket;

use tokio::task::JoinSet;

use crate::server::{
    data::present::PresentRepository,
    error::AppError,
    model::{
        context::RequestContext,
        present::{PresentPage, Redemption, PRESENTS_PER_PAGE},
    },
    service::{id::IdGenerator, present::bucket::Buckets},
};

/// Service providing business logic for presents.
pub struct PresentService<'a> {
    ids: &'a IdGenerator,
}

impl<'a> PresentService<'a> {
    /// Creates a new PresentService instance.
    ///
    /// # Arguments
    /// - `ids` - Generator for IDs of granted cards and new material stacks
    ///
    /// # Returns
    /// - `PresentService` - New service instance
    pub fn new(ids: &'a IdGenerator) -> Self {
        Self { ids }
    }

    /// Lists one page of the caller's pending presents, newest first.
    ///
    /// # Arguments
    /// - `ctx` - Request context of the caller
    /// - `page` - One-based page index
    ///
    /// # Returns
    /// - `Ok(PresentPage)` - Up to 100 presents and whether another page follows
    /// - `Err(AppError::BadRequest)` - Page index is zero
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(&self, ctx: &RequestContext, page: u64) -> Result<PresentPage, AppError> {
        if page == 0 {
            return Err(AppError::BadRequest("Invalid page index".to_string()));
        }

        let offset = (page - 1) * PRESENTS_PER_PAGE;
        // One extra row tells us whether a next page exists.
        let mut presents = PresentRepository::new(&ctx.partition.db)
            .get_pending_window(ctx.user_id, offset, PRESENTS_PER_PAGE + 1)
            .await?;

        let is_next = presents.len() as u64 > PRESENTS_PER_PAGE;
        presents.truncate(PRESENTS_PER_PAGE as usize);

        Ok(PresentPage { presents, is_next })
    }

    /// Redeems the requested presents of the caller.
    ///
    /// Requested IDs that are unknown, belong to someone else or were already redeemed are
    /// ignored; if nothing remains the call succeeds without changing anything. The bucket
    /// tasks are detached from the caller, so they run to completion even if the request
    /// is dropped.
    ///
    /// # Arguments
    /// - `ctx` - Request context of the caller; its request time becomes the redemption time
    /// - `present_ids` - Presents to redeem
    ///
    /// # Returns
    /// - `Ok(Redemption)` - Granted presents with the resources they changed
    /// - `Err(AppError::BadRequest)` - A present has an unknown reward kind; nothing changed
    /// - `Err(AppError::NotFound)` - User or a referenced catalogue item is missing
    /// - `Err(AppError::Conflict)` - A concurrent call redeemed some of the same presents
    /// - `Err(AppError::DbErr)` / `Err(AppError::InternalError)` - Storage or task failure
    pub async fn redeem(
        &self,
        ctx: &RequestContext,
        present_ids: &[i64],
    ) -> Result<Redemption, AppError> {
        let db = &ctx.partition.db;
        let pending = PresentRepository::new(db)
            .find_pending_by_ids(ctx.user_id, present_ids)
            .await?;

        if pending.is_empty() {
            return Ok(Redemption::default());
        }

        let buckets = Buckets::classify(pending)?;

        let handle = tokio::spawn(run_buckets(
            db.clone(),
            self.ids.clone(),
            ctx.user_id,
            ctx.request_time,
            buckets,
        ));

        handle
            .await
            .map_err(|e| AppError::InternalError(format!("Redemption task failed: {}", e)))?
    }
}

/// Applies every non-empty bucket concurrently and merges their outcomes.
async fn run_buckets(
    db: sea_orm::DatabaseConnection,
    ids: IdGenerator,
    user_id: i64,
    at: i64,
    buckets: Buckets,
) -> Result<Redemption, AppError> {
    let mut tasks = JoinSet::new();

    if !buckets.currency.is_empty() {
        tasks.spawn(bucket::apply_currency(
            db.clone(),
            user_id,
            at,
            buckets.currency,
        ));
    }
    if !buckets.cards.is_empty() {
        tasks.spawn(bucket::apply_cards(
            db.clone(),
            ids.clone(),
            user_id,
            at,
            buckets.cards,
        ));
    }
    if !buckets.materials.is_empty() {
        tasks.spawn(bucket::apply_materials(
            db,
            ids,
            user_id,
            at,
            buckets.materials,
        ));
    }

    let mut redemption = Redemption::default();
    let mut first_error = None;

    while let Some(joined) = tasks.join_next().await {
        let outcome = joined
            .map_err(|e| AppError::InternalError(format!("Redemption bucket panicked: {}", e)))
            .and_then(|result| result);

        match outcome {
            Ok(granted) => redemption.merge(granted),
            Err(err) => {
                tracing::warn!(user_id, "Redemption bucket failed: {}", err);
                first_error.get_or_insert(err);
            }
        }
    }

    if let Some(err) = first_error {
        return Err(err);
    }

    redemption.presents.sort_by_key(|p| p.id);

    Ok(redemption)
}

#[cfg(test)]
mod test;
