//! User service for registration and inventory lookups.

use sea_orm::TransactionTrait;

use crate::server::{
    data::{
        session::SessionRepository, user::UserRepository, user_card::UserCardRepository,
        user_item::UserItemRepository,
    },
    error::AppError,
    model::{
        context::RequestContext,
        item::Inventory,
        session::{CreateSessionParam, Session, SESSION_TTL_SECONDS},
        user::{CreateUserParam, User},
    },
    service::id::IdGenerator,
    shard::ShardRouter,
};

/// Service providing business logic for users.
pub struct UserService<'a> {
    router: &'a ShardRouter,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `router` - Shard router used to place new users
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(router: &'a ShardRouter) -> Self {
        Self { router }
    }

    /// Registers a new user and opens their first session.
    ///
    /// The user's ID is drawn from `ids` and decides which partition the user and the
    /// session are written to. Both rows are written in one transaction.
    ///
    /// # Arguments
    /// - `ids` - Generator for the user ID, session row ID and token
    /// - `request_time` - Registration time (unix seconds)
    ///
    /// # Returns
    /// - `Ok((User, Session))` - The new user and their session
    /// - `Err(AppError::ReqwestErr)` / `Err(AppError::InternalError)` - ID delegation failed
    /// - `Err(AppError::DbErr)` - Database error; nothing is written
    pub async fn register(
        &self,
        ids: &IdGenerator,
        request_time: i64,
    ) -> Result<(User, Session), AppError> {
        let user_id = ids.new_id().await?;
        let session_id = ids.new_id().await?;
        let token = ids.new_opaque_token();
        let partition = self.router.route_for(user_id);

        let txn = partition.db.begin().await?;
        let user = UserRepository::new(&txn)
            .create(CreateUserParam {
                id: user_id,
                registered_at: request_time,
            })
            .await?;
        let session = SessionRepository::new(&txn)
            .create(CreateSessionParam {
                id: session_id,
                user_id,
                session_id: token,
                expired_at: request_time + SESSION_TTL_SECONDS,
            })
            .await?;
        txn.commit().await?;

        tracing::info!(user_id, partition = partition.index, "User registered");

        Ok((user, session))
    }

    /// Loads the caller's user row together with their materials and cards.
    ///
    /// # Returns
    /// - `Ok(Inventory)` - User, material stacks and cards
    /// - `Err(AppError::NotFound)` - No such user in its partition
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_inventory(&self, ctx: &RequestContext) -> Result<Inventory, AppError> {
        let db = &ctx.partition.db;

        let Some(user) = UserRepository::new(db).find_by_id(ctx.user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };
        let items = UserItemRepository::new(db).get_by_user(ctx.user_id).await?;
        let cards = UserCardRepository::new(db).get_by_user(ctx.user_id).await?;

        Ok(Inventory { user, items, cards })
    }
}

#[cfg(test)]
mod test;
