//! Reward buckets of a redemption call.
//!
//! Pending presents are split by reward kind and each non-empty bucket is applied in its
//! own partition transaction. A bucket marks its own presents redeemed inside that
//! transaction, so a bucket's grants and its redemption markers commit or roll back
//! together.

use std::collections::{BTreeMap, BTreeSet};

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{
        item_master::ItemMasterRepository, present::PresentRepository, user::UserRepository,
        user_card::UserCardRepository, user_item::UserItemRepository,
    },
    error::AppError,
    model::{
        item::{CreateUserCardParam, CreateUserItemParam, ItemMaster},
        present::{Present, Redemption, RewardKind},
    },
    service::id::IdGenerator,
};

/// Pending presents grouped by reward kind.
#[derive(Debug, Default)]
pub struct Buckets {
    pub currency: Vec<Present>,
    pub cards: Vec<Present>,
    pub materials: Vec<Present>,
}

impl Buckets {
    /// Sorts presents into buckets.
    ///
    /// # Returns
    /// - `Ok(Buckets)` - Every present classified
    /// - `Err(AppError::Conflict)` - A present is already redeemed
    /// - `Err(AppError::BadRequest)` - A present has an unknown reward kind
    pub fn classify(presents: Vec<Present>) -> Result<Self, AppError> {
        let mut buckets = Self::default();

        for present in presents {
            if !present.lifecycle.is_active() {
                return Err(AppError::Conflict(format!(
                    "Present {} has already been received",
                    present.id
                )));
            }

            match present.reward_kind()? {
                RewardKind::Currency => buckets.currency.push(present),
                RewardKind::Card => buckets.cards.push(present),
                RewardKind::Material => buckets.materials.push(present),
            }
        }

        Ok(buckets)
    }
}

/// Grants every currency present with a single balance write.
pub async fn apply_currency(
    db: DatabaseConnection,
    user_id: i64,
    at: i64,
    presents: Vec<Present>,
) -> Result<Redemption, AppError> {
    let total: i64 = presents.iter().map(|p| p.amount).sum();

    let txn = db.begin().await?;
    let users = UserRepository::new(&txn);
    let Some(user) = users.find_by_id(user_id).await? else {
        return Err(AppError::NotFound("User not found".to_string()));
    };
    let user = users.update_balance(user_id, user.isu_coin + total).await?;
    let presents = mark_redeemed(&txn, user_id, presents, at).await?;
    txn.commit().await?;

    Ok(Redemption {
        user: Some(user),
        presents,
        ..Default::default()
    })
}

/// Grants one new card per card present.
pub async fn apply_cards(
    db: DatabaseConnection,
    ids: IdGenerator,
    user_id: i64,
    at: i64,
    presents: Vec<Present>,
) -> Result<Redemption, AppError> {
    let txn = db.begin().await?;
    let catalogue = load_catalogue(&txn, &presents, RewardKind::Card).await?;

    let cards = UserCardRepository::new(&txn);
    let mut created = Vec::with_capacity(presents.len());
    for present in &presents {
        let amount_per_sec = catalogue
            .get(&present.item_id)
            .and_then(|master| master.amount_per_sec)
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Card {} has no production rate",
                    present.item_id
                ))
            })?;

        created.push(
            cards
                .create(CreateUserCardParam {
                    id: ids.new_id().await?,
                    user_id,
                    card_id: present.item_id,
                    amount_per_sec,
                })
                .await?,
        );
    }

    let presents = mark_redeemed(&txn, user_id, presents, at).await?;
    txn.commit().await?;

    Ok(Redemption {
        cards: created,
        presents,
        ..Default::default()
    })
}

/// Adds material presents onto the user's stacks, one write per distinct item.
pub async fn apply_materials(
    db: DatabaseConnection,
    ids: IdGenerator,
    user_id: i64,
    at: i64,
    presents: Vec<Present>,
) -> Result<Redemption, AppError> {
    let mut totals: BTreeMap<i64, i64> = BTreeMap::new();
    for present in &presents {
        *totals.entry(present.item_id).or_default() += present.amount;
    }

    let txn = db.begin().await?;
    let catalogue = load_catalogue(&txn, &presents, RewardKind::Material).await?;

    let stacks = UserItemRepository::new(&txn);
    let mut items = Vec::with_capacity(totals.len());
    for (item_id, amount) in totals {
        let item_type = catalogue
            .get(&item_id)
            .map(|master| master.item_type)
            .ok_or_else(|| AppError::NotFound(format!("Item {} not found", item_id)))?;
        let item = match stacks.find_by_user_and_item(user_id, item_id).await? {
            Some(stack) => stacks.set_amount(stack.id, stack.amount + amount).await?,
            None => {
                stacks
                    .create(CreateUserItemParam {
                        id: ids.new_id().await?,
                        user_id,
                        item_id,
                        item_type,
                        amount,
                    })
                    .await?
            }
        };
        items.push(item);
    }

    let presents = mark_redeemed(&txn, user_id, presents, at).await?;
    txn.commit().await?;

    Ok(Redemption {
        items,
        presents,
        ..Default::default()
    })
}

/// Loads the catalogue entries referenced by `presents`, keeping only entries of `kind`.
///
/// # Returns
/// - `Ok(map)` - Entry of the right kind for every referenced item ID
/// - `Err(AppError::NotFound)` - A referenced item is not in the catalogue or is of
///   another kind
async fn load_catalogue(
    txn: &DatabaseTransaction,
    presents: &[Present],
    kind: RewardKind,
) -> Result<BTreeMap<i64, ItemMaster>, AppError> {
    let wanted: BTreeSet<i64> = presents.iter().map(|p| p.item_id).collect();
    let wanted: Vec<i64> = wanted.into_iter().collect();

    let catalogue: BTreeMap<i64, ItemMaster> = ItemMasterRepository::new(txn)
        .find_by_ids(&wanted)
        .await?
        .into_iter()
        .filter(|master| RewardKind::try_from(master.item_type).ok() == Some(kind))
        .map(|master| (master.id, master))
        .collect();

    if let Some(missing) = wanted.iter().find(|id| !catalogue.contains_key(id)) {
        return Err(AppError::NotFound(format!("Item {} not found", missing)));
    }

    Ok(catalogue)
}

/// Marks a bucket's presents redeemed, failing if any of them was redeemed concurrently.
async fn mark_redeemed(
    txn: &DatabaseTransaction,
    user_id: i64,
    presents: Vec<Present>,
    at: i64,
) -> Result<Vec<Present>, AppError> {
    let ids: Vec<i64> = presents.iter().map(|p| p.id).collect();

    let marked = PresentRepository::new(txn)
        .mark_redeemed(user_id, &ids, at)
        .await?;

    if marked != ids.len() as u64 {
        return Err(AppError::Conflict(
            "Presents were received by another request".to_string(),
        ));
    }

    Ok(presents.into_iter().map(|p| p.redeemed(at)).collect())
}
