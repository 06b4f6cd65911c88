use crate::server::data::ban::BanRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_active_user_ids;
mod upsert;
