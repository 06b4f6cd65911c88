use crate::server::{data::session::SessionRepository, model::session::CreateSessionParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_active_by_token;
mod invalidate;
mod invalidate_all_for_user;
