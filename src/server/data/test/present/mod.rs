use crate::server::data::present::PresentRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::user_present::UserPresentFactory};

mod find_pending_by_ids;
mod get_pending_window;
mod mark_redeemed;
