pub use super::item_master::Entity as ItemMaster;
pub use super::user::Entity as User;
pub use super::user_ban::Entity as UserBan;
pub use super::user_card::Entity as UserCard;
pub use super::user_item::Entity as UserItem;
pub use super::user_present::Entity as UserPresent;
pub use super::user_session::Entity as UserSession;
