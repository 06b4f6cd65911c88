mod ban;
mod item_master;
mod present;
mod session;
mod user;
mod user_card;
mod user_item;
