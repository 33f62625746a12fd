pub mod card_detail;
pub mod collection;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod sell_trade;
