pub mod event;
pub mod greeting;
pub mod items;
pub mod response;
pub mod schedule;
pub mod static_asset;
