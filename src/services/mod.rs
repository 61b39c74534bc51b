pub mod store;
pub mod tweet_service;
pub mod user_service;

pub use store::Store;
