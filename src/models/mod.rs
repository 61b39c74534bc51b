pub mod loose_id;
pub mod snapshot;
pub mod tweet;
pub mod user;

pub use loose_id::*;
pub use snapshot::*;
pub use tweet::*;
pub use user::*;
