use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Tweet, User};

/// Whole content of the document file: both collections plus whatever other
/// top-level keys it carried.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub tweets: Vec<Tweet>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
