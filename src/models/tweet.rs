use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{id_label, id_matches};
use crate::utils::parse_timestamp_millis;

/// A tweet exactly as the client sent it.
///
/// The fields the store looks at (`id`, `userId`, `createdAt`, `likedBy`) are
/// read on demand; nothing is required and nothing is reordered or dropped.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, utoipa::ToSchema)]
#[schema(value_type = Object)]
pub struct Tweet(pub Map<String, Value>);

impl Tweet {
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    pub fn has_id(&self, key: &str) -> bool {
        id_matches(self.id(), key)
    }

    pub fn label(&self) -> String {
        id_label(self.id())
    }

    pub fn is_by(&self, user_key: &str) -> bool {
        id_matches(self.0.get("userId"), user_key)
    }

    /// `createdAt` as epoch milliseconds: date strings are parsed, numbers
    /// are taken as milliseconds already.
    pub fn created_at_millis(&self) -> Option<i64> {
        match self.0.get("createdAt")? {
            Value::String(raw) => parse_timestamp_millis(raw),
            Value::Number(millis) => millis.as_i64(),
            _ => None,
        }
    }

    pub fn liked_by(&self) -> Option<&Value> {
        self.0.get("likedBy")
    }

    /// Replaces `likedBy`, keeping its position when the key already exists.
    pub fn set_liked_by(&mut self, liked_by: Value) {
        self.0.insert("likedBy".to_string(), liked_by);
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

/// Query parameters of `GET /api/tweets`
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TweetFilter {
    /// Only tweets whose `userId` equals this value (number or string)
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// Body of `PATCH /api/tweets/{id}`
///
/// `likedBy` stays a raw JSON value so that a non-array payload reaches the
/// store and is reported there instead of failing extraction.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateLikesRequest {
    #[serde(rename = "likedBy", default)]
    #[schema(value_type = Vec<Object>)]
    pub liked_by: Value,
}
