use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{id_label, id_matches};

/// A user record as stored; every field is kept as it came in.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, utoipa::ToSchema)]
#[schema(value_type = Object)]
pub struct User(pub Map<String, Value>);

impl User {
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    pub fn has_id(&self, key: &str) -> bool {
        id_matches(self.id(), key)
    }

    pub fn label(&self) -> String {
        id_label(self.id())
    }

    fn text(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn email(&self) -> Option<&str> {
        self.text("email")
    }

    pub fn username(&self) -> Option<&str> {
        self.text("username")
    }

    pub fn has_email(&self, email: &str) -> bool {
        self.email()
            .is_some_and(|own| own.to_lowercase() == email.to_lowercase())
    }

    pub fn has_username(&self, username: &str) -> bool {
        self.username()
            .is_some_and(|own| own.to_lowercase() == username.to_lowercase())
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

/// Body of `POST /api/users`: any object with a string `email`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(try_from = "Map<String, Value>")]
#[schema(value_type = Object)]
pub struct NewUser(pub User);

impl TryFrom<Map<String, Value>> for NewUser {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        match fields.get("email") {
            Some(Value::String(_)) => Ok(NewUser(User(fields))),
            Some(_) => Err("field `email` must be a string".to_string()),
            None => Err("missing field `email`".to_string()),
        }
    }
}

/// Query parameters of `GET /api/users`
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserFilter {
    /// Case-insensitive exact email match (takes precedence over `username`)
    pub email: Option<String>,
    /// Case-insensitive exact username match
    pub username: Option<String>,
}
