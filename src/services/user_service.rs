use super::store::Store;
use crate::models::{User, UserFilter};
use crate::utils::AppError;

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Store {
    /// Users matching the filter; `email` wins over `username` when both are set.
    pub fn list_users(&self, filter: &UserFilter) -> Vec<User> {
        let snapshot = self.lock();

        let users: Vec<User> = if let Some(email) = non_empty(&filter.email) {
            snapshot.users.iter().filter(|u| u.has_email(email)).cloned().collect()
        } else if let Some(username) = non_empty(&filter.username) {
            snapshot.users.iter().filter(|u| u.has_username(username)).cloned().collect()
        } else {
            snapshot.users.clone()
        };

        log::debug!("👥 Listed {} users", users.len());
        users
    }

    pub fn get_user(&self, id: &str) -> Result<User, AppError> {
        self.lock()
            .users
            .iter()
            .find(|u| u.has_id(id))
            .cloned()
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Appends the candidate unless its email is already taken.
    pub fn create_user(&self, candidate: User) -> Result<User, AppError> {
        let mut snapshot = self.lock();

        if let Some(email) = candidate.email() {
            if snapshot.users.iter().any(|u| u.has_email(email)) {
                log::warn!("⚠️ Email already registered: {}", email);
                return Err(AppError::Conflict(
                    "A user with this email already exists".to_string(),
                ));
            }
        }

        snapshot.users.push(candidate.clone());
        self.flush(&snapshot);

        log::info!("✅ User {} created", candidate.label());
        Ok(candidate)
    }
}
