use std::cmp::Reverse;

use serde_json::Value;

use super::store::Store;
use crate::models::{Tweet, TweetFilter};
use crate::utils::AppError;

fn tweet_not_found() -> AppError {
    AppError::NotFound("Tweet not found".to_string())
}

impl Store {
    /// Tweets, optionally restricted to one author, newest `createdAt` first.
    ///
    /// Tweets without a parsable timestamp go last; ties keep collection order.
    pub fn list_tweets(&self, filter: &TweetFilter) -> Vec<Tweet> {
        let mut tweets: Vec<Tweet> = {
            let snapshot = self.lock();
            match filter.user_id.as_deref().filter(|id| !id.is_empty()) {
                Some(user_id) => {
                    log::debug!("🔎 Filtering tweets by user {}", user_id);
                    snapshot.tweets.iter().filter(|t| t.is_by(user_id)).cloned().collect()
                }
                None => snapshot.tweets.clone(),
            }
        };

        tweets.sort_by_key(|t| Reverse(t.created_at_millis()));
        tweets
    }

    pub fn get_tweet(&self, id: &str) -> Result<Tweet, AppError> {
        self.lock()
            .tweets
            .iter()
            .find(|t| t.has_id(id))
            .cloned()
            .ok_or_else(tweet_not_found)
    }

    /// Inserts at the head of the collection, whatever its `createdAt`.
    pub fn create_tweet(&self, candidate: Tweet) -> Tweet {
        let mut snapshot = self.lock();

        snapshot.tweets.insert(0, candidate.clone());
        self.flush(&snapshot);

        log::info!("✅ Tweet {} created", candidate.label());
        candidate
    }

    /// Replaces `likedBy` wholesale.
    pub fn update_tweet_likes(&self, id: &str, liked_by: Value) -> Result<Tweet, AppError> {
        let mut snapshot = self.lock();

        let tweet = snapshot
            .tweets
            .iter_mut()
            .find(|t| t.has_id(id))
            .ok_or_else(tweet_not_found)?;

        if !liked_by.is_array() {
            log::warn!("⚠️ Rejected likedBy for tweet {}: not an array", id);
            return Err(AppError::InvalidArgument("likedBy must be an array".to_string()));
        }
        let likes = liked_by.as_array().map_or(0, Vec::len);

        tweet.set_liked_by(liked_by);
        let updated = tweet.clone();
        self.flush(&snapshot);

        log::info!("❤️ Tweet {} now liked by {} users", id, likes);
        Ok(updated)
    }

    /// Removes the first tweet with this id.
    pub fn delete_tweet(&self, id: &str) -> Result<(), AppError> {
        let mut snapshot = self.lock();

        let index = snapshot
            .tweets
            .iter()
            .position(|t| t.has_id(id))
            .ok_or_else(tweet_not_found)?;

        snapshot.tweets.remove(index);
        self.flush(&snapshot);

        log::info!("🗑️ Tweet {} deleted", id);
        Ok(())
    }
}
