use serde_json::Value;

use crate::{error::AuthError, spotify::ApiClient, spotify::Query, types::UserProfile};

impl ApiClient {
    pub fn me(&self) -> Result<Value, AuthError> {
        self.get("me", Query::new())
    }

    pub fn current_user(&self) -> Result<UserProfile, AuthError> {
        self.get_as("me", Query::new())
    }

    /// Public profile of `user_id`, or the current user's profile when `None`.
    pub fn user_profile(&self, user_id: Option<&str>) -> Result<Value, AuthError> {
        match user_id {
            Some(user_id) => self.get(&format!("users/{user_id}"), Query::new()),
            None => self.me(),
        }
    }
}
