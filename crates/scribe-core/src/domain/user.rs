use serde::{Deserialize, Serialize};

/// User entity. Not referenced by any current flow, kept for blog post ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Data required to create a user; the id is assigned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Attach a store-assigned id.
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
        }
    }
}
