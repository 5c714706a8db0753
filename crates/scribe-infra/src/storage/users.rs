//! In-memory user repository.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use scribe_core::domain::{NewUser, User};
use scribe_core::error::RepoError;
use scribe_core::ports::{BaseRepository, UserRepository};

struct UserTable {
    rows: BTreeMap<i32, User>,
    next_id: i32,
}

/// In-memory user repository. Usernames are unique.
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(UserTable {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<User, NewUser, i32> for InMemoryUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, new: NewUser) -> Result<User, RepoError> {
        let mut table = self.table.write().await;

        // Checked under the write lock so two concurrent creates cannot both pass.
        if table.rows.values().any(|u| u.username == new.username) {
            return Err(RepoError::Constraint(format!(
                "username '{}' is already taken",
                new.username
            )));
        }

        let id = table.next_id;
        table.next_id += 1;

        let user = new.into_user(id);
        table.rows.insert(id, user.clone());

        tracing::debug!(user_id = id, "Created user");
        Ok(user)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|u| u.username == username).cloned())
    }
}
