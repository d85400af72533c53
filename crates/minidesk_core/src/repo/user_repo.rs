//! Insertion-ordered user registry.

use crate::model::user::User;
use crate::repo::{RepoError, RepoResult};

/// `Vec`-backed user storage.
#[derive(Debug, Clone, Default)]
pub struct UserRepository {
    users: Vec<User>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&mut self, user: User) {
        self.users.push(user);
    }

    pub fn remove_user(&mut self, id: &str) -> RepoResult<User> {
        let position = self
            .users
            .iter()
            .position(|user| user.id() == id)
            .ok_or_else(|| RepoError::UserNotFound(id.to_string()))?;
        Ok(self.users.remove(position))
    }

    pub fn get_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    pub fn get_user_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.id() == id)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}
