//! User API trait

use async_trait::async_trait;

use crate::client::models::{CreateUserRequest, EntityId, UpdateUserRequest, User};
use crate::client::pagination::{Page, PageRequest};
use crate::error::Result;

/// User operations for the dashboard API
#[async_trait]
pub trait UserApi: Send + Sync {
    /// List one page of users.
    async fn list_users(&self, page: PageRequest) -> Result<Page<User>>;

    /// Get a single user by ID.
    async fn get_user(&self, id: EntityId) -> Result<User>;

    /// Create a user assigned to the given facilities.
    async fn create_user(&self, request: &CreateUserRequest) -> Result<()>;

    /// Update a user's email and facility assignments.
    async fn update_user(&self, id: EntityId, request: &UpdateUserRequest) -> Result<()>;

    /// Delete a user.
    async fn delete_user(&self, id: EntityId) -> Result<()>;
}
