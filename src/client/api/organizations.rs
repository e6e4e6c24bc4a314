//! Organization API trait

use async_trait::async_trait;

use crate::client::models::{
    CreateOrganizationRequest, EntityId, Organization, UpdateOrganizationRequest,
};
use crate::client::pagination::{Page, PageRequest};
use crate::error::Result;

/// Organization operations for the dashboard API
#[async_trait]
pub trait OrganizationApi: Send + Sync {
    /// List one page of organizations, facilities included.
    async fn list_organizations(&self, page: PageRequest) -> Result<Page<Organization>>;

    /// Get a single organization by ID.
    async fn get_organization(&self, id: EntityId) -> Result<Organization>;

    /// Create an organization. The server assigns all identifiers.
    async fn create_organization(&self, request: &CreateOrganizationRequest) -> Result<()>;

    /// Update an organization's name and facilities.
    async fn update_organization(
        &self,
        id: EntityId,
        request: &UpdateOrganizationRequest,
    ) -> Result<()>;

    /// Delete an organization.
    async fn delete_organization(&self, id: EntityId) -> Result<()>;
}
