//! Entity types the dashboard manages
//!
//! A [`Resource`] binds an entity type to its REST operations, labels and
//! forms so the list, card, dialog and detail views are written once.

use async_trait::async_trait;
use log::warn;
use serde::Serialize;

use super::form::{Form, OrganizationForm, UserEditForm, UserForm};
use crate::client::DashboardApi;
use crate::client::models::{
    CreateOrganizationRequest, CreateUserRequest, EntityId, Facility, Organization,
    UpdateOrganizationRequest, UpdateUserRequest, User,
};
use crate::client::pagination::{Page, PageRequest};
use crate::error::Result;

/// Card-level summary of an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub id: EntityId,
    /// Organization name or user email
    pub title: String,
    pub facility_count: usize,
    /// External identifier pair, for resources that carry one
    pub external: Option<(Option<String>, Option<String>)>,
}

#[async_trait]
pub trait Resource: Clone + Send + Sync + 'static {
    type Entity: Clone + Serialize + Send + Sync;
    type Create: Serialize + Send + Sync;
    type Update: Serialize + Send + Sync;
    type CreateForm: Form<Self::Create> + Default + Send + Sync;
    type EditForm: Form<Self::Update> + for<'a> From<&'a Self::Entity> + Send + Sync;

    /// Lower-case singular label, e.g. `organization`
    const SINGULAR: &'static str;
    /// Lower-case plural label, e.g. `organizations`
    const PLURAL: &'static str;
    /// Capitalised singular label, e.g. `Organization`
    const TITLE: &'static str;

    fn id_of(&self, entity: &Self::Entity) -> EntityId;

    fn summary(&self, entity: &Self::Entity) -> Summary;

    /// Field that identifies a new entity in the creation message.
    fn describe_create(&self, request: &Self::Create) -> String;

    /// Route of the entity's detail screen.
    fn detail_route(&self, id: EntityId) -> String {
        format!("/{}/{}", Self::PLURAL, id)
    }

    /// Route of the list screen.
    fn list_route(&self) -> String {
        format!("/{}", Self::PLURAL)
    }

    async fn fetch_page(
        &self,
        api: &dyn DashboardApi,
        page: PageRequest,
    ) -> Result<Page<Self::Entity>>;

    async fn fetch_one(&self, api: &dyn DashboardApi, id: EntityId) -> Result<Self::Entity>;

    async fn create(&self, api: &dyn DashboardApi, request: &Self::Create) -> Result<()>;

    async fn update(
        &self,
        api: &dyn DashboardApi,
        id: EntityId,
        request: &Self::Update,
    ) -> Result<()>;

    async fn delete(&self, api: &dyn DashboardApi, id: EntityId) -> Result<()>;

    /// Facilities offered by this resource's forms. Empty when unused or
    /// when loading fails.
    async fn load_catalog(&self, _api: &dyn DashboardApi) -> Vec<Facility> {
        Vec::new()
    }
}

/// Organizations with their facilities
#[derive(Debug, Clone, Copy, Default)]
pub struct Organizations;

#[async_trait]
impl Resource for Organizations {
    type Entity = Organization;
    type Create = CreateOrganizationRequest;
    type Update = UpdateOrganizationRequest;
    type CreateForm = OrganizationForm;
    type EditForm = OrganizationForm;

    const SINGULAR: &'static str = "organization";
    const PLURAL: &'static str = "organizations";
    const TITLE: &'static str = "Organization";

    fn id_of(&self, entity: &Organization) -> EntityId {
        entity.id
    }

    fn summary(&self, entity: &Organization) -> Summary {
        Summary {
            id: entity.id,
            title: entity.name.clone(),
            facility_count: entity.facilities.len(),
            external: Some((entity.pcc_org_id.clone(), entity.pcc_org_uuid.clone())),
        }
    }

    fn describe_create(&self, request: &CreateOrganizationRequest) -> String {
        request.name.clone()
    }

    async fn fetch_page(
        &self,
        api: &dyn DashboardApi,
        page: PageRequest,
    ) -> Result<Page<Organization>> {
        api.list_organizations(page).await
    }

    async fn fetch_one(&self, api: &dyn DashboardApi, id: EntityId) -> Result<Organization> {
        api.get_organization(id).await
    }

    async fn create(
        &self,
        api: &dyn DashboardApi,
        request: &CreateOrganizationRequest,
    ) -> Result<()> {
        api.create_organization(request).await
    }

    async fn update(
        &self,
        api: &dyn DashboardApi,
        id: EntityId,
        request: &UpdateOrganizationRequest,
    ) -> Result<()> {
        api.update_organization(id, request).await
    }

    async fn delete(&self, api: &dyn DashboardApi, id: EntityId) -> Result<()> {
        api.delete_organization(id).await
    }
}

/// Users and their facility assignments
#[derive(Debug, Clone, Copy, Default)]
pub struct Users;

#[async_trait]
impl Resource for Users {
    type Entity = User;
    type Create = CreateUserRequest;
    type Update = UpdateUserRequest;
    type CreateForm = UserForm;
    type EditForm = UserEditForm;

    const SINGULAR: &'static str = "user";
    const PLURAL: &'static str = "users";
    const TITLE: &'static str = "User";

    fn id_of(&self, entity: &User) -> EntityId {
        entity.id
    }

    fn summary(&self, entity: &User) -> Summary {
        Summary {
            id: entity.id,
            title: entity.email.clone(),
            facility_count: entity.facilities.len(),
            external: None,
        }
    }

    fn describe_create(&self, request: &CreateUserRequest) -> String {
        request.email.clone()
    }

    async fn fetch_page(&self, api: &dyn DashboardApi, page: PageRequest) -> Result<Page<User>> {
        api.list_users(page).await
    }

    async fn fetch_one(&self, api: &dyn DashboardApi, id: EntityId) -> Result<User> {
        api.get_user(id).await
    }

    async fn create(&self, api: &dyn DashboardApi, request: &CreateUserRequest) -> Result<()> {
        api.create_user(request).await
    }

    async fn update(
        &self,
        api: &dyn DashboardApi,
        id: EntityId,
        request: &UpdateUserRequest,
    ) -> Result<()> {
        api.update_user(id, request).await
    }

    async fn delete(&self, api: &dyn DashboardApi, id: EntityId) -> Result<()> {
        api.delete_user(id).await
    }

    async fn load_catalog(&self, api: &dyn DashboardApi) -> Vec<Facility> {
        match api.list_facilities().await {
            Ok(facilities) => facilities,
            Err(e) => {
                warn!("Error fetching facilities: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockDashboardClient;
    use crate::client::fixtures::{OrganizationBuilder, UserBuilder, facility_catalog};
    use crate::error::ApiError;

    #[test]
    fn test_routes() {
        assert_eq!(Organizations.detail_route(5), "/organizations/5");
        assert_eq!(Users.list_route(), "/users");
    }

    #[test]
    fn test_organization_summary() {
        let org = OrganizationBuilder::new(5)
            .name("Sunrise")
            .facility(9, "Clinic A")
            .build();
        let summary = Organizations.summary(&org);
        assert_eq!(summary.title, "Sunrise");
        assert_eq!(summary.facility_count, 1);
        assert_eq!(summary.external, Some((None, None)));
    }

    #[test]
    fn test_user_summary_has_no_external_pair() {
        let user = UserBuilder::new(3).email("a@x.com").build();
        let summary = Users.summary(&user);
        assert_eq!(summary.title, "a@x.com");
        assert!(summary.external.is_none());
    }

    #[tokio::test]
    async fn test_user_catalog_failure_is_empty() {
        let mock = MockDashboardClient::new()
            .with_facilities(facility_catalog())
            .await
            .with_error(ApiError::ServerError("down".to_string()))
            .await;

        assert!(Users.load_catalog(&mock).await.is_empty());
        assert_eq!(Users.load_catalog(&mock).await.len(), 3);
    }

    #[tokio::test]
    async fn test_organizations_need_no_catalog() {
        let mock = MockDashboardClient::new()
            .with_facilities(facility_catalog())
            .await;

        assert!(Organizations.load_catalog(&mock).await.is_empty());
        assert_eq!(mock.call_counts().await.total(), 0);
    }
}
