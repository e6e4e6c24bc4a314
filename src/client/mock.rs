//! Mock dashboard API client for testing
//!
//! Provides an in-memory implementation of the API traits for unit testing
//! without making real API calls. Mutations change the stored entities, so a
//! create/update/delete followed by a read observes the new state.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use super::api::{FacilityApi, OrganizationApi, UserApi};
use super::models::{
    CreateOrganizationRequest, CreateUserRequest, EntityId, Facility, Organization,
    UpdateOrganizationRequest, UpdateUserRequest, User,
};
use super::pagination::{Page, PageRequest};
use crate::error::{ApiError, Result};

/// Items per page served by the mock unless configured otherwise
const DEFAULT_PAGE_SIZE: usize = 10;

/// Mock API client for testing.
///
/// Configure the stored entities via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockDashboardClient::new()
///     .with_users(fixtures::users(1, 25))
///     .await;
///
/// let page = mock.list_users(PageRequest::default()).await?;
/// assert_eq!(page.total_pages, 3);
/// ```
pub struct MockDashboardClient {
    /// Organizations served by the organization endpoints
    organizations: Arc<Mutex<Vec<Organization>>>,
    /// Users served by the user endpoints
    users: Arc<Mutex<Vec<User>>>,
    /// Facility catalogue
    facilities: Arc<Mutex<Vec<Facility>>>,
    /// Items per page for list endpoints
    page_size: Arc<Mutex<usize>>,
    /// Serve the last page for requests past the end
    clamp_pages: Arc<Mutex<bool>>,
    /// Artificial delay before every response
    latency: Arc<Mutex<Option<Duration>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
    /// Next server-assigned ID
    next_id: Arc<Mutex<EntityId>>,
}

impl Default for MockDashboardClient {
    fn default() -> Self {
        Self {
            organizations: Arc::new(Mutex::new(Vec::new())),
            users: Arc::new(Mutex::new(Vec::new())),
            facilities: Arc::new(Mutex::new(Vec::new())),
            page_size: Arc::new(Mutex::new(DEFAULT_PAGE_SIZE)),
            clamp_pages: Arc::new(Mutex::new(false)),
            latency: Arc::new(Mutex::new(None)),
            error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(1000)),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_organizations: usize,
    pub get_organization: usize,
    pub create_organization: usize,
    pub update_organization: usize,
    pub delete_organization: usize,
    pub list_users: usize,
    pub get_user: usize,
    pub create_user: usize,
    pub update_user: usize,
    pub delete_user: usize,
    pub list_facilities: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.list_organizations
            + self.get_organization
            + self.create_organization
            + self.update_organization
            + self.delete_organization
            + self.list_users
            + self.get_user
            + self.create_user
            + self.update_user
            + self.delete_user
            + self.list_facilities
    }
}

/// A captured API request for test assertions
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// Method name that was called
    pub method: String,
    /// Entity ID addressed by the call
    pub id: Option<EntityId>,
    /// Requested page, for list calls
    pub page: Option<u32>,
    /// Serialized request body, for create/update calls
    pub body: Option<serde_json::Value>,
}

impl MockDashboardClient {
    /// Create a new mock client with empty collections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure organizations served by the mock.
    pub async fn with_organizations(self, organizations: Vec<Organization>) -> Self {
        *self.organizations.lock().await = organizations;
        self
    }

    /// Configure users served by the mock.
    pub async fn with_users(self, users: Vec<User>) -> Self {
        *self.users.lock().await = users;
        self
    }

    /// Configure the facility catalogue.
    pub async fn with_facilities(self, facilities: Vec<Facility>) -> Self {
        *self.facilities.lock().await = facilities;
        self
    }

    /// Configure the number of items per page.
    pub async fn with_page_size(self, page_size: usize) -> Self {
        *self.page_size.lock().await = page_size.max(1);
        self
    }

    /// Answer out-of-range page requests with the last page.
    pub async fn with_clamped_pages(self) -> Self {
        *self.clamp_pages.lock().await = true;
        self
    }

    /// Delay every response by `latency`.
    pub async fn with_latency(self, latency: Duration) -> Self {
        *self.latency.lock().await = Some(latency);
        self
    }

    /// Configure an error to return on the next call.
    pub async fn with_error(self, error: ApiError) -> Self {
        self.fail_next(error).await;
        self
    }

    /// Make the next call fail, after the mock has been shared.
    pub async fn fail_next(&self, error: ApiError) {
        *self.error.lock().await = Some(error);
    }

    /// Get the call counts for verification.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for verification.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Current stored organizations.
    pub async fn organizations(&self) -> Vec<Organization> {
        self.organizations.lock().await.clone()
    }

    /// Current stored users.
    pub async fn users(&self) -> Vec<User> {
        self.users.lock().await.clone()
    }

    /// Apply latency, then check for a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let latency = *self.latency.lock().await;
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }

    /// Record a captured request for test assertions.
    async fn capture_request<B: Serialize>(
        &self,
        method: &str,
        id: Option<EntityId>,
        page: Option<u32>,
        body: Option<&B>,
    ) {
        let mut requests = self.captured_requests.lock().await;
        requests.push(CapturedRequest {
            method: method.to_string(),
            id,
            page,
            body: body.and_then(|b| serde_json::to_value(b).ok()),
        });
    }

    async fn allocate_id(&self) -> EntityId {
        let mut next = self.next_id.lock().await;
        *next += 1;
        *next
    }

    /// Slice a stored collection into the requested page.
    async fn paginate<T: Clone>(&self, items: &[T], page: PageRequest) -> Page<T> {
        let page_size = *self.page_size.lock().await;
        let total_pages = items.len().div_ceil(page_size) as u32;
        let current = if *self.clamp_pages.lock().await {
            page.page.min(total_pages).max(1)
        } else {
            page.page
        };
        let start = (current as usize - 1).saturating_mul(page_size);
        let data = items
            .iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect();
        Page::new(data, current, total_pages, items.len() as u64)
    }

    /// Resolve facility IDs against the catalogue.
    async fn resolve_facilities(&self, ids: &[EntityId]) -> Vec<Facility> {
        let catalog = self.facilities.lock().await;
        ids.iter()
            .map(|id| {
                catalog
                    .iter()
                    .find(|f| f.id == *id)
                    .cloned()
                    .unwrap_or_else(|| Facility {
                        id: *id,
                        name: format!("Facility {}", id),
                        organization_id: None,
                    })
            })
            .collect()
    }
}

fn not_found(kind: &str, id: EntityId) -> ApiError {
    ApiError::NotFound(format!("{} {}", kind, id))
}

// ============================================================================
// OrganizationApi Implementation
// ============================================================================

#[async_trait]
impl OrganizationApi for MockDashboardClient {
    async fn list_organizations(&self, page: PageRequest) -> Result<Page<Organization>> {
        self.call_count.lock().await.list_organizations += 1;
        self.capture_request::<()>("list_organizations", None, Some(page.page), None)
            .await;
        self.check_error().await?;

        let organizations = self.organizations.lock().await.clone();
        Ok(self.paginate(&organizations, page).await)
    }

    async fn get_organization(&self, id: EntityId) -> Result<Organization> {
        self.call_count.lock().await.get_organization += 1;
        self.capture_request::<()>("get_organization", Some(id), None, None)
            .await;
        self.check_error().await?;

        let organizations = self.organizations.lock().await;
        organizations
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| not_found("organization", id).into())
    }

    async fn create_organization(&self, request: &CreateOrganizationRequest) -> Result<()> {
        self.call_count.lock().await.create_organization += 1;
        self.capture_request("create_organization", None, None, Some(request))
            .await;
        self.check_error().await?;

        let id = self.allocate_id().await;
        let mut facilities = Vec::with_capacity(request.facilities.len());
        for facility in &request.facilities {
            facilities.push(Facility {
                id: self.allocate_id().await,
                name: facility.name.clone(),
                organization_id: Some(id),
            });
        }

        self.organizations.lock().await.push(Organization {
            id,
            name: request.name.clone(),
            facilities,
            pcc_org_id: request.pcc_org_id.clone(),
            pcc_org_uuid: request.pcc_org_uuid.clone(),
        });
        Ok(())
    }

    async fn update_organization(
        &self,
        id: EntityId,
        request: &UpdateOrganizationRequest,
    ) -> Result<()> {
        self.call_count.lock().await.update_organization += 1;
        self.capture_request("update_organization", Some(id), None, Some(request))
            .await;
        self.check_error().await?;

        let mut facilities = Vec::with_capacity(request.facilities.len());
        for facility in &request.facilities {
            let facility_id = match facility.id {
                Some(existing) => existing,
                None => self.allocate_id().await,
            };
            facilities.push(Facility {
                id: facility_id,
                name: facility.name.clone(),
                organization_id: Some(id),
            });
        }

        let mut organizations = self.organizations.lock().await;
        let org = organizations
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| not_found("organization", id))?;
        org.name = request.name.clone();
        org.facilities = facilities;
        Ok(())
    }

    async fn delete_organization(&self, id: EntityId) -> Result<()> {
        self.call_count.lock().await.delete_organization += 1;
        self.capture_request::<()>("delete_organization", Some(id), None, None)
            .await;
        self.check_error().await?;

        let mut organizations = self.organizations.lock().await;
        let before = organizations.len();
        organizations.retain(|o| o.id != id);
        if organizations.len() == before {
            return Err(not_found("organization", id).into());
        }
        Ok(())
    }
}

// ============================================================================
// UserApi Implementation
// ============================================================================

#[async_trait]
impl UserApi for MockDashboardClient {
    async fn list_users(&self, page: PageRequest) -> Result<Page<User>> {
        self.call_count.lock().await.list_users += 1;
        self.capture_request::<()>("list_users", None, Some(page.page), None)
            .await;
        self.check_error().await?;

        let users = self.users.lock().await.clone();
        Ok(self.paginate(&users, page).await)
    }

    async fn get_user(&self, id: EntityId) -> Result<User> {
        self.call_count.lock().await.get_user += 1;
        self.capture_request::<()>("get_user", Some(id), None, None)
            .await;
        self.check_error().await?;

        let users = self.users.lock().await;
        users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| not_found("user", id).into())
    }

    async fn create_user(&self, request: &CreateUserRequest) -> Result<()> {
        self.call_count.lock().await.create_user += 1;
        self.capture_request("create_user", None, None, Some(request))
            .await;
        self.check_error().await?;

        let id = self.allocate_id().await;
        let facilities = self.resolve_facilities(&request.facilities).await;
        self.users.lock().await.push(User {
            id,
            email: request.email.clone(),
            facilities,
        });
        Ok(())
    }

    async fn update_user(&self, id: EntityId, request: &UpdateUserRequest) -> Result<()> {
        self.call_count.lock().await.update_user += 1;
        self.capture_request("update_user", Some(id), None, Some(request))
            .await;
        self.check_error().await?;

        let facilities = self.resolve_facilities(&request.facilities).await;
        let mut users = self.users.lock().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| not_found("user", id))?;
        user.email = request.email.clone();
        user.facilities = facilities;
        Ok(())
    }

    async fn delete_user(&self, id: EntityId) -> Result<()> {
        self.call_count.lock().await.delete_user += 1;
        self.capture_request::<()>("delete_user", Some(id), None, None)
            .await;
        self.check_error().await?;

        let mut users = self.users.lock().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(not_found("user", id).into());
        }
        Ok(())
    }
}

// ============================================================================
// FacilityApi Implementation
// ============================================================================

#[async_trait]
impl FacilityApi for MockDashboardClient {
    async fn list_facilities(&self) -> Result<Vec<Facility>> {
        self.call_count.lock().await.list_facilities += 1;
        self.capture_request::<()>("list_facilities", None, None, None)
            .await;
        self.check_error().await?;

        Ok(self.facilities.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures;
    use crate::client::models::{FacilityUpdate, NewFacility};
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockDashboardClient::new();

        let page = mock.list_users(PageRequest::default()).await.unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_items, 0);
    }

    #[tokio::test]
    async fn test_mock_client_paginates() {
        let mock = MockDashboardClient::new()
            .with_users(fixtures::users(1, 25))
            .await;

        let first = mock.list_users(PageRequest::new(1)).await.unwrap();
        assert_eq!(first.data.len(), 10);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_items, 25);

        let last = mock.list_users(PageRequest::new(3)).await.unwrap();
        assert_eq!(last.data.len(), 5);
        assert_eq!(last.current_page, 3);

        let beyond = mock.list_users(PageRequest::new(9)).await.unwrap();
        assert!(beyond.data.is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_clamps_past_last_page() {
        let mock = MockDashboardClient::new()
            .with_users(fixtures::users(1, 25))
            .await
            .with_clamped_pages()
            .await;

        let page = mock.list_users(PageRequest::new(9)).await.unwrap();
        assert_eq!(page.current_page, 3);
        assert_eq!(page.data.len(), 5);
    }

    #[tokio::test]
    async fn test_mock_client_with_error_is_one_shot() {
        let mock = MockDashboardClient::new()
            .with_error(ApiError::ServerError("boom".to_string()))
            .await;

        let err = mock.list_facilities().await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::ServerError(_))));

        assert!(mock.list_facilities().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_call_counts() {
        let mock = MockDashboardClient::new()
            .with_organizations(fixtures::organizations(1, 2))
            .await;

        let _ = mock.list_organizations(PageRequest::default()).await;
        let _ = mock.get_organization(1).await;
        let _ = mock.list_facilities().await;

        let counts = mock.call_counts().await;
        assert_eq!(counts.list_organizations, 1);
        assert_eq!(counts.get_organization, 1);
        assert_eq!(counts.total(), 3);
    }

    #[tokio::test]
    async fn test_mock_client_captures_bodies() {
        let mock = MockDashboardClient::new();
        let request = CreateOrganizationRequest {
            name: "Sunrise".to_string(),
            facilities: vec![NewFacility {
                name: "Clinic A".to_string(),
            }],
            pcc_org_id: None,
            pcc_org_uuid: None,
        };

        mock.create_organization(&request).await.unwrap();

        let captured = mock.captured_requests().await;
        assert_eq!(captured[0].method, "create_organization");
        assert_eq!(
            captured[0].body,
            Some(serde_json::json!({ "name": "Sunrise", "facilities": [{ "name": "Clinic A" }] }))
        );
        assert_eq!(mock.organizations().await[0].facilities[0].name, "Clinic A");
    }

    #[tokio::test]
    async fn test_mock_update_keeps_and_assigns_facility_ids() {
        let org = fixtures::OrganizationBuilder::new(5)
            .facility(9, "Clinic A")
            .build();
        let mock = MockDashboardClient::new()
            .with_organizations(vec![org])
            .await;

        let request = UpdateOrganizationRequest {
            name: "Renamed".to_string(),
            facilities: vec![
                FacilityUpdate {
                    id: Some(9),
                    name: "Clinic A".to_string(),
                },
                FacilityUpdate {
                    id: None,
                    name: "Clinic B".to_string(),
                },
            ],
        };
        mock.update_organization(5, &request).await.unwrap();

        let org = mock.get_organization(5).await.unwrap();
        assert_eq!(org.name, "Renamed");
        assert_eq!(org.facilities[0].id, 9);
        assert_ne!(org.facilities[1].id, 9);
    }

    #[tokio::test]
    async fn test_mock_delete_not_found() {
        let mock = MockDashboardClient::new();
        let err = mock.delete_user(42).await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_mock_user_update_resolves_catalogue() {
        let mock = MockDashboardClient::new()
            .with_users(vec![fixtures::UserBuilder::new(3).build()])
            .await
            .with_facilities(fixtures::facility_catalog())
            .await;

        let request = UpdateUserRequest {
            email: "b@x.com".to_string(),
            facilities: vec![10],
        };
        mock.update_user(3, &request).await.unwrap();

        let user = mock.get_user(3).await.unwrap();
        assert_eq!(user.email, "b@x.com");
        assert_eq!(user.facilities[0].name, "Clinic B");
    }
}
