//! Dashboard API client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api::{FacilityApi, OrganizationApi, UserApi};
use super::models::{
    CreateOrganizationRequest, CreateUserRequest, EntityId, Envelope, Facility, FacilityCatalog,
    Organization, UpdateOrganizationRequest, UpdateUserRequest, User,
};
use super::pagination::{Page, PageRequest};
use crate::error::{ApiError, Result};

/// Path prefix of every dashboard endpoint
const API_PREFIX: &str = "/api/v1";

/// Dashboard API client
pub struct DashboardClient {
    http: HttpClient,
    base_url: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl DashboardClient {
    /// Create a client for the API at `base_url` (e.g. `https://admin.example.com`)
    pub fn new(base_url: &str, requests_per_second: u32, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let per_second = NonZeroU32::new(requests_per_second).unwrap_or(NonZeroU32::MIN);
        let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_second(per_second)));

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            rate_limiter,
        })
    }

    /// Full URL for an API path such as `/users/3`
    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// Send a request and map non-2xx statuses to errors
    async fn send(&self, method: Method, path: &str, request: RequestBuilder) -> Result<Response> {
        self.rate_limiter.until_ready().await;

        debug!("{} {}", method, self.url(path));
        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        debug!("{} {} -> {}", method, path, status);
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);

        let err = match status {
            StatusCode::NOT_FOUND => {
                ApiError::NotFound(message.unwrap_or_else(|| path.to_string()))
            }
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::BadRequest(message.unwrap_or_else(|| "Bad request".to_string()))
            }
            status if status.is_server_error() => ApiError::ServerError(
                message.unwrap_or_else(|| format!("Server error: {}", status)),
            ),
            status => ApiError::UnexpectedStatus(status.as_u16()),
        };
        Err(err.into())
    }

    /// GET a JSON document
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T> {
        let request = self.http.get(self.url(path)).query(query);
        let response = self.send(Method::GET, path, request).await?;

        let data = response.json::<T>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;
        Ok(data)
    }

    /// GET a single entity wrapped in an envelope
    async fn get_entity<T: DeserializeOwned>(&self, path: &str, action: &str) -> Result<T> {
        let envelope: Envelope<T> = self.get_json(path, &[]).await?;
        Ok(envelope.into_data(action)?)
    }

    /// Send a mutation and check its (optional) envelope
    async fn mutate<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        action: &str,
    ) -> Result<()> {
        let mut request = self.http.request(method.clone(), self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = self.send(method, path, request).await?;
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        if text.trim().is_empty() {
            return Ok(());
        }

        // Non-envelope bodies on a 2xx are accepted as success
        match serde_json::from_str::<Envelope<serde_json::Value>>(&text) {
            Ok(envelope) => {
                envelope.into_outcome(action)?;
                Ok(())
            }
            Err(_) => Ok(()),
        }
    }
}

/// Pull a human-readable message out of an error body
fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(envelope) = serde_json::from_str::<Envelope<serde_json::Value>>(trimmed) {
        if let Some(error) = envelope.error {
            return Some(error);
        }
    }

    Some(trimmed.to_string())
}

#[async_trait]
impl OrganizationApi for DashboardClient {
    async fn list_organizations(&self, page: PageRequest) -> Result<Page<Organization>> {
        self.get_json("/organizations-with-facilities", &page.to_query_params())
            .await
    }

    async fn get_organization(&self, id: EntityId) -> Result<Organization> {
        self.get_entity(&format!("/organizations/{}", id), "fetch organization")
            .await
    }

    async fn create_organization(&self, request: &CreateOrganizationRequest) -> Result<()> {
        self.mutate(
            Method::POST,
            "/organizations",
            Some(request),
            "create organization",
        )
        .await
    }

    async fn update_organization(
        &self,
        id: EntityId,
        request: &UpdateOrganizationRequest,
    ) -> Result<()> {
        self.mutate(
            Method::PUT,
            &format!("/organizations/{}", id),
            Some(request),
            "update organization",
        )
        .await
    }

    async fn delete_organization(&self, id: EntityId) -> Result<()> {
        self.mutate::<()>(
            Method::DELETE,
            &format!("/organizations/{}", id),
            None,
            "delete organization",
        )
        .await
    }
}

#[async_trait]
impl UserApi for DashboardClient {
    async fn list_users(&self, page: PageRequest) -> Result<Page<User>> {
        self.get_json("/users", &page.to_query_params()).await
    }

    async fn get_user(&self, id: EntityId) -> Result<User> {
        self.get_entity(&format!("/users/{}", id), "fetch user").await
    }

    async fn create_user(&self, request: &CreateUserRequest) -> Result<()> {
        self.mutate(Method::POST, "/users", Some(request), "create user")
            .await
    }

    async fn update_user(&self, id: EntityId, request: &UpdateUserRequest) -> Result<()> {
        self.mutate(
            Method::PUT,
            &format!("/users/{}", id),
            Some(request),
            "update user",
        )
        .await
    }

    async fn delete_user(&self, id: EntityId) -> Result<()> {
        self.mutate::<()>(
            Method::DELETE,
            &format!("/users/{}", id),
            None,
            "delete user",
        )
        .await
    }
}

#[async_trait]
impl FacilityApi for DashboardClient {
    async fn list_facilities(&self) -> Result<Vec<Facility>> {
        let catalog: FacilityCatalog = self.get_json("/facilities", &[]).await?;
        Ok(catalog.data)
    }
}
