//! Facility API trait

use async_trait::async_trait;

use crate::client::models::Facility;
use crate::error::Result;

/// Facility catalogue operations for the dashboard API
#[async_trait]
pub trait FacilityApi: Send + Sync {
    /// List every facility across organizations (not paginated).
    async fn list_facilities(&self) -> Result<Vec<Facility>>;
}
