//! Dashboard REST API client

pub mod api;
pub mod dashboard;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;

pub use api::{FacilityApi, OrganizationApi, UserApi};
pub use dashboard::DashboardClient;
#[cfg(test)]
pub use mock::MockDashboardClient;
pub use pagination::{FIRST_PAGE, Page, PageRequest};

/// Every operation the dashboard consumes from the REST API.
///
/// Views hold an `Arc<dyn DashboardApi>` so they run unchanged against the
/// HTTP client or the in-crate mock.
pub trait DashboardApi: OrganizationApi + UserApi + FacilityApi {}

impl<T: OrganizationApi + UserApi + FacilityApi> DashboardApi for T {}
