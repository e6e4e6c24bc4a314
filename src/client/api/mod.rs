//! API trait definitions split by resource
//!
//! - [`OrganizationApi`] - organizations and their facilities
//! - [`UserApi`] - users and their facility assignments
//! - [`FacilityApi`] - the facility catalogue
//!
//! The [`DashboardApi`](super::DashboardApi) super-trait combines all three.

mod facilities;
mod organizations;
mod users;

pub use facilities::FacilityApi;
pub use organizations::OrganizationApi;
pub use users::UserApi;
