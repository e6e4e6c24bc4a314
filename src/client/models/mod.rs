//! Dashboard API data models
//!
//! Domain types exchanged with the dashboard REST API, organized by
//! resource type.

mod envelope;
mod facility;
mod organization;
mod user;

/// Server-assigned, immutable entity identifier
pub type EntityId = i64;

pub use envelope::{Envelope, FacilityCatalog};
pub use facility::{Facility, FacilityUpdate, NewFacility};
pub use organization::{CreateOrganizationRequest, Organization, UpdateOrganizationRequest};
pub use user::{CreateUserRequest, UpdateUserRequest, User};
