//! Organization models

use serde::{Deserialize, Serialize};

use super::{EntityId, Facility, FacilityUpdate, NewFacility};

/// Organization resource with its facilities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID
    pub id: EntityId,

    /// Organization name
    pub name: String,

    /// Facilities, in server order
    #[serde(default)]
    pub facilities: Vec<Facility>,

    /// External-system organization identifier (read-only once set)
    #[serde(default)]
    pub pcc_org_id: Option<String>,

    /// External-system organization UUID (read-only once set)
    #[serde(default)]
    pub pcc_org_uuid: Option<String>,
}

/// Request body for creating an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateOrganizationRequest {
    pub name: String,
    pub facilities: Vec<NewFacility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcc_org_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcc_org_uuid: Option<String>,
}

/// Request body for updating an organization
///
/// Carries neither the organization ID nor the external identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateOrganizationRequest {
    pub name: String,
    pub facilities: Vec<FacilityUpdate>,
}
