//! Facility models

use serde::{Deserialize, Serialize};

use super::EntityId;

/// Facility resource (belongs to exactly one organization)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    /// Facility ID, assigned by the server
    pub id: EntityId,

    /// Facility name
    pub name: String,

    /// Owning organization (back-reference only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<EntityId>,
}

/// Facility row sent on organization create; the server assigns the ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewFacility {
    pub name: String,
}

/// Facility row sent on organization update
///
/// Existing rows keep their ID so the server can match them; rows added
/// during the edit carry none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacilityUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
}
