//! User models

use serde::{Deserialize, Serialize};

use super::{EntityId, Facility};

/// User resource with assigned facilities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: EntityId,

    /// User email address
    pub email: String,

    /// Assigned facilities
    #[serde(default)]
    pub facilities: Vec<Facility>,
}

/// Request body for creating a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserRequest {
    pub email: String,
    /// Facility IDs
    pub facilities: Vec<EntityId>,
}

/// Request body for updating a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateUserRequest {
    pub email: String,
    /// Facility IDs
    pub facilities: Vec<EntityId>,
}
