//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)] // Builder methods are available for future tests

use super::models::{EntityId, Facility, Organization, User};

// ============================================================================
// FacilityBuilder
// ============================================================================

/// Builder for creating test Facility instances.
///
/// # Example
/// ```ignore
/// let facility = FacilityBuilder::new(9).name("Clinic A").org_id(5).build();
/// ```
#[derive(Debug, Clone)]
pub struct FacilityBuilder {
    id: EntityId,
    name: String,
    organization_id: Option<EntityId>,
}

impl FacilityBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            name: format!("Facility {}", id),
            organization_id: None,
        }
    }

    /// Set the facility name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the owning organization.
    pub fn org_id(mut self, org_id: EntityId) -> Self {
        self.organization_id = Some(org_id);
        self
    }

    /// Build the Facility.
    pub fn build(self) -> Facility {
        Facility {
            id: self.id,
            name: self.name,
            organization_id: self.organization_id,
        }
    }
}

// ============================================================================
// OrganizationBuilder
// ============================================================================

/// Builder for creating test Organization instances.
///
/// # Example
/// ```ignore
/// let org = OrganizationBuilder::new(5)
///     .name("Sunrise Care")
///     .facility(9, "Clinic A")
///     .pcc("42", "0b1f7d0e-8a1c-4c55-9d2e-1a2b3c4d5e6f")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct OrganizationBuilder {
    id: EntityId,
    name: String,
    facilities: Vec<Facility>,
    pcc_org_id: Option<String>,
    pcc_org_uuid: Option<String>,
}

impl OrganizationBuilder {
    /// Create a new builder with the given ID and no facilities.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            name: format!("Organization {}", id),
            facilities: Vec::new(),
            pcc_org_id: None,
            pcc_org_uuid: None,
        }
    }

    /// Set the organization name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add a facility owned by this organization.
    pub fn facility(mut self, id: EntityId, name: impl Into<String>) -> Self {
        let facility = FacilityBuilder::new(id).name(name).org_id(self.id).build();
        self.facilities.push(facility);
        self
    }

    /// Set the external identifier pair.
    pub fn pcc(mut self, org_id: impl Into<String>, org_uuid: impl Into<String>) -> Self {
        self.pcc_org_id = Some(org_id.into());
        self.pcc_org_uuid = Some(org_uuid.into());
        self
    }

    /// Build the Organization.
    pub fn build(self) -> Organization {
        Organization {
            id: self.id,
            name: self.name,
            facilities: self.facilities,
            pcc_org_id: self.pcc_org_id,
            pcc_org_uuid: self.pcc_org_uuid,
        }
    }
}

// ============================================================================
// UserBuilder
// ============================================================================

/// Builder for creating test User instances.
///
/// # Example
/// ```ignore
/// let user = UserBuilder::new(3).email("a@x.com").facility(9, "Clinic A").build();
/// ```
#[derive(Debug, Clone)]
pub struct UserBuilder {
    id: EntityId,
    email: String,
    facilities: Vec<Facility>,
}

impl UserBuilder {
    /// Create a new builder with the given ID and no facilities.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            email: format!("user{}@example.com", id),
            facilities: Vec::new(),
        }
    }

    /// Set the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Assign a facility.
    pub fn facility(mut self, id: EntityId, name: impl Into<String>) -> Self {
        self.facilities.push(FacilityBuilder::new(id).name(name).build());
        self
    }

    /// Build the User.
    pub fn build(self) -> User {
        User {
            id: self.id,
            email: self.email,
            facilities: self.facilities,
        }
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Create `count` organizations with sequential IDs starting at `start`,
/// each with one facility.
pub fn organizations(start: EntityId, count: usize) -> Vec<Organization> {
    (0..count as EntityId)
        .map(|i| {
            let id = start + i;
            OrganizationBuilder::new(id)
                .facility(100 + id, format!("Clinic {}", id))
                .build()
        })
        .collect()
}

/// Create `count` users with sequential IDs starting at `start`.
pub fn users(start: EntityId, count: usize) -> Vec<User> {
    (0..count as EntityId)
        .map(|i| {
            let id = start + i;
            UserBuilder::new(id).facility(9, "Clinic A").build()
        })
        .collect()
}

/// Standard facility catalogue used across tests.
pub fn facility_catalog() -> Vec<Facility> {
    vec![
        FacilityBuilder::new(9).name("Clinic A").org_id(5).build(),
        FacilityBuilder::new(10).name("Clinic B").org_id(5).build(),
        FacilityBuilder::new(11).name("Clinic C").org_id(6).build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_builder_defaults() {
        let org = OrganizationBuilder::new(5).build();
        assert_eq!(org.id, 5);
        assert_eq!(org.name, "Organization 5");
        assert!(org.facilities.is_empty());
        assert!(org.pcc_org_id.is_none());
    }

    #[test]
    fn test_organization_builder_facility_back_reference() {
        let org = OrganizationBuilder::new(5).facility(9, "Clinic A").build();
        assert_eq!(org.facilities[0].organization_id, Some(5));
    }

    #[test]
    fn test_user_builder_full() {
        let user = UserBuilder::new(3)
            .email("a@x.com")
            .facility(9, "Clinic A")
            .build();
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.facilities.len(), 1);
    }

    #[test]
    fn test_sequential_helpers() {
        let orgs = organizations(10, 3);
        assert_eq!(orgs.iter().map(|o| o.id).collect::<Vec<_>>(), vec![10, 11, 12]);
        assert_eq!(users(1, 2)[1].id, 2);
    }
}
