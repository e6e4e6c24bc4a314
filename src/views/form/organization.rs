//! Organization create/edit form

use uuid::Uuid;

use super::{FieldErrors, Form, RowList};
use crate::client::models::{
    CreateOrganizationRequest, EntityId, FacilityUpdate, NewFacility, Organization,
    UpdateOrganizationRequest,
};

/// Longest accepted organization name, in characters
pub const MAX_NAME_CHARS: usize = 23;

/// One facility row of the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacilityRow {
    /// Server ID for rows loaded from an existing organization
    pub id: Option<EntityId>,
    pub name: String,
}

impl FacilityRow {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

/// Organization form shared by the create dialog and the edit view.
///
/// In edit mode the external identifiers are shown but locked; they are
/// never part of the update payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationForm {
    pub name: String,
    pub facilities: RowList<FacilityRow>,
    pub pcc_org_id: String,
    pub pcc_org_uuid: String,
    external_locked: bool,
}

impl Default for OrganizationForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            facilities: RowList::from_rows(vec![FacilityRow::default()], 1),
            pcc_org_id: String::new(),
            pcc_org_uuid: String::new(),
            external_locked: false,
        }
    }
}

impl From<&Organization> for OrganizationForm {
    fn from(org: &Organization) -> Self {
        let rows = org
            .facilities
            .iter()
            .map(|f| FacilityRow {
                id: Some(f.id),
                name: f.name.clone(),
            })
            .collect();

        Self {
            name: org.name.clone(),
            facilities: RowList::from_rows(rows, 1),
            pcc_org_id: org.pcc_org_id.clone().unwrap_or_default(),
            pcc_org_uuid: org.pcc_org_uuid.clone().unwrap_or_default(),
            external_locked: true,
        }
    }
}

impl OrganizationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the external identifier fields are read-only.
    pub fn external_locked(&self) -> bool {
        self.external_locked
    }

    pub fn add_facility(&mut self, name: impl Into<String>) {
        self.facilities.push(FacilityRow::named(name));
    }

    /// Check name and facility rows; returns the trimmed name.
    fn check_common(&self, errors: &mut FieldErrors) -> String {
        let name = self.name.trim();
        if name.is_empty() {
            errors.push("name", "The organization name is required");
        } else if name.chars().count() > MAX_NAME_CHARS {
            errors.push(
                "name",
                format!(
                    "The organization name cannot exceed {} characters",
                    MAX_NAME_CHARS
                ),
            );
        }

        if self.facilities.is_empty() {
            errors.push("facilities", "At least one facility is required");
        }
        for (i, row) in self.facilities.iter().enumerate() {
            if row.name.trim().is_empty() {
                errors.push(
                    format!("facilities.{}.name", i),
                    "Facility name is required",
                );
            }
        }

        name.to_string()
    }

    /// Check the external identifier pair: both or neither.
    fn check_external(&self, errors: &mut FieldErrors) -> (Option<String>, Option<String>) {
        let org_id = self.pcc_org_id.trim();
        let org_uuid = self.pcc_org_uuid.trim();

        if org_id.is_empty() && org_uuid.is_empty() {
            return (None, None);
        }

        if org_id.is_empty() {
            errors.push("pcc_org_id", "The pcc_org_id is required");
        }
        if org_uuid.is_empty() {
            errors.push("pcc_org_uuid", "The pcc_org_uuid is required");
        } else if Uuid::parse_str(org_uuid).is_err() {
            errors.push("pcc_org_uuid", "The pcc_org_uuid must be a valid UUID");
        }

        (Some(org_id.to_string()), Some(org_uuid.to_string()))
    }

    /// Validate into a create payload. Facility IDs are never sent.
    pub fn validate_create(&self) -> Result<CreateOrganizationRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = self.check_common(&mut errors);
        let (pcc_org_id, pcc_org_uuid) = self.check_external(&mut errors);

        errors.into_result(|| CreateOrganizationRequest {
            name,
            facilities: self
                .facilities
                .iter()
                .map(|row| NewFacility {
                    name: row.name.trim().to_string(),
                })
                .collect(),
            pcc_org_id,
            pcc_org_uuid,
        })
    }

    /// Validate into an update payload. External identifiers are left out.
    pub fn validate_update(&self) -> Result<UpdateOrganizationRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = self.check_common(&mut errors);

        errors.into_result(|| UpdateOrganizationRequest {
            name,
            facilities: self
                .facilities
                .iter()
                .map(|row| FacilityUpdate {
                    id: row.id,
                    name: row.name.trim().to_string(),
                })
                .collect(),
        })
    }
}

impl Form<CreateOrganizationRequest> for OrganizationForm {
    fn validate(&self) -> Result<CreateOrganizationRequest, FieldErrors> {
        self.validate_create()
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Form<UpdateOrganizationRequest> for OrganizationForm {
    fn validate(&self) -> Result<UpdateOrganizationRequest, FieldErrors> {
        self.validate_update()
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
