//! User create and edit forms

use super::{FieldErrors, Form, RowList, check_email};
use crate::client::models::{CreateUserRequest, EntityId, Facility, UpdateUserRequest, User};

/// Create form: an email and a single facility selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub email: String,
    pub facility: Option<EntityId>,
    catalog: Vec<Facility>,
}

impl UserForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Facilities offered by the selector.
    pub fn catalog(&self) -> &[Facility] {
        &self.catalog
    }

    pub fn validate_create(&self) -> Result<CreateUserRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        let email = check_email(&self.email, &mut errors);

        match self.facility {
            None => errors.push("facility", "Please select a facility."),
            Some(id) if !known(&self.catalog, id) => {
                errors.push("facility", "Selected facility does not exist")
            }
            Some(_) => {}
        }

        errors.into_result(|| CreateUserRequest {
            email,
            facilities: self.facility.into_iter().collect(),
        })
    }
}

impl Form<CreateUserRequest> for UserForm {
    fn validate(&self) -> Result<CreateUserRequest, FieldErrors> {
        self.validate_create()
    }

    /// Clears the input; the loaded catalogue stays.
    fn reset(&mut self) {
        self.email.clear();
        self.facility = None;
    }

    fn set_catalog(&mut self, catalog: Vec<Facility>) {
        self.catalog = catalog;
    }
}

/// Edit form: email plus the assigned facility IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEditForm {
    pub email: String,
    pub facilities: RowList<EntityId>,
    catalog: Vec<Facility>,
}

impl From<&User> for UserEditForm {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            facilities: RowList::from_rows(user.facilities.iter().map(|f| f.id).collect(), 1),
            catalog: Vec::new(),
        }
    }
}

impl UserEditForm {
    pub fn catalog(&self) -> &[Facility] {
        &self.catalog
    }

    /// Assign a facility unless it is already assigned.
    pub fn add_facility(&mut self, id: EntityId) {
        if self.facilities.position(|f| *f == id).is_none() {
            self.facilities.push(id);
        }
    }

    pub fn validate_update(&self) -> Result<UpdateUserRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        let email = check_email(&self.email, &mut errors);

        if self.facilities.is_empty() {
            errors.push("facilities", "At least one facility is required");
        }
        for (i, id) in self.facilities.iter().enumerate() {
            if !known(&self.catalog, *id) {
                errors.push(
                    format!("facilities.{}", i),
                    "Selected facility does not exist",
                );
            }
        }

        errors.into_result(|| UpdateUserRequest {
            email,
            facilities: self.facilities.as_slice().to_vec(),
        })
    }
}

impl Form<UpdateUserRequest> for UserEditForm {
    fn validate(&self) -> Result<UpdateUserRequest, FieldErrors> {
        self.validate_update()
    }

    fn reset(&mut self) {
        self.email.clear();
        self.facilities = RowList::new(1);
    }

    fn set_catalog(&mut self, catalog: Vec<Facility>) {
        self.catalog = catalog;
    }
}

/// An empty catalogue means it could not be loaded; the server decides then.
fn known(catalog: &[Facility], id: EntityId) -> bool {
    catalog.is_empty() || catalog.iter().any(|f| f.id == id)
}
