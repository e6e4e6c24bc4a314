//! Response envelopes for single-entity and catalogue endpoints

use serde::{Deserialize, Serialize};

use super::Facility;
use crate::error::ApiError;

/// `{ success, data?, error? }` wrapper returned by single-entity endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Application-level success flag
    #[serde(default)]
    pub success: Option<bool>,

    /// Payload, present on success
    pub data: Option<T>,

    /// Server error message, present on failure
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Extract the payload of a read.
    ///
    /// Reads require an explicit `success: true` and a payload.
    pub fn into_data(self, action: &str) -> Result<T, ApiError> {
        match (self.success, self.data) {
            (Some(true), Some(data)) => Ok(data),
            (Some(true), None) => Err(ApiError::InvalidResponse(format!(
                "{} succeeded without data",
                action
            ))),
            _ => Err(ApiError::Rejected(
                self.error
                    .unwrap_or_else(|| format!("Failed to {}", action)),
            )),
        }
    }

    /// Check the outcome of a mutation.
    ///
    /// Only an explicit `success: false` turns a 2xx into a failure.
    pub fn into_outcome(self, action: &str) -> Result<Option<T>, ApiError> {
        if self.success == Some(false) {
            return Err(ApiError::Rejected(
                self.error
                    .unwrap_or_else(|| format!("Failed to {}", action)),
            ));
        }
        Ok(self.data)
    }
}

/// `{ data: [...] }` wrapper of the full facility list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacilityCatalog {
    #[serde(default)]
    pub data: Vec<Facility>,
}
