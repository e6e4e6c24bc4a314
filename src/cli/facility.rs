//! Facility command implementations

use tabled::Tabled;

use crate::cli::CommandContext;
use crate::client::FacilityApi;
use crate::client::models::{EntityId, Facility};
use crate::error::Result;
use crate::output::Formattable;
use crate::output::progress::Spinner;
use crate::output::table::NOT_SET;

/// Facility for table display
#[derive(Tabled, serde::Serialize)]
pub struct FacilityRow {
    #[tabled(rename = "ID")]
    id: EntityId,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "ORG ID")]
    organization_id: String,
}

impl From<Facility> for FacilityRow {
    fn from(facility: Facility) -> Self {
        Self {
            id: facility.id,
            name: facility.name,
            organization_id: facility
                .organization_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| NOT_SET.to_string()),
        }
    }
}

/// Run the facility list command
pub async fn list(ctx: &CommandContext) -> Result<()> {
    let facilities = {
        let _spinner = Spinner::new("Loading facilities...");
        ctx.api.list_facilities().await?
    };

    let rows: Vec<FacilityRow> = facilities.into_iter().map(FacilityRow::from).collect();
    rows.print(ctx.format)
}
