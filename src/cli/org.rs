//! Organization command implementations

use tabled::Tabled;

use crate::cli::CommandContext;
use crate::cli::entity::{self, Presenter, submitted};
use crate::client::models::{EntityId, Organization};
use crate::error::{Error, Result};
use crate::output::pretty;
use crate::output::table::{facility_names, or_not_set};
use crate::views::form::{FacilityRow, RowList};
use crate::views::{CreateDialog, Organizations};

/// Organization for table display
#[derive(Tabled, serde::Serialize)]
pub struct OrgRow {
    #[tabled(rename = "ID")]
    id: EntityId,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "FACILITIES")]
    facilities: String,
    #[tabled(rename = "PCC ORG ID")]
    pcc_org_id: String,
    #[tabled(rename = "PCC ORG UUID")]
    pcc_org_uuid: String,
}

impl From<&Organization> for OrgRow {
    fn from(org: &Organization) -> Self {
        Self {
            id: org.id,
            name: org.name.clone(),
            facilities: facility_names(&org.facilities),
            pcc_org_id: or_not_set(org.pcc_org_id.as_deref()),
            pcc_org_uuid: or_not_set(org.pcc_org_uuid.as_deref()),
        }
    }
}

impl Presenter for Organizations {
    type Row = OrgRow;

    fn render_detail(entity: &Organization) -> String {
        pretty::format_organization(entity)
    }
}

/// Run the org list command
pub async fn list(ctx: &CommandContext, page: u32) -> Result<()> {
    entity::list(ctx, Organizations, page).await
}

/// Run the org get command
pub async fn get(ctx: &CommandContext, id: &str) -> Result<()> {
    entity::get(ctx, Organizations, id).await
}

/// Run the org delete command
pub async fn delete(ctx: &CommandContext, id: &str, yes: bool) -> Result<()> {
    entity::delete(ctx, Organizations, id, yes).await
}

/// Run the org create command
pub async fn create(
    ctx: &CommandContext,
    name: &str,
    facilities: &[String],
    pcc_org_id: Option<&str>,
    pcc_org_uuid: Option<&str>,
) -> Result<()> {
    let mut dialog = CreateDialog::new(Organizations);
    dialog.open(ctx.api.as_ref()).await;

    let form = dialog.form_mut();
    form.name = name.to_string();
    form.pcc_org_id = pcc_org_id.unwrap_or_default().to_string();
    form.pcc_org_uuid = pcc_org_uuid.unwrap_or_default().to_string();

    form.facilities = RowList::from_rows(
        facilities
            .iter()
            .map(|name| FacilityRow::named(name.as_str()))
            .collect(),
        1,
    );

    let outcome = dialog
        .submit(ctx.api.as_ref(), &ctx.notifier, || async {})
        .await;
    submitted(outcome)
}

/// Run the org edit command
///
/// New facility rows are added before any removal so that the only
/// facility can be replaced in one edit.
pub async fn edit(
    ctx: &CommandContext,
    id: &str,
    name: Option<&str>,
    add_facilities: &[String],
    remove_facilities: &[EntityId],
) -> Result<()> {
    let mut view = entity::load_detail(ctx, Organizations, id).await?;
    view.begin_edit().await;

    let Some(form) = view.form_mut() else {
        return Err(Error::View("Organization not loaded".to_string()));
    };

    if let Some(name) = name {
        form.name = name.to_string();
    }
    for facility in add_facilities {
        form.add_facility(facility.as_str());
    }
    for facility_id in remove_facilities {
        let index = form
            .facilities
            .position(|row| row.id == Some(*facility_id))
            .ok_or_else(|| {
                Error::View(format!(
                    "Facility {} does not belong to this organization",
                    facility_id
                ))
            })?;
        form.facilities.remove(index).map_err(|e| {
            Error::View(format!("Cannot remove facility {}: {}", facility_id, e))
        })?;
    }

    submitted(view.submit(&ctx.notifier).await)
}
