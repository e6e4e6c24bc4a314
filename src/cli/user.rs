//! User command implementations

use tabled::Tabled;

use crate::cli::CommandContext;
use crate::cli::entity::{self, Presenter, submitted};
use crate::client::models::{EntityId, User};
use crate::error::{Error, Result};
use crate::output::pretty;
use crate::output::table::facility_names;
use crate::views::{CreateDialog, Users};

/// User for table display
#[derive(Tabled, serde::Serialize)]
pub struct UserRow {
    #[tabled(rename = "ID")]
    id: EntityId,
    #[tabled(rename = "EMAIL")]
    email: String,
    #[tabled(rename = "FACILITIES")]
    facilities: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            facilities: facility_names(&user.facilities),
        }
    }
}

impl Presenter for Users {
    type Row = UserRow;

    fn render_detail(entity: &User) -> String {
        pretty::format_user(entity)
    }
}

/// Run the user list command
pub async fn list(ctx: &CommandContext, page: u32) -> Result<()> {
    entity::list(ctx, Users, page).await
}

/// Run the user get command
pub async fn get(ctx: &CommandContext, id: &str) -> Result<()> {
    entity::get(ctx, Users, id).await
}

/// Run the user delete command
pub async fn delete(ctx: &CommandContext, id: &str, yes: bool) -> Result<()> {
    entity::delete(ctx, Users, id, yes).await
}

/// Run the user create command
pub async fn create(ctx: &CommandContext, email: &str, facility: Option<EntityId>) -> Result<()> {
    let mut dialog = CreateDialog::new(Users);
    dialog.open(ctx.api.as_ref()).await;

    let form = dialog.form_mut();
    form.email = email.to_string();
    form.facility = facility;

    let outcome = dialog
        .submit(ctx.api.as_ref(), &ctx.notifier, || async {})
        .await;
    submitted(outcome)
}

/// Run the user edit command
///
/// Assignments are added before any removal so that the only facility can
/// be swapped in one edit.
pub async fn edit(
    ctx: &CommandContext,
    id: &str,
    email: Option<&str>,
    add_facilities: &[EntityId],
    remove_facilities: &[EntityId],
) -> Result<()> {
    let mut view = entity::load_detail(ctx, Users, id).await?;
    view.begin_edit().await;

    let Some(form) = view.form_mut() else {
        return Err(Error::View("User not loaded".to_string()));
    };

    if let Some(email) = email {
        form.email = email.to_string();
    }
    for facility_id in add_facilities {
        form.add_facility(*facility_id);
    }
    for facility_id in remove_facilities {
        let index = form
            .facilities
            .position(|assigned| assigned == facility_id)
            .ok_or_else(|| {
                Error::View(format!(
                    "Facility {} is not assigned to this user",
                    facility_id
                ))
            })?;
        form.facilities.remove(index).map_err(|e| {
            Error::View(format!("Cannot remove facility {}: {}", facility_id, e))
        })?;
    }

    submitted(view.submit(&ctx.notifier).await)
}
