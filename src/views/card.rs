//! Entity card with a confirmed delete

use log::error;

use super::notify::Notifier;
use super::resource::{Resource, Summary};
use crate::client::DashboardApi;
use crate::client::models::EntityId;

/// Confirmation modal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteDialog {
    #[default]
    Closed,
    Confirming,
}

/// Result of confirming a delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The modal was not open, nothing was sent
    NotConfirming,
    Deleted(EntityId),
    Failed(String),
}

/// One entity's summary with "View" and "Delete" affordances.
#[derive(Debug, Clone)]
pub struct Card<R: Resource> {
    resource: R,
    summary: Summary,
    dialog: DeleteDialog,
}

impl<R: Resource> Card<R> {
    pub fn new(resource: R, entity: &R::Entity) -> Self {
        Self {
            summary: resource.summary(entity),
            resource,
            dialog: DeleteDialog::Closed,
        }
    }

    pub fn id(&self) -> EntityId {
        self.summary.id
    }

    pub fn title(&self) -> &str {
        &self.summary.title
    }

    /// `Facilities: N`, or `Facilities: No Facility` when there are none
    pub fn facilities_line(&self) -> String {
        match self.summary.facility_count {
            0 => "Facilities: No Facility".to_string(),
            n => format!("Facilities: {}", n),
        }
    }

    /// Body lines shown under the title.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.facilities_line()];
        if let Some((org_id, org_uuid)) = &self.summary.external {
            lines.push(format!(
                "PCC Org ID: {}",
                org_id.as_deref().unwrap_or("Not set")
            ));
            lines.push(format!(
                "PCC Org UUID: {}",
                org_uuid.as_deref().unwrap_or("Not set")
            ));
        }
        lines
    }

    /// Detail route the "View" button navigates to.
    pub fn view(&self) -> String {
        self.resource.detail_route(self.summary.id)
    }

    pub fn dialog(&self) -> DeleteDialog {
        self.dialog
    }

    pub fn confirm_prompt(&self) -> String {
        format!("Are you sure you want to delete this {}?", R::SINGULAR)
    }

    /// Open the confirmation modal. No request is made.
    pub fn request_delete(&mut self) {
        self.dialog = DeleteDialog::Confirming;
    }

    /// Close the modal without deleting.
    pub fn cancel_delete(&mut self) {
        self.dialog = DeleteDialog::Closed;
    }

    /// Issue exactly one DELETE for this entity.
    ///
    /// On success `on_deleted` receives the id; on failure the entity stays
    /// and an error notification is raised.
    pub async fn confirm_delete(
        &mut self,
        api: &dyn DashboardApi,
        notifier: &dyn Notifier,
        on_deleted: impl FnOnce(EntityId),
    ) -> DeleteOutcome {
        if self.dialog != DeleteDialog::Confirming {
            return DeleteOutcome::NotConfirming;
        }
        self.dialog = DeleteDialog::Closed;

        let id = self.summary.id;
        match self.resource.delete(api, id).await {
            Ok(()) => {
                on_deleted(id);
                notifier.success(
                    &format!("{} deleted", R::TITLE),
                    Some(self.summary.title.clone()),
                );
                DeleteOutcome::Deleted(id)
            }
            Err(e) => {
                error!("Error deleting {}: {}", R::SINGULAR, e);
                let message = format!("Failed to delete {}. Please try again.", R::SINGULAR);
                notifier.error(&message);
                DeleteOutcome::Failed(message)
            }
        }
    }
}
