//! Detail view with in-place editing

use std::future::Future;
use std::sync::Arc;

use log::{debug, error, warn};

use super::SubmitOutcome;
use super::form::Form;
use super::notify::Notifier;
use super::resource::Resource;
use super::tracker::RequestTracker;
use crate::client::DashboardApi;
use crate::client::models::EntityId;

/// Fetch state of a detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailStatus {
    /// Waiting for the route parameter
    Resolving,
    Loading,
    Failed(String),
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    View,
    Edit,
}

/// One entity fetched by route identifier, viewable and editable.
pub struct DetailView<R: Resource> {
    resource: R,
    api: Arc<dyn DashboardApi>,
    tracker: RequestTracker,
    id: Option<EntityId>,
    status: DetailStatus,
    entity: Option<R::Entity>,
    mode: Mode,
    form: Option<R::EditForm>,
    form_error: Option<String>,
}

impl<R: Resource> DetailView<R> {
    pub fn new(resource: R, api: Arc<dyn DashboardApi>) -> Self {
        Self {
            resource,
            api,
            tracker: RequestTracker::new(),
            id: None,
            status: DetailStatus::Resolving,
            entity: None,
            mode: Mode::View,
            form: None,
            form_error: None,
        }
    }

    /// Mount the view: wait for the route parameter, parse it, fetch.
    pub async fn open(
        resource: R,
        api: Arc<dyn DashboardApi>,
        route: impl Future<Output = String>,
    ) -> Self {
        let mut view = Self::new(resource, api);
        let raw = route.await;
        view.resolve(&raw).await;
        view
    }

    /// Parse a raw route parameter and fetch the entity it names.
    pub async fn resolve(&mut self, raw: &str) {
        match raw.trim().parse::<EntityId>() {
            Ok(id) => {
                self.id = Some(id);
                self.load().await;
            }
            Err(_) => {
                warn!("Invalid {} id in route: {:?}", R::SINGULAR, raw);
                self.status = DetailStatus::Failed(format!("Invalid {} id: {}", R::SINGULAR, raw));
            }
        }
    }

    /// Fetch the entity.
    pub async fn load(&mut self) {
        let Some(id) = self.id else {
            return;
        };

        let ticket = self.tracker.begin();
        self.status = DetailStatus::Loading;
        let result = self.resource.fetch_one(self.api.as_ref(), id).await;

        if !self.tracker.is_current(ticket) {
            debug!("Discarding stale {} {}", R::SINGULAR, id);
            return;
        }

        match result {
            Ok(entity) => {
                self.entity = Some(entity);
                self.status = DetailStatus::Ready;
            }
            Err(e) => {
                error!("Error fetching {}: {}", R::SINGULAR, e);
                self.status = DetailStatus::Failed(format!(
                    "Failed to fetch {}. Please try again later.",
                    R::SINGULAR
                ));
            }
        }
    }

    /// Enter edit mode with a form built from the current entity.
    pub async fn begin_edit(&mut self) -> bool {
        let Some(entity) = &self.entity else {
            return false;
        };

        let mut form = R::EditForm::from(entity);
        form.set_catalog(self.resource.load_catalog(self.api.as_ref()).await);
        self.form = Some(form);
        self.form_error = None;
        self.mode = Mode::Edit;
        true
    }

    /// Leave edit mode, discarding the form.
    pub fn cancel_edit(&mut self) {
        self.mode = Mode::View;
        self.form = None;
        self.form_error = None;
    }

    /// Validate, PUT, then re-fetch the canonical state.
    pub async fn submit(&mut self, notifier: &dyn Notifier) -> SubmitOutcome {
        let (Some(id), Some(form)) = (self.id, &self.form) else {
            return SubmitOutcome::Failed(format!("Not editing a {}", R::SINGULAR));
        };

        let request = match form.validate() {
            Ok(request) => request,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };

        self.form_error = None;
        match self.resource.update(self.api.as_ref(), id, &request).await {
            Ok(()) => {
                self.mode = Mode::View;
                self.form = None;
                self.load().await;
                notifier.success(&format!("{} updated", R::TITLE), None);
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                error!("Error updating {}: {}", R::SINGULAR, e);
                let message = format!("Failed to update {}: {}", R::SINGULAR, e);
                self.form_error = Some(message.clone());
                notifier.error(&format!("Failed to update {}", R::SINGULAR));
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Navigate back to the list. Unsaved edits are dropped.
    pub fn back(self) -> String {
        self.tracker.unmount();
        self.resource.list_route()
    }

    pub fn handle(&self) -> RequestTracker {
        self.tracker.clone()
    }

    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn status(&self) -> &DetailStatus {
        &self.status
    }

    pub fn entity(&self) -> Option<&R::Entity> {
        self.entity.as_ref()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn form(&self) -> Option<&R::EditForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut R::EditForm> {
        self.form.as_mut()
    }

    /// Inline error from the last failed submit.
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }
}
