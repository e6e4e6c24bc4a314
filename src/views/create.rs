//! Modal create dialog

use std::future::Future;

use log::error;

use super::SubmitOutcome;
use super::form::Form;
use super::notify::Notifier;
use super::resource::Resource;
use crate::client::DashboardApi;

/// Create dialog holding a form for `R`.
///
/// The form survives a failed submit and a close/reopen; it is reset only
/// after a successful create.
pub struct CreateDialog<R: Resource> {
    resource: R,
    open: bool,
    form: R::CreateForm,
    server_error: Option<String>,
}

impl<R: Resource> CreateDialog<R> {
    pub fn new(resource: R) -> Self {
        Self {
            resource,
            open: false,
            form: R::CreateForm::default(),
            server_error: None,
        }
    }

    /// Open the dialog and load the selector catalogue.
    pub async fn open(&mut self, api: &dyn DashboardApi) {
        self.open = true;
        self.server_error = None;
        let catalog = self.resource.load_catalog(api).await;
        self.form.set_catalog(catalog);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn form(&self) -> &R::CreateForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut R::CreateForm {
        &mut self.form
    }

    /// Inline error from the last failed submit.
    pub fn server_error(&self) -> Option<&str> {
        self.server_error.as_deref()
    }

    /// Validate, POST, and on success run `on_created` (the list refresh).
    pub async fn submit<F, Fut>(
        &mut self,
        api: &dyn DashboardApi,
        notifier: &dyn Notifier,
        on_created: F,
    ) -> SubmitOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        let request = match self.form.validate() {
            Ok(request) => request,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };

        self.server_error = None;
        match self.resource.create(api, &request).await {
            Ok(()) => {
                let label = self.resource.describe_create(&request);
                self.form.reset();
                self.open = false;
                on_created().await;
                notifier.success(
                    &format!("{} created", R::TITLE),
                    Some(format!(
                        "The {} {} has been created successfully",
                        R::SINGULAR,
                        label
                    )),
                );
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                error!("Error creating {}: {}", R::SINGULAR, e);
                let message = format!("Failed to create {}. Please try again.", R::SINGULAR);
                self.server_error = Some(message.clone());
                notifier.error(&format!("Failed to create {}", R::SINGULAR));
                SubmitOutcome::Failed(message)
            }
        }
    }
}
