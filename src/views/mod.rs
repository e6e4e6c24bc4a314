//! Dashboard screens
//!
//! Each view is a self-contained state container that owns its fetch and
//! error state. Views talk to the API only through
//! [`DashboardApi`](crate::client::DashboardApi) and raise toasts through a
//! [`Notifier`].

pub mod card;
pub mod create;
pub mod detail;
pub mod form;
pub mod list;
pub mod notify;
pub mod pagination;
pub mod resource;
pub mod tracker;

pub use card::{Card, DeleteDialog, DeleteOutcome};
pub use create::CreateDialog;
pub use detail::{DetailStatus, DetailView, Mode};
pub use form::{FieldErrors, Form};
pub use list::{EntityList, ListStatus};
pub use notify::{Notifier, TerminalNotifier};
pub use pagination::PaginationControl;
pub use resource::{Organizations, Resource, Users};

/// Result of submitting a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; no request was made
    Invalid(FieldErrors),
    /// The request failed; the message is shown inline
    Failed(String),
    Succeeded,
}
