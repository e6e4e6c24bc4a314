//! Pagination argument types for CLI commands

use clap::Args;

use crate::client::{FIRST_PAGE, PageRequest};

/// Page selection for list commands.
///
/// Flatten this into any command that lists one page of a collection:
/// ```ignore
/// List {
///     #[command(flatten)]
///     page: PageArgs,
/// }
/// ```
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Page number (1-indexed)
    #[arg(long, short = 'p', default_value_t = FIRST_PAGE)]
    pub page: u32,
}

impl Default for PageArgs {
    fn default() -> Self {
        Self { page: FIRST_PAGE }
    }
}

impl PageArgs {
    pub fn to_request(&self) -> PageRequest {
        PageRequest::new(self.page)
    }
}
