//! Dynamic shell completions for orgdash
//!
//! Provides TAB completion for organization, user and facility IDs by
//! querying the dashboard API at completion time.
//!
//! Shell support:
//! - Fish/Zsh: Full support with descriptions
//! - Bash: Values only (no description display)

use std::io;
use std::time::Duration;

use clap::CommandFactory;
use clap_complete::Shell;
use clap_complete::engine::{ArgValueCandidates, CompletionCandidate};

use crate::cli::Cli;
use crate::client::{DashboardClient, FIRST_PAGE, FacilityApi, OrganizationApi, PageRequest, UserApi};
use crate::config::Config;

/// Maximum number of completion candidates to return
const MAX_COMPLETIONS: usize = 25;

/// Timeout for completion API calls
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(3);

/// Write static completions for `shell` to stdout.
pub fn generate(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}

/// Create a blocking runtime for completion API calls.
///
/// Completers are called synchronously by the shell.
fn blocking_runtime() -> Option<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .ok()
}

/// Load config and build a client for completions.
///
/// Completions should never break the shell, so all errors are silent.
fn completion_context() -> Option<DashboardClient> {
    let config_path = std::env::var("ORGDASH_CONFIG").ok();
    let api_url = std::env::var("ORGDASH_API_URL").ok();

    let config = Config::load_with_override(config_path.as_deref(), api_url.as_deref()).ok()?;
    let url = config.require_api_url().ok()?;

    DashboardClient::new(
        url,
        config.preferences.requests_per_second,
        COMPLETION_TIMEOUT,
    )
    .ok()
}

/// Complete organization IDs from the first page.
///
/// Format: `{id}` with help `{name} | {n} facilities`
pub fn complete_org_ids() -> Vec<CompletionCandidate> {
    let Some(client) = completion_context() else {
        return vec![];
    };
    let Some(rt) = blocking_runtime() else {
        return vec![];
    };

    let result = rt.block_on(async {
        tokio::time::timeout(
            COMPLETION_TIMEOUT,
            client.list_organizations(PageRequest::new(FIRST_PAGE)),
        )
        .await
    });

    let page = match result {
        Ok(Ok(page)) => page,
        _ => return vec![],
    };

    page.data
        .into_iter()
        .take(MAX_COMPLETIONS)
        .map(|org| {
            let help = format!(
                "{} | {} facilities",
                truncate_str(&org.name, 30),
                org.facilities.len()
            );
            CompletionCandidate::new(org.id.to_string()).help(Some(help.into()))
        })
        .collect()
}

/// Complete user IDs from the first page.
///
/// Format: `{id}` with help `{email}`
pub fn complete_user_ids() -> Vec<CompletionCandidate> {
    let Some(client) = completion_context() else {
        return vec![];
    };
    let Some(rt) = blocking_runtime() else {
        return vec![];
    };

    let result = rt.block_on(async {
        tokio::time::timeout(
            COMPLETION_TIMEOUT,
            client.list_users(PageRequest::new(FIRST_PAGE)),
        )
        .await
    });

    let page = match result {
        Ok(Ok(page)) => page,
        _ => return vec![],
    };

    page.data
        .into_iter()
        .take(MAX_COMPLETIONS)
        .map(|user| {
            CompletionCandidate::new(user.id.to_string())
                .help(Some(truncate_str(&user.email, 40).into()))
        })
        .collect()
}

/// Complete facility IDs from the catalogue.
///
/// Format: `{id}` with help `{name}`
pub fn complete_facility_ids() -> Vec<CompletionCandidate> {
    let Some(client) = completion_context() else {
        return vec![];
    };
    let Some(rt) = blocking_runtime() else {
        return vec![];
    };

    let result =
        rt.block_on(async { tokio::time::timeout(COMPLETION_TIMEOUT, client.list_facilities()).await });

    let facilities = match result {
        Ok(Ok(facilities)) => facilities,
        _ => return vec![],
    };

    facilities
        .into_iter()
        .take(MAX_COMPLETIONS)
        .map(|facility| {
            CompletionCandidate::new(facility.id.to_string())
                .help(Some(truncate_str(&facility.name, 40).into()))
        })
        .collect()
}

/// Truncate to `max_chars` characters, adding "..." if truncated.
fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Create completion candidates for organization IDs.
pub fn org_id_candidates() -> ArgValueCandidates {
    ArgValueCandidates::new(complete_org_ids)
}

/// Create completion candidates for user IDs.
pub fn user_id_candidates() -> ArgValueCandidates {
    ArgValueCandidates::new(complete_user_ids)
}

/// Create completion candidates for facility IDs.
pub fn facility_id_candidates() -> ArgValueCandidates {
    ArgValueCandidates::new(complete_facility_ids)
}
