//! Init command implementation

use std::time::Duration;

use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::client::{DashboardClient, FacilityApi};
use crate::config::{Config, validate_api_url};
use crate::error::Result;

/// Run the init command
///
/// Prompts for the API URL unless `--api-url` (or `ORGDASH_API_URL`) is set.
/// Existing preferences in the config file are kept.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to orgdash!".bold().green());
    println!("Let's point orgdash at your dashboard API.\n");

    let mut config = Config::load_at(opts.config_ref()).unwrap_or_default();

    let api_url = match opts.api_url_ref() {
        Some(url) => url.to_string(),
        None => {
            let theme = ColorfulTheme::default();
            let mut prompt = Input::<String>::with_theme(&theme)
                .with_prompt("Dashboard API URL")
                .validate_with(|input: &String| -> std::result::Result<(), String> {
                    validate_api_url(input).map_err(|e| e.to_string())
                });
            if let Some(current) = &config.api_url {
                prompt = prompt.default(current.clone());
            }
            prompt.interact_text()?
        }
    };
    let api_url = api_url.trim().trim_end_matches('/').to_string();
    validate_api_url(&api_url)?;

    println!("\n{}", "Checking API...".cyan());
    let client = DashboardClient::new(
        &api_url,
        config.preferences.requests_per_second,
        Duration::from_secs(config.preferences.timeout_secs),
    )?;
    match client.list_facilities().await {
        Ok(facilities) => println!(
            "{} API reachable ({} facilities)",
            "✓".green(),
            facilities.len()
        ),
        Err(e) => println!("{} Could not reach API: {}", "⚠".yellow(), e),
    }

    config.api_url = Some(api_url);
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "orgdash status".cyan());
    println!("  {} - List organizations", "orgdash org list".cyan());
    println!("  {} - List users", "orgdash user list".cyan());

    Ok(())
}
