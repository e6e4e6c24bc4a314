//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "orgdash Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;

    match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            println!();

            match config.api_url.as_deref() {
                Some(url) => println!("{} API URL: {}", "✓".green(), url),
                None => {
                    println!("{} API URL not configured", "✗".red());
                    println!("  → Run 'orgdash init' to configure");
                }
            }

            if let Some(url) = opts.api_url_ref() {
                println!("{} Overridden by --api-url: {}", "○".dimmed(), url.cyan());
            }

            let prefs = &config.preferences;
            match prefs.format.as_deref() {
                Some(format) if prefs.output_format().is_some() => {
                    println!("{} Default format: {}", "✓".green(), format)
                }
                Some(format) => println!("{} Unknown default format: {}", "⚠".yellow(), format),
                None => println!("{} Default format: pretty", "○".dimmed()),
            }
            println!(
                "{} Rate limit: {} requests/sec, timeout {}s",
                "○".dimmed(),
                prefs.requests_per_second,
                prefs.timeout_secs
            );
            println!();
        }
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!("  Looked in: {}", config_path.display().to_string().dimmed());
            println!();
            println!(
                "Run {} to create a configuration file.",
                "orgdash init".cyan()
            );
            println!();
        }
    }

    Ok(())
}
