//! orgdash - Terminal admin dashboard for organizations, facilities and users

use clap::{CommandFactory, Parser};
use clap_complete::CompleteEnv;
use env_logger::Env;

mod cli;
mod client;
mod config;
mod error;
mod output;
mod views;

use cli::{
    Cli, CommandContext, Commands, FacilityCommands, GlobalOptions, OrgCommands, UserCommands,
};
use error::{Error, Result};
use views::{Organizations, Users};

fn main() {
    CompleteEnv::with_factory(Cli::command).complete();

    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(Error::from)
        .and_then(|runtime| runtime.block_on(run()));

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `--debug` wins over `RUST_LOG`; otherwise the environment decides.
fn logger(env: Env<'_>, debug: bool) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(env);
    if debug {
        builder.parse_filters("debug");
    }
    builder.format_timestamp(None);
    builder
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    logger(Env::default().default_filter_or("warn"), cli.debug).init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Completion { shell } => {
            cli::completions::generate(shell);
            Ok(())
        }
        Commands::Org(cmd) => {
            let ctx = CommandContext::new(&opts)?;
            match cmd {
                OrgCommands::List { page } => cli::org::list(&ctx, page.page).await,
                OrgCommands::Get { id } => cli::org::get(&ctx, &id).await,
                OrgCommands::Create {
                    name,
                    facilities,
                    pcc_org_id,
                    pcc_org_uuid,
                } => {
                    cli::org::create(
                        &ctx,
                        &name,
                        &facilities,
                        pcc_org_id.as_deref(),
                        pcc_org_uuid.as_deref(),
                    )
                    .await
                }
                OrgCommands::Edit {
                    id,
                    name,
                    add_facilities,
                    remove_facilities,
                } => {
                    cli::org::edit(
                        &ctx,
                        &id,
                        name.as_deref(),
                        &add_facilities,
                        &remove_facilities,
                    )
                    .await
                }
                OrgCommands::Delete { id, yes } => cli::org::delete(&ctx, &id, yes).await,
                OrgCommands::Browse { page } => {
                    cli::browse::run(&ctx, Organizations, page.page).await
                }
            }
        }
        Commands::User(cmd) => {
            let ctx = CommandContext::new(&opts)?;
            match cmd {
                UserCommands::List { page } => cli::user::list(&ctx, page.page).await,
                UserCommands::Get { id } => cli::user::get(&ctx, &id).await,
                UserCommands::Create { email, facility } => {
                    cli::user::create(&ctx, &email, facility).await
                }
                UserCommands::Edit {
                    id,
                    email,
                    add_facilities,
                    remove_facilities,
                } => {
                    cli::user::edit(
                        &ctx,
                        &id,
                        email.as_deref(),
                        &add_facilities,
                        &remove_facilities,
                    )
                    .await
                }
                UserCommands::Delete { id, yes } => cli::user::delete(&ctx, &id, yes).await,
                UserCommands::Browse { page } => cli::browse::run(&ctx, Users, page.page).await,
            }
        }
        Commands::Facility(FacilityCommands::List) => {
            let ctx = CommandContext::new(&opts)?;
            cli::facility::list(&ctx).await
        }
    }
}
