//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

use completions::{facility_id_candidates, org_id_candidates, user_id_candidates};

pub mod args;
pub mod browse;
pub mod completions;
pub mod context;
pub mod entity;
pub mod facility;
pub mod init;
pub mod org;
pub mod status;
pub mod user;

pub use args::{GlobalOptions, OutputFormat, PageArgs};
pub use context::CommandContext;

use crate::client::models::EntityId;

/// orgdash - Terminal admin dashboard for organizations, facilities and users
#[derive(Parser, Debug)]
#[command(name = "orgdash")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "ORGDASH_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "ORGDASH_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Dashboard API base URL (overrides config file)
    #[arg(long, global = true, env = "ORGDASH_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "ORGDASH_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize orgdash configuration
    Init,

    /// Show configuration status
    Status,

    /// Manage organizations and their facilities
    #[command(subcommand)]
    Org(OrgCommands),

    /// Manage users and their facility assignments
    #[command(subcommand)]
    User(UserCommands),

    /// Browse the facility catalogue
    #[command(subcommand)]
    Facility(FacilityCommands),

    /// Generate shell completions (static)
    #[command(after_help = "\
Static completions (subcommands/flags only):
  bash:   orgdash completion bash > /etc/bash_completion.d/orgdash
  zsh:    orgdash completion zsh > \"${fpath[1]}/_orgdash\"
  fish:   orgdash completion fish > ~/.config/fish/completions/orgdash.fish

Dynamic completions (includes organization, user and facility IDs via API):
  bash:   echo 'source <(COMPLETE=bash orgdash)' >> ~/.bashrc
  zsh:    echo 'source <(COMPLETE=zsh orgdash)' >> ~/.zshrc
  fish:   echo 'COMPLETE=fish orgdash | source' >> ~/.config/fish/config.fish")]
    Completion {
        /// Shell to generate completions for (static only)
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Organization subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// List one page of organizations
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Show an organization with its facilities
    #[command(visible_alias = "g")]
    Get {
        /// Organization ID
        #[arg(add = org_id_candidates())]
        id: String,
    },

    /// Create an organization
    #[command(after_help = "EXAMPLES:\n  \
            orgdash org create --name Sunrise --facility \"Clinic A\"\n  \
            orgdash org create --name Sunrise -f \"Clinic A\" -f \"Clinic B\"\n  \
            orgdash org create --name Sunrise -f \"Clinic A\" --pcc-org-id 42 --pcc-org-uuid <UUID>")]
    Create {
        /// Organization name (at most 23 characters)
        #[arg(long)]
        name: String,

        /// Facility name; repeat for several facilities
        #[arg(long = "facility", short = 'f')]
        facilities: Vec<String>,

        /// External-system organization ID (requires --pcc-org-uuid)
        #[arg(long)]
        pcc_org_id: Option<String>,

        /// External-system organization UUID (requires --pcc-org-id)
        #[arg(long)]
        pcc_org_uuid: Option<String>,
    },

    /// Edit an organization's name and facilities
    #[command(after_help = "EXAMPLES:\n  \
            orgdash org edit 5 --name \"Sunrise Care\"\n  \
            orgdash org edit 5 --add-facility \"Clinic C\" --remove-facility 9")]
    Edit {
        /// Organization ID
        #[arg(add = org_id_candidates())]
        id: String,

        /// New organization name
        #[arg(long)]
        name: Option<String>,

        /// Add a facility by name; repeatable
        #[arg(long = "add-facility")]
        add_facilities: Vec<String>,

        /// Remove a facility by ID; repeatable
        #[arg(long = "remove-facility", add = facility_id_candidates())]
        remove_facilities: Vec<EntityId>,
    },

    /// Delete an organization
    Delete {
        /// Organization ID
        #[arg(add = org_id_candidates())]
        id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Interactive organization screen
    Browse {
        #[command(flatten)]
        page: PageArgs,
    },
}

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List one page of users
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Show a user with their facilities
    #[command(visible_alias = "g")]
    Get {
        /// User ID
        #[arg(add = user_id_candidates())]
        id: String,
    },

    /// Create a user assigned to one facility
    #[command(after_help = "EXAMPLES:\n  \
            orgdash user create --email alice@example.com --facility 9")]
    Create {
        /// Email address
        #[arg(long)]
        email: String,

        /// Facility ID
        #[arg(long, short = 'f', add = facility_id_candidates())]
        facility: Option<EntityId>,
    },

    /// Edit a user's email and facility assignments
    #[command(after_help = "EXAMPLES:\n  \
            orgdash user edit 3 --email bob@example.com\n  \
            orgdash user edit 3 --add-facility 10 --remove-facility 9")]
    Edit {
        /// User ID
        #[arg(add = user_id_candidates())]
        id: String,

        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// Assign a facility by ID; repeatable
        #[arg(long = "add-facility", add = facility_id_candidates())]
        add_facilities: Vec<EntityId>,

        /// Unassign a facility by ID; repeatable
        #[arg(long = "remove-facility", add = facility_id_candidates())]
        remove_facilities: Vec<EntityId>,
    },

    /// Delete a user
    Delete {
        /// User ID
        #[arg(add = user_id_candidates())]
        id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Interactive user screen
    Browse {
        #[command(flatten)]
        page: PageArgs,
    },
}

/// Facility subcommands
#[derive(Subcommand, Debug)]
pub enum FacilityCommands {
    /// List every facility
    #[command(visible_alias = "ls")]
    List,
}
