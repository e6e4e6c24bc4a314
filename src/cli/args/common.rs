//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - cards and detail screens (global default)
    #[default]
    Pretty,
    /// Table format - one row per entity
    Table,
    /// JSON format - structured for scripts
    Json,
}
