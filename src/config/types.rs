use crate::catalog::TargetKind;
use clap::Args;
use serde::{Deserialize, Serialize};

/// Raw configuration input - all fields Optional for merging
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigInput {
    pub database: Option<DatabaseInput>,
    pub statements: Option<StatementsInput>,
}

/// Resolved configuration with all defaults applied
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub database: Database,
    pub statements: Statements,
}

// Database configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseInput {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Database {
    pub url: Option<String>,
}

// Statement rendering configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StatementsInput {
    pub default_kind: Option<TargetKind>,
    pub strict_identifiers: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct Statements {
    /// Kind assumed when a grant or revoke does not name one
    pub default_kind: TargetKind,
    /// Reject role and owner tokens that are not plain identifiers
    pub strict_identifiers: bool,
}

// CLI argument groups for command-specific options
#[derive(Debug, Clone, Default, Args)]
pub struct DatabaseArgs {
    #[arg(long, help = "Database URL to execute statements against")]
    pub database_url: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct StatementArgs {
    #[arg(long, help = "Allow role and owner names that are not plain identifiers")]
    pub no_strict_identifiers: bool,
}

// Conversion functions from CLI args to config input
impl From<DatabaseArgs> for DatabaseInput {
    fn from(args: DatabaseArgs) -> Self {
        Self {
            url: args.database_url,
        }
    }
}

impl From<StatementArgs> for StatementsInput {
    fn from(args: StatementArgs) -> Self {
        Self {
            default_kind: None, // Default kind comes from file only
            strict_identifiers: if args.no_strict_identifiers {
                Some(false)
            } else {
                None
            },
        }
    }
}
