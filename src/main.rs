use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;
use pgddl::constants::CONFIG_FILENAME;
use pgddl::migration::MigrationStep;
use pgddl::{commands, config};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = CONFIG_FILENAME, global = true)]
    config_file: String,

    /// Enable verbose output (info level)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Suppress all non-essential output (error level only)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug output (debug level)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by the single-statement commands
#[derive(Args, Debug, Clone)]
struct ExecutionArgs {
    /// Execute the statement instead of printing it
    #[arg(long)]
    execute: bool,

    #[command(flatten)]
    database_args: config::DatabaseArgs,

    #[command(flatten)]
    statement_args: config::StatementArgs,
}

#[derive(Args, Debug)]
struct PrivilegeArgs {
    /// Object the privileges apply to (may be schema-qualified, e.g. public.users)
    target: String,

    /// Role receiving or losing the privileges
    role: String,

    /// Object kind: table, schema, sequence, function, language, tablespace, type
    #[arg(long)]
    kind: Option<String>,

    /// ALL or a comma separated list, e.g. SELECT,INSERT
    #[arg(long, default_value = "ALL")]
    privileges: String,

    #[command(flatten)]
    execution: ExecutionArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a schema if it does not exist
    CreateSchema {
        name: String,

        /// Role that will own the schema
        #[arg(long)]
        owner: Option<String>,

        #[command(flatten)]
        execution: ExecutionArgs,
    },

    /// Drop a schema if it exists
    DropSchema {
        name: String,

        /// Also drop every object in the schema
        #[arg(long)]
        cascade: bool,

        #[command(flatten)]
        execution: ExecutionArgs,
    },

    /// Grant privileges on an object to a role
    Grant(PrivilegeArgs),

    /// Revoke privileges on an object from a role
    Revoke(PrivilegeArgs),

    /// Apply a YAML plan of schema and privilege steps
    Apply {
        /// Plan file with a `steps:` list
        plan: PathBuf,

        /// Print the statements without executing them
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        database_args: config::DatabaseArgs,

        #[command(flatten)]
        statement_args: config::StatementArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    initialize_logging(&cli);
    run_main(cli).await
}

fn initialize_logging(cli: &Cli) {
    let level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn" // default level
    };

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(
    file_config: config::ConfigInput,
    database_args: &config::DatabaseArgs,
    statement_args: &config::StatementArgs,
) -> Result<config::Config> {
    let cli_config = config::ConfigInput {
        database: Some(database_args.clone().into()),
        statements: Some(statement_args.clone().into()),
    };

    config::ConfigBuilder::new()
        .with_file(file_config)
        .with_cli_args(cli_config)
        .resolve()
}

fn privilege_step(args: PrivilegeArgs, grant: bool) -> (MigrationStep, ExecutionArgs) {
    let PrivilegeArgs {
        target,
        role,
        kind,
        privileges,
        execution,
    } = args;

    let step = if grant {
        MigrationStep::Grant {
            target,
            role,
            kind,
            privileges,
        }
    } else {
        MigrationStep::Revoke {
            target,
            role,
            kind,
            privileges,
        }
    };
    (step, execution)
}

async fn run_main(cli: Cli) -> Result<()> {
    let file_config = config::load_config(&cli.config_file)?;

    let (step, execution) = match cli.command {
        Commands::Apply {
            plan,
            dry_run,
            database_args,
            statement_args,
        } => {
            let config = resolve_config(file_config, &database_args, &statement_args)?;
            info!("Applying migration plan");
            return commands::cmd_apply(&config, &plan, dry_run).await;
        }
        Commands::CreateSchema {
            name,
            owner,
            execution,
        } => (MigrationStep::CreateSchema { name, owner }, execution),
        Commands::DropSchema {
            name,
            cascade,
            execution,
        } => (MigrationStep::DropSchema { name, cascade }, execution),
        Commands::Grant(args) => privilege_step(args, true),
        Commands::Revoke(args) => privilege_step(args, false),
    };

    let config = resolve_config(
        file_config,
        &execution.database_args,
        &execution.statement_args,
    )?;
    commands::cmd_statement(&config, step, execution.execute).await
}
