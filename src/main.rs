use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use floatfx::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for floatfx::AppCommand {
    fn from(cmd: Commands) -> floatfx::AppCommand {
        match cmd {
            Commands::List => floatfx::AppCommand::List,
            Commands::Check { code } => floatfx::AppCommand::Check(code),
            Commands::Rate { from, to } => floatfx::AppCommand::Rate { from, to },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List known currencies
    List,
    /// Check whether a currency code is known
    Check {
        /// ISO 4217 alpha code, any case
        code: String,
    },
    /// Show the exchange rate between two currencies
    Rate {
        /// Source currency code
        from: String,
        /// Target currency code
        to: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => floatfx::cli::setup::setup(),
        Some(cmd) => floatfx::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
