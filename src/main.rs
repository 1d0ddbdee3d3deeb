//! maestera - musician onboarding forms
//!
//! CLI binary: runs the submission proxy and checks or submits form drafts.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use maestera::types::FormPart;
use std::net::SocketAddr;
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "maestera")]
#[command(about = "Musician onboarding forms and spreadsheet submission proxy")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the submission proxy
    Serve {
        /// Address to listen on (overrides MAESTERA_BIND)
        #[arg(long)]
        bind: Option<SocketAddr>,

        /// Upstream timeout in seconds (overrides MAESTERA_UPSTREAM_TIMEOUT_SECS)
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// Validate a draft file step by step
    Check {
        /// JSON file holding the draft
        file: PathBuf,

        /// Which form the draft belongs to
        #[arg(long, value_enum, default_value_t = PartArg::Onboarding)]
        part: PartArg,
    },

    /// Validate a draft file and submit it upstream
    Submit {
        /// JSON file holding the draft
        file: PathBuf,

        /// Which form the draft belongs to
        #[arg(long, value_enum, default_value_t = PartArg::Onboarding)]
        part: PartArg,

        /// Dry run - print the payload instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PartArg {
    /// Profile and preferences
    Onboarding,
    /// Instrument listing
    Instruments,
}

impl From<PartArg> for FormPart {
    fn from(arg: PartArg) -> Self {
        match arg {
            PartArg::Onboarding => Self::Onboarding,
            PartArg::Instruments => Self::Instruments,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_tracing()?;

    match cli.command {
        Commands::Serve { bind, timeout_secs } => {
            cli::run_serve(bind, timeout_secs).await?;
        }
        Commands::Check { file, part } => {
            cli::run_check(&file, part.into())?;
        }
        Commands::Submit {
            file,
            part,
            dry_run,
        } => {
            cli::run_submit(&file, part.into(), dry_run).await?;
        }
    }

    Ok(())
}
