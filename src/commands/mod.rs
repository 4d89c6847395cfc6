//! Command-line interface.
//!
//! Each subcommand lives in its own module with a `cmd` entry point;
//! [`Cli::menu`] parses arguments and dispatches.

pub mod init;
pub mod pause;
pub mod start;
pub mod status;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure interval durations and storage")]
    Init(init::InitArgs),
    #[command(about = "Start or resume the current interval")]
    Start,
    #[command(about = "Pause the running interval")]
    Pause,
    #[command(about = "Show the current interval")]
    Status,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Start => start::cmd().await,
            Commands::Pause => pause::cmd(),
            Commands::Status => status::cmd(),
        }
    }
}
