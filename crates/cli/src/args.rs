// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};
use mlscaffold_engine::layout::ProjectName;

use crate::options::ReportFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "mlscaffold",
    version = crate::VERSION,
    about = "Scaffold and tear down the ML project template layout"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the template directories and files (idempotent)
    Create(OpArgs),
    /// Remove the template files and the directories they emptied
    Clean(OpArgs),
}

impl Command {
    pub fn op_args(&self) -> &OpArgs {
        match self {
            Self::Create(a) | Self::Clean(a) => a,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct OpArgs {
    /// Directory the layout is materialized under
    #[arg(long, default_value = ".", value_hint = ValueHint::DirPath)]
    pub root: PathBuf,

    /// Project package name used under src/
    #[arg(long, default_value = "cnn_classifier")]
    pub name: ProjectName,

    /// Report format
    #[arg(long, value_enum, default_value = "table")]
    pub format: ReportFormat,

    /// Stop at the first path error and exit nonzero
    #[arg(long)]
    pub strict: bool,

    /// Log directory (defaults to <root>/logs)
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub log_dir: Option<PathBuf>,

    /// Suppress the console log mirror (the log file is still written)
    #[arg(short, long)]
    pub quiet: bool,
}

impl OpArgs {
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| self.root.join("logs"))
    }
}
