//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `unused`: Report lang-file keys never referenced in the source tree
//! - `repair`: Comment out unused entries in the lang file
//! - `sync`: Merge missing entries from a source lang file into a target

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Command,
}

impl Arguments {
    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Command::Unused(cmd) => cmd.common.verbose,
            Command::Repair(cmd) => cmd.common.verbose,
            Command::Sync(cmd) => cmd.common.verbose,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct UnusedArgs {
    /// Project root folder to scan for key usages
    #[arg(short, long)]
    pub root: PathBuf,

    /// Lang file to check, relative to the root
    #[arg(short = 'f', long)]
    pub lang_file: PathBuf,

    /// Return a non-zero exit code when unused keys exist
    #[arg(long)]
    pub fail_unused: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RepairArgs {
    /// Project root folder to scan for key usages
    #[arg(short, long)]
    pub root: PathBuf,

    /// Lang file to repair, relative to the root
    #[arg(short = 'f', long)]
    pub lang_file: PathBuf,

    /// Output path for the repaired lang file
    #[arg(short, long)]
    pub out_file: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Lang file supplying the complete entry set
    #[arg(short, long)]
    pub source: PathBuf,

    /// Lang file to fill with missing entries
    #[arg(short, long)]
    pub target: PathBuf,

    /// Output path for the merged lang file
    #[arg(short, long)]
    pub out_file: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check for unused keys in the lang file
    Unused(UnusedArgs),
    /// Comment out unused keys in the lang file
    Repair(RepairArgs),
    /// Sync missing entries from a source lang file into a target
    Sync(SyncArgs),
}
