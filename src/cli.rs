use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cap-table sidebar - derive holder groups and round participation, replay drags
#[derive(Parser)]
#[command(name = "captable-sidebar")]
#[command(about = "Inspect a cap-table sidebar snapshot and replay drag gestures against it")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print holder groups and per-round participation
    Show {
        /// Path to the snapshot JSON file
        snapshot: PathBuf,

        /// Host gate for the preview trigger (reported, never computed)
        #[arg(long)]
        can_preview: bool,
    },
    /// Validate a snapshot file
    Validate {
        /// Path to the snapshot JSON file
        snapshot: PathBuf,
    },
    /// Dispatch one completed drag gesture against a snapshot
    Drag {
        /// Path to the snapshot JSON file
        snapshot: PathBuf,

        /// Drag source id (e.g. sidebar-round-0, holder-Alice)
        #[arg(short, long)]
        source: String,

        /// Drop target id (e.g. sidebar-round-2, group-Founders); omit for a cancelled drag
        #[arg(short, long)]
        target: Option<String>,

        /// Apply the resulting intent and write the snapshot back
        #[arg(short, long)]
        write: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
