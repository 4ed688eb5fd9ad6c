use clap::Parser;
use std::path::PathBuf;

/// Link roster members to their per-person storage folders.
#[derive(Parser, Debug, Clone)]
#[command(name = "roster-reconcile", version, about)]
pub struct Cli {
    /// Settings file (database URL and section roots).
    #[arg(short, long, env = "ROSTER_SETTINGS", default_value = "settings.json")]
    pub config: PathBuf,

    /// Read the storage tree from an exported JSON node listing instead of
    /// walking the section roots on disk.
    #[arg(long)]
    pub tree: Option<PathBuf>,

    /// Compute and report, but write nothing.
    #[arg(long)]
    pub dry_run: bool,

    /// Re-evaluate and overwrite members that already have a folder.
    #[arg(long)]
    pub force: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}
