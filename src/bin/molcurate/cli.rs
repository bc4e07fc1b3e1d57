use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, ValueEnum};

pub const DEFAULT_SOURCE: &str = "molecule-game-web/data/preliminaryDB";
pub const DEFAULT_STORE: &str = "molecule-game-web/data/DB";
pub const DEFAULT_MANIFEST: &str = "molecule-game-web/data/molecules.json";

#[derive(Parser)]
#[command(
    name = "molcurate",
    about = "Curate a size-diverse molecule puzzle dataset from MOL2 files",
    version,
    author,
    before_help = crate::display::banner_for_help()
)]
pub struct Cli {
    /// Minimum atom count for admitted molecules (non-integers fall back to the default).
    /// Values starting with `-` other than negative numbers need a preceding `--`.
    #[arg(value_name = "MIN_ATOMS", allow_negative_numbers = true)]
    pub min_atoms: Option<String>,

    #[command(flatten)]
    pub paths: PathOptions,

    #[command(flatten)]
    pub curation: CurationOptions,

    #[command(flatten)]
    pub output: OutputOptions,
}

/// Locations of the source pool and dataset outputs.
#[derive(Args)]
#[command(next_help_heading = "Locations")]
pub struct PathOptions {
    /// Directory of candidate .mol2 files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Directory receiving copies of every referenced file
    #[arg(long, value_name = "DIR", default_value = DEFAULT_STORE)]
    pub store: PathBuf,

    /// Path of the JSON dataset manifest
    #[arg(long, value_name = "FILE", default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,
}

/// Curation tuning; unset values come from --config or built-in defaults.
#[derive(Args)]
#[command(next_help_heading = "Curation")]
pub struct CurationOptions {
    /// Curation settings (TOML file)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maximum number of levels to build [default: 120]
    #[arg(long = "levels", value_name = "N")]
    pub level_count: Option<usize>,

    /// Number of size-diverse representatives to select [default: 120]
    #[arg(long = "representatives", value_name = "N")]
    pub representative_count: Option<usize>,

    /// Base size window as a fraction of the target atom count [default: 0.2]
    #[arg(long, value_name = "FRACTION")]
    pub threshold: Option<f64>,

    /// Molecules the levels are drawn from [default: all]
    #[arg(long, value_name = "POOL")]
    pub pool: Option<LevelPool>,
}

#[derive(Args)]
#[command(next_help_heading = "Output")]
pub struct OutputOptions {
    /// Curate and report without writing the manifest or copying files
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LevelPool {
    /// Every admitted molecule
    All,
    /// Only the size-diverse representative selection
    #[value(alias = "reps")]
    Representatives,
}

impl From<LevelPool> for molcurate::LevelPool {
    fn from(pool: LevelPool) -> Self {
        match pool {
            LevelPool::All => molcurate::LevelPool::All,
            LevelPool::Representatives => molcurate::LevelPool::Representatives,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
