use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use cric_core::{ScorerConfig, SnapshotFormat};

#[derive(Parser, Debug)]
#[command(name = "cricscore")]
#[command(about = "Ball-by-ball cricket innings scorer", version, long_about = None)]
pub struct Cli {
    /// Directory holding the saved match
    #[arg(long)]
    pub save_dir: Option<PathBuf>,

    /// Storage slot of the active match
    #[arg(long)]
    pub key: Option<String>,

    /// Snapshot encoding
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Reject malformed run entries instead of scoring them as 0
    #[arg(long, default_value = "false")]
    pub strict_runs: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Json,
    Packed,
}

impl From<FormatArg> for SnapshotFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => SnapshotFormat::Json,
            FormatArg::Packed => SnapshotFormat::Packed,
        }
    }
}

impl Cli {
    /// Flags given on the command line win over the loaded config.
    pub fn apply_to(&self, config: &mut ScorerConfig) {
        if let Some(dir) = &self.save_dir {
            config.save_dir = dir.clone();
        }
        if let Some(key) = &self.key {
            config.storage_key = key.clone();
        }
        if let Some(format) = self.format {
            config.format = format.into();
        }
        if self.strict_runs {
            config.strict_runs = true;
        }
    }
}
