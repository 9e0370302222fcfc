use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "nvue-sheet")]
#[command(about = "Build spreadsheet review reports from a Cumulus NVUE configuration export")]
pub struct Cli {
    /// NVUE configuration export (`nv config show -o yaml`).
    pub input: PathBuf,
    /// Workbook path. Defaults to `<hostname>.xlsx` in the output directory.
    #[arg(short, long, conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,
    /// Directory for the generated workbook.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Xlsx)]
    pub format: OutputFormat,
    /// Optional settings TOML (management VRF, fallback workbook name).
    #[arg(long)]
    pub settings: Option<PathBuf>,
    /// Print per-sheet row counts.
    #[arg(long)]
    pub summary: bool,
    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Excel workbook, one sheet per table.
    Xlsx,
    /// Tables as JSON on stdout.
    Json,
}
