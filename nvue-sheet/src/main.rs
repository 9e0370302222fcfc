use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use config_tree::parse_file;
use nvue_sheet::report::{build_report, Report};
use nvue_sheet::settings::{default_settings, load_settings, Settings};
use nvue_sheet::sink::{JsonSink, TableSink, XlsxSink};
use nvue_sheet::summary;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod path_guard;

use cli::{Cli, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "nvue_sheet=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let settings = resolve_settings(&cli)?;

    if !cli.input.is_file() {
        bail!("input file not found: {}", cli.input.display());
    }
    let tree = parse_file(&cli.input)
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;
    let report = build_report(&tree, &settings);

    match cli.format {
        OutputFormat::Json => {
            let mut sink = JsonSink::new(io::stdout().lock());
            sink.write_tables(&report.tables)
                .context("failed to write JSON tables")?;
            if cli.summary {
                eprintln!("{}", summary::render(summary::summarize(&report.tables)));
            }
        }
        OutputFormat::Xlsx => {
            let path = output_path(&cli, &report);
            path_guard::ensure_output_not_same(&path, &cli.input)?;
            let mut sink = XlsxSink::new(&path);
            sink.write_tables(&report.tables)
                .with_context(|| format!("failed to write workbook {}", path.display()))?;
            info!(path = %path.display(), "workbook written");
            println!("wrote {}", path.display());
            if cli.summary {
                println!("{}", summary::render(summary::summarize(&report.tables)));
            }
        }
    }

    Ok(())
}

fn resolve_settings(cli: &Cli) -> Result<Settings> {
    match &cli.settings {
        Some(path) => load_settings(path)
            .with_context(|| format!("failed to load settings {}", path.display())),
        None => Ok(default_settings()),
    }
}

fn output_path(cli: &Cli, report: &Report) -> PathBuf {
    if let Some(path) = &cli.output {
        return path.clone();
    }
    match &cli.output_dir {
        Some(dir) => dir.join(&report.artifact_name),
        None => PathBuf::from(&report.artifact_name),
    }
}
