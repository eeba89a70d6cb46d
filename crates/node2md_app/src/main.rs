//! node2md: export published CMS content to per-author Markdown files.

mod config;
mod progress;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use node2md_core::{Html2MdConverter, Pipeline};
use node2md_engine::{Exporter, SqliteSource};
use node2md_logging::{
    export_error, export_warn, LevelFilter, LogDestination, DEFAULT_LOG_FILE,
};

use crate::config::{ExportConfig, Overrides};
use crate::progress::ConsoleProgressSink;

#[derive(Parser)]
#[command(name = "node2md")]
#[command(version, about = "Export published CMS nodes to Markdown with YAML front matter")]
#[command(after_help = "EXAMPLES:
    node2md --database cms.sqlite --site-url https://example.com
    node2md --config node2md.ron --output site/content
    node2md --database cms.sqlite --print-config > node2md.ron")]
struct Cli {
    /// RON config file (default: ./node2md.ron when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// SQLite copy of the content database
    #[arg(short, long, value_name = "PATH")]
    database: Option<PathBuf>,

    /// Public site URL whose /files/ links are made relative
    #[arg(short, long, value_name = "URL")]
    site_url: Option<String>,

    /// Output directory for the Markdown tree
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Do not write the asset manifest
    #[arg(long)]
    no_manifest: bool,

    /// Skip nodes that fail instead of aborting the export
    #[arg(long)]
    skip_failed: bool,

    /// Also write the log to a file (default name when given without a value)
    #[arg(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = DEFAULT_LOG_FILE
    )]
    log_file: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print the effective configuration as RON and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn overrides(&self) -> Overrides {
        Overrides {
            database: self.database.clone(),
            site_url: self.site_url.clone(),
            output_dir: self.output.clone(),
            no_manifest: self.no_manifest,
            skip_failed: self.skip_failed,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let destination = match &cli.log_file {
        Some(path) => LogDestination::Both(path.clone()),
        None => LogDestination::Terminal,
    };
    node2md_logging::initialize(destination, cli.log_level());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            export_error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = ExportConfig::load(cli.config.as_deref())?;
    config.apply(cli.overrides());

    if cli.print_config {
        println!("{}", config.to_ron()?);
        return Ok(());
    }

    let config = config.validate()?;
    if config.site_url.is_empty() {
        export_warn!("no site_url configured; absolute /files/ links stay untouched");
    }

    let database = config
        .database
        .as_deref()
        .context("no database configured")?;
    let source = SqliteSource::open(database)
        .with_context(|| format!("failed to open database {}", database.display()))?;

    let pipeline = Pipeline::with_parts(config.rewriter(), Html2MdConverter, &config.site_url);
    let exporter = Exporter::new(pipeline, config.export_options());
    let sink = ConsoleProgressSink::new(cli.quiet);

    let summary = exporter.run(&source, &sink).context("export failed")?;

    if !cli.quiet {
        println!(
            "Exported {} documents to {} ({} skipped, {} overwritten by title collisions)",
            summary.written,
            summary.output_dir.display(),
            summary.skipped,
            summary.collisions
        );
        if let Some(manifest) = &summary.manifest_path {
            println!("Asset manifest: {}", manifest.display());
        }
    }
    Ok(())
}
