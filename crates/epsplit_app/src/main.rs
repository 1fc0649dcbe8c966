//! epsplit - split a multi-episode Matroska file into per-episode
//! files, deriving episode boundaries from chapter durations.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use epsplit_core::chapters;
use epsplit_core::config::SplitConfig;
use epsplit_core::episodes::classify_main_content;
use epsplit_core::split::SplitOrchestrator;

#[derive(Parser)]
#[command(
    name = "epsplit",
    version,
    about = "Split a combined MKV file into per-episode files using chapter durations"
)]
struct Cli {
    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a combined MKV file into multiple episodes
    Split(SplitArgs),

    /// Print chapters extracted from an MKV file
    PrintChapters(PrintChaptersArgs),
}

#[derive(Args)]
struct SplitArgs {
    /// Input video file
    #[arg(short, long)]
    input: PathBuf,

    /// Duration threshold (seconds) for main episode chapters [default: 360]
    #[arg(short = 't', long)]
    episode_chapter_threshold: Option<f64>,

    /// Number of chapters to include after an episode boundary [default: 2]
    #[arg(short = 'a', long)]
    additional_chapters: Option<usize>,

    /// Reserved: chapter at which to start processing episodes [default: 1]
    #[arg(short = 'c', long)]
    start_chapter: Option<usize>,

    /// Season number for output file names [default: 1]
    #[arg(short = 's', long)]
    season_num: Option<u32>,

    /// Starting episode number [default: 1]
    #[arg(short = 'e', long)]
    start_episode_num: Option<u32>,

    /// Name of the series, used in output file names
    #[arg(short = 'n', long)]
    series_name: Option<String>,

    /// TOML config file supplying defaults for the flags above
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct PrintChaptersArgs {
    /// Input video file
    #[arg(short, long)]
    input: PathBuf,

    /// Duration threshold (seconds) for main episode chapters
    #[arg(short = 't', long, default_value_t = 360.0)]
    episode_chapter_threshold: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Split(args) => run_split(args),
        Commands::PrintChapters(args) => run_print_chapters(args),
    }
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

/// Layer CLI flags over the config file (or built-in defaults).
fn resolve_config(args: &SplitArgs) -> Result<SplitConfig> {
    let mut config = match &args.config {
        Some(path) => SplitConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SplitConfig::default(),
    };

    if let Some(value) = args.episode_chapter_threshold {
        config.episode_chapter_threshold = value;
    }
    if let Some(value) = args.additional_chapters {
        config.additional_chapters = value;
    }
    if let Some(value) = args.start_chapter {
        config.start_chapter = value;
    }
    if let Some(value) = args.season_num {
        config.season_num = value;
    }
    if let Some(value) = args.start_episode_num {
        config.start_episode_num = value;
    }
    if let Some(ref value) = args.series_name {
        config.series_name = value.clone();
    }

    if config.series_name.is_empty() {
        bail!("a series name is required: pass --series-name or set series_name in the config file");
    }

    Ok(config)
}

fn run_split(args: SplitArgs) -> Result<()> {
    let config = resolve_config(&args)?;

    let orchestrator = SplitOrchestrator::new(config).with_command_hook(Box::new(|tool, tokens| {
        println!("$ {} {}", tool, tokens.join(" "));
    }));

    let outputs = orchestrator.run(&args.input)?;
    if outputs.is_empty() {
        println!("No episode boundaries detected; nothing to split.");
        return Ok(());
    }

    for path in &outputs {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn run_print_chapters(args: PrintChaptersArgs) -> Result<()> {
    let doc = chapters::extract_chapters(&args.input)?;
    let is_main = classify_main_content(&doc, args.episode_chapter_threshold)?;

    println!(
        "{:>3}  {:>12}  {:>14}  {:>14}  {:>10}  {:<6}  {}",
        "#", "UID", "start", "end", "secs", "class", "label"
    );
    for (index, chapter) in doc.iter().enumerate() {
        let duration = chapter.duration_seconds()?;
        println!(
            "{:>3}  {:>12}  {:>14}  {:>14}  {:>10.3}  {:<6}  {}",
            index,
            chapter.uid,
            chapter.start,
            chapter.end,
            duration,
            if is_main[index] { "main" } else { "filler" },
            chapter.display.string
        );
    }
    Ok(())
}
