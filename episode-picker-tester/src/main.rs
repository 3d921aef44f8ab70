mod common;
mod logic;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use common::split_csv;
use logic::{DistributionResult, build_filters, load_catalog, resolve_seed_inputs, run_distribution};

#[derive(Debug, Parser)]
#[command(name = "episode-picker-tester", version = "0.1.0")]
#[command(about = "Checks episode picker filters and sampling frequencies over seeded sweeps")]
struct Args {
    /// Catalog JSON to sample from (defaults to the bundled catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Seeds to run (comma-separated, decimal or 0x-hex)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of picks per seed
    #[arg(long, default_value_t = 20_000)]
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    iterations: u64,

    /// Keep only episodes featuring Michael Scott
    #[arg(long)]
    only_michael: bool,

    /// Seasonal tags to exclude (comma-separated: christmas,halloween,valentines)
    #[arg(long, default_value = "")]
    exclude: String,

    /// Sample proportionally to rating squared
    #[arg(long)]
    weighted: bool,

    /// Largest allowed absolute gap between observed and expected frequency
    #[arg(long, default_value_t = 0.01)]
    tolerance: f64,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    // Structured reports own stdout.
    let console = args.report == "console";
    if console {
        announce_banner();
    }

    let start_time = Instant::now();
    let iterations =
        usize::try_from(args.iterations).context("iteration count exceeds platform limits")?;
    let catalog = load_catalog(args.catalog.as_deref())?;
    let filters = build_filters(args.only_michael, &split_csv(&args.exclude), args.weighted)?;
    let seeds = resolve_seed_inputs(&split_csv(&args.seeds))?;

    if console {
        println!(
            "Sampling {} episodes, {iterations} iterations x {} seeds",
            catalog.len(),
            seeds.len()
        );
    }

    let results: Vec<DistributionResult> = seeds
        .iter()
        .map(|&seed| {
            run_distribution(
                catalog.episodes(),
                &filters,
                seed,
                iterations,
                args.tolerance,
            )
        })
        .collect();

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn announce_banner() {
    println!("{}", "📺 Episode Picker Distribution Tester".bright_cyan().bold());
    println!("{}", "=====================================".cyan());
}

fn write_reports(args: &Args, results: &[DistributionResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => logic::reports::generate_json_report(&mut output_target, results)?,
        "markdown" => logic::reports::generate_markdown_report(&mut output_target, results)?,
        _ => logic::reports::generate_console_report(
            &mut output_target,
            results,
            start_time.elapsed(),
        )?,
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
