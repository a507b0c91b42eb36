use anyhow::{Context, Result};
use bigramstats::{
    Analyzer, AnalyzerConfig, FileLoader, GzFileLoader, InputFormat, Mode, ThresholdFraction,
    ZstdFileLoader,
};
use clap::Parser;
use log::{info, LevelFilter};
use std::{
    io::{stdout, BufWriter, Write},
    path::PathBuf,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `<bigram>\t<count>` file written by the counting job
    file: PathBuf,

    /// Only print the table in descending count order
    #[arg(long)]
    sort_only: bool,

    /// Share of all occurrences, in percent, the threshold type count has to reach
    #[arg(
        short,
        long,
        default_value_t = ThresholdFraction::DEFAULT_PERCENT,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    percent: u8,

    /// Input encoding (plain, gzip or zstd); guessed from the extension if omitted
    #[arg(short, long)]
    format: Option<InputFormat>,

    /// Log more; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(level_filter(args.verbose))
        .format_timestamp(None)
        .init();

    let fraction = ThresholdFraction::from_percent(args.percent)
        .context("percent must be between 0 and 100")?;
    let mode = if args.sort_only {
        Mode::SortOnly
    } else {
        Mode::Summary
    };
    let analyzer = Analyzer::new(AnalyzerConfig { mode, fraction });

    let format = args
        .format
        .unwrap_or_else(|| InputFormat::from_path(&args.file));
    info!("reading {} as {:?}", args.file.display(), format);

    // Collect and validate the whole table before anything is printed.
    let analysis = match format {
        InputFormat::Plain => analyzer.analyze(&FileLoader::new(&args.file)),
        InputFormat::Gzip => analyzer.analyze(&GzFileLoader::new(&args.file)),
        InputFormat::Zstd => analyzer.analyze(&ZstdFileLoader::new(&args.file)),
    }
    .with_context(|| format!("failed to analyze {}", args.file.display()))?;

    let mut out = BufWriter::new(stdout().lock());
    analysis.report().write_to(&mut out)?;
    out.flush()?;
    Ok(())
}
