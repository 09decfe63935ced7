mod config;
mod corpus;
mod files;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use config::{parse_layers, Settings};
use corpus::Report;
use lexis_protocol::{Layers, TaggedDocument};
use lexis_stats::Normalization;
use lexis_tagger::Tagger;
use log::{info, LevelFilter};

#[derive(Parser)]
#[command(author, version, about = "Tags POS-tagged English corpora with register features and counts them")]
struct Cli {
    /// Log level; overrides RUST_LOG
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<LevelFilter>,

    /// JSON settings file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Tag every *.txt file of a directory of POS-tagged text
    Tag(TagArgs),
    /// Count tagged files into feature tables
    Count(CountArgs),
    /// Tag into OUTPUT/Tagged, then count into OUTPUT/Statistics
    Run(RunArgs),
}

#[derive(Args)]
struct TagArgs {
    #[arg(short, long, value_name = "DIR")]
    input: PathBuf,

    #[arg(short, long, value_name = "DIR")]
    output: PathBuf,

    /// Directory of constituency trees, one file per input file, one tree per line
    #[arg(short, long, value_name = "DIR")]
    trees: Option<PathBuf>,

    /// Tag layers, e.g. "SIMPLE | EXTENDED"
    #[arg(short, long, value_name = "LAYERS", value_parser = parse_layers)]
    layers: Option<Layers>,

    /// Also write the tagged corpus as an rkyv archive
    #[arg(short, long, value_name = "FILE")]
    archive: Option<PathBuf>,
}

#[derive(Args)]
struct CountArgs {
    #[arg(short, long, value_name = "DIR")]
    input: PathBuf,

    #[arg(short, long, value_name = "DIR")]
    output: PathBuf,

    #[command(flatten)]
    tables: TableArgs,
}

#[derive(Args)]
struct TableArgs {
    /// Number of leading words for the type-token ratio
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    ttr: Option<u64>,

    /// Tables to write: raw, mixed, word-based
    #[arg(long, value_name = "MODES", value_delimiter = ',')]
    normalizations: Vec<Normalization>,
}

#[derive(Args)]
struct RunArgs {
    #[command(flatten)]
    tag: TagArgs,

    #[command(flatten)]
    tables: TableArgs,
}

fn init_logging(level: Option<LevelFilter>) {
    let mut logger = env_logger::Builder::from_default_env();
    match level {
        Some(level) => {
            logger.filter_level(level);
        }
        None if std::env::var_os("RUST_LOG").is_none() => {
            logger.filter_level(LevelFilter::Info);
        }
        None => {}
    }
    logger.init();
}

fn tag(args: &TagArgs, settings: &Settings, output: &Path) -> Result<Vec<TaggedDocument>> {
    let tagger = Tagger::new(args.layers.unwrap_or(settings.layers));
    info!("tagging {:?} into {:?} with {:?}", args.input, output, tagger.layers());
    let mut report = Report::default();
    let documents = corpus::tag_corpus(&tagger, &args.input, args.trees.as_deref(), output, &mut report)?;
    report.finish("tagged")?;
    if let Some(path) = &args.archive {
        corpus::write_archive(path, &documents)?;
    }
    Ok(documents)
}

fn count(documents: &[TaggedDocument], mut report: Report, args: &TableArgs, settings: &Settings, output: &Path) -> Result<()> {
    let ttr_window = match args.ttr {
        Some(n) => usize::try_from(n)?,
        None => settings.ttr_window,
    };
    let normalizations = if args.normalizations.is_empty() {
        &settings.normalizations
    } else {
        &args.normalizations
    };
    info!("counting {} documents into {:?}", documents.len(), output);
    let table = corpus::count_corpus(documents, ttr_window, &mut report);
    report.finish("counted")?;
    corpus::write_tables(&table, normalizations, output)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);
    let settings = Settings::load(cli.config.as_deref())?;

    match &cli.command {
        Command::Tag(args) => {
            tag(args, &settings, &args.output)?;
        }
        Command::Count(args) => {
            let mut report = Report::default();
            let documents = corpus::load_corpus(&args.input, &mut report)?;
            count(&documents, report, &args.tables, &settings, &args.output)?;
        }
        Command::Run(args) => {
            let documents = tag(&args.tag, &settings, &args.tag.output.join(&settings.tagged_dir))?;
            let statistics = args.tag.output.join(&settings.statistics_dir);
            count(&documents, Report::default(), &args.tables, &settings, &statistics)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_ttr_window_flag() {
        let cli = Cli::try_parse_from(["lexis", "count", "-i", "in", "-o", "out", "--ttr", "50"]).expect("parse");
        let Command::Count(args) = cli.command else {
            panic!("expected count");
        };
        assert_eq!(args.tables.ttr, Some(50));

        assert!(Cli::try_parse_from(["lexis", "count", "-i", "in", "-o", "out", "--ttr", "0"]).is_err());
        assert!(Cli::try_parse_from(["lexis", "count", "-i", "in", "-o", "out", "--ttr", "many"]).is_err());
    }

    #[test]
    fn test_run_flags() {
        let cli = Cli::try_parse_from([
            "lexis",
            "run",
            "-i",
            "in",
            "-o",
            "out",
            "--layers",
            "SIMPLE | EXTENDED",
            "--normalizations",
            "raw,word-based",
            "--log-level",
            "debug",
        ])
        .expect("parse");
        assert_eq!(cli.log_level, Some(LevelFilter::Debug));
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.tag.layers, Some(Layers::SIMPLE | Layers::EXTENDED));
        assert_eq!(args.tables.normalizations, vec![Normalization::Raw, Normalization::WordBased]);
        assert_eq!(args.tables.ttr, None);
    }
}
