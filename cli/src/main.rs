//! outpdf CLI - PDF outline extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use outpdf::{
    render, DocumentOutline, ExtractOptions, JsonFormat, OutlineExtractor, Strategy,
};

#[derive(Parser)]
#[command(name = "outpdf")]
#[command(version)]
#[command(about = "Extract a heading outline from PDF documents as JSON", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Heading detection strategy
    #[arg(long, value_enum, default_value = "weighted")]
    strategy: StrategyArg,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the outline of a single PDF
    Extract {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Heading detection strategy
        #[arg(long, value_enum, default_value = "weighted")]
        strategy: StrategyArg,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Process every *.pdf in a directory, one JSON file per input
    Batch {
        /// Input directory
        #[arg(short, long, value_name = "DIR")]
        input: PathBuf,

        /// Output directory (created if absent)
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Heading detection strategy
        #[arg(long, value_enum, default_value = "weighted")]
        strategy: StrategyArg,

        /// Number of worker threads (defaults to the rayon default)
        #[arg(short, long)]
        jobs: Option<usize>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Multi-criteria weighted scoring (default)
    Weighted,
    /// Regex pattern + known-heading lexicon
    Pattern,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Weighted => Strategy::Weighted,
            StrategyArg::Pattern => Strategy::Pattern,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Extract {
            input,
            output,
            strategy,
            compact,
        }) => cmd_extract(&input, output.as_deref(), strategy, compact),
        Some(Commands::Batch {
            input,
            output,
            strategy,
            jobs,
        }) => cmd_batch(&input, &output, strategy, jobs),
        None => {
            if let Some(input) = cli.input {
                cmd_extract(&input, cli.output.as_deref(), cli.strategy, cli.compact)
            } else {
                println!("{}", "Usage: outpdf <FILE> [-o FILE]".yellow());
                println!("       outpdf --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    strategy: StrategyArg,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = make_extractor(strategy);
    let outline = extractor.extract_path(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = render::to_json(&outline, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_batch(
    input: &Path,
    output: &Path,
    strategy: StrategyArg,
    jobs: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.is_dir() {
        return Err(format!("input directory {} does not exist", input.display()).into());
    }
    fs::create_dir_all(output)?;

    let mut pdf_files: Vec<PathBuf> = fs::read_dir(input)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false)
        })
        .collect();
    pdf_files.sort();

    if pdf_files.is_empty() {
        println!("{}", "No PDF files found".yellow());
        return Ok(());
    }

    if let Some(n) = jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()?;
    }

    let pb = ProgressBar::new(pdf_files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let extractor = make_extractor(strategy);
    let failures: usize = pdf_files
        .par_iter()
        .map(|path| {
            let (outline, failed) = extract_or_fallback(&extractor, path);
            let written = write_outline(&outline, path, output);
            pb.inc(1);
            usize::from(failed || !written)
        })
        .sum();
    pb.finish_and_clear();

    let processed = pdf_files.len() - failures;
    println!(
        "{} {} of {} documents ({} fell back to an empty outline)",
        "Processed".green().bold(),
        processed,
        pdf_files.len(),
        failures
    );

    Ok(())
}

fn make_extractor(strategy: StrategyArg) -> OutlineExtractor {
    OutlineExtractor::new(ExtractOptions::new().with_strategy(strategy.into()))
}

/// Extract one document, degrading to the error-placeholder outline so
/// the batch always produces well-formed JSON per input.
fn extract_or_fallback(extractor: &OutlineExtractor, path: &Path) -> (DocumentOutline, bool) {
    match extractor.extract_path(path) {
        Ok(outline) => (outline, false),
        Err(e) => {
            log::error!("failed to process {}: {}", path.display(), e);
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            (
                DocumentOutline::empty(format!("Error processing {}", stem)),
                true,
            )
        }
    }
}

/// Write one outline as `<stem>.json` into the output directory.
fn write_outline(outline: &DocumentOutline, input: &Path, output_dir: &Path) -> bool {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let target = output_dir.join(format!("{}.json", stem));

    let json = match render::to_json(outline, JsonFormat::Pretty) {
        Ok(json) => json,
        Err(e) => {
            log::error!("failed to serialize {}: {}", target.display(), e);
            return false;
        }
    };
    match fs::write(&target, json) {
        Ok(()) => true,
        Err(e) => {
            log::error!("failed to write {}: {}", target.display(), e);
            false
        }
    }
}
