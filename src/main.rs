use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use doc_checker_rs::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Json,
    Text,
}

#[derive(Parser)]
#[command(name = "doc_checker_rs")]
#[command(about = "Check documents against size, filename and content rules", long_about = None)]
struct Cli {
    /// File or directory to check
    path: PathBuf,

    /// JSON configuration file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Output report filename
    #[arg(short, long, default_value = "report.json")]
    output: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Json)]
    format: ReportFormat,

    /// Only check files directly inside the given directory
    #[arg(long)]
    no_recursive: bool,

    /// Number of parallel worker threads
    #[arg(short, long, default_value_t = 1)]
    workers: usize,

    /// Detect and report byte-identical documents
    #[arg(long)]
    detect_duplicates: bool,

    /// Run in batch mode (no progress bar)
    #[arg(long)]
    batch: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "doc_checker_rs=debug" } else { "doc_checker_rs=warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

fn load_config(path: &Path) -> Result<ValidationConfig> {
    if !path.exists() {
        println!(
            "Warning: config file {} not found, using default settings.",
            path.display()
        );
        return Ok(ValidationConfig::default());
    }
    Ok(ValidationConfig::from_file(path)?)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli.config)?;
    let checker = DocumentChecker::new(config);

    if !cli.path.exists() {
        eprintln!("Error: path {} does not exist.", cli.path.display());
        return Ok(ExitCode::FAILURE);
    }

    let files = collect_document_files(&cli.path, !cli.no_recursive)?;
    if files.is_empty() {
        println!("No files found to check.");
        return Ok(ExitCode::FAILURE);
    }

    println!("Found {} file(s) to check", files.len());
    if cli.verbose {
        println!("\nFiles:");
        for file in &files {
            println!("  - {}", file.display());
        }
        println!();
    }

    // Stop scheduling new files on Ctrl-C, keep what was already checked
    let shutdown_requested = Arc::new(AtomicBool::new(false));
    let shutdown_flag = shutdown_requested.clone();
    ctrlc::set_handler(move || {
        eprintln!("\nShutdown requested. Finishing current files...");
        shutdown_flag.store(true, Ordering::SeqCst);
    })
    .context("Error setting Ctrl-C handler")?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(cli.workers.max(1))
        .build()
        .context("Failed to build thread pool")?;

    let progress = if cli.batch || cli.verbose {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        pb
    };

    let results: Vec<ValidationResult> = pool.install(|| {
        files
            .par_iter()
            .progress_with(progress.clone())
            .filter_map(|path| {
                if shutdown_requested.load(Ordering::SeqCst) {
                    return None;
                }
                Some(checker.check_document(path))
            })
            .collect()
    });

    let was_interrupted = shutdown_requested.load(Ordering::SeqCst);
    if was_interrupted {
        progress.abandon_with_message("Interrupted");
        eprintln!("Processed {}/{} files", results.len(), files.len());
    } else {
        progress.finish_and_clear();
    }

    if cli.verbose {
        for result in &results {
            let mark = if result.is_valid() { "✓" } else { "✗" };
            println!("{} {}: {}", mark, result.file().display(), result.status());
            for error in result.errors() {
                println!("    - {}", error);
            }
            for warning in result.warnings() {
                println!("    ! {}", warning);
            }
        }
        println!();
    }

    let mut report = CheckReport::from_results(results);
    if cli.detect_duplicates {
        let checked: Vec<PathBuf> = report.results.iter().map(|r| r.file().to_path_buf()).collect();
        let duplicates = find_duplicates(&checked);
        println!("Found {} group(s) of duplicate files", duplicates.len());
        report = report.with_duplicates(duplicates);
    }
    if was_interrupted {
        report = report.mark_interrupted();
    }

    match cli.format {
        ReportFormat::Json => write_report(&cli.output, &report)?,
        ReportFormat::Text => write_text_report(&cli.output, &report)?,
    }

    println!("\nReport saved to: {}", cli.output.display());
    println!("Total files: {}", report.total_files);
    println!("Valid: {}", report.valid_files);
    println!("Invalid: {}", report.invalid_files);

    Ok(if report.exit_code() == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
