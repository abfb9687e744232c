// src/main.rs
mod candidate;
mod extractors;
mod pipeline;
mod readers;
mod scoring;
mod storage;
mod utils;

use chrono::Datelike;
use clap::{Parser, ValueEnum};
use extractors::{CapitalizedRunRecognizer, EntityRecognizer, FieldExtractor, NullRecognizer, PatternLibrary};
use pipeline::ScreeningPipeline;
use readers::FileTextReader;
use std::path::PathBuf;
use std::sync::Arc;
use storage::StorageManager;
use utils::AppError;

/// Which named-entity recognizer feeds name extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RecognizerKind {
    /// Rule-based: runs of 2-4 title-case words
    Capitalized,
    /// No entity recognition; rely on "Name:" labels only
    #[value(name = "none")]
    Disabled,
}

/// Command Line Interface for the resume screener
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Folder holding PDF, DOCX and TXT resumes
    #[arg(short, long, env = "RESUME_INPUT_DIR", default_value = "resumes")]
    input_dir: PathBuf,

    /// Output directory for the report tables
    #[arg(short, long, env = "RESUME_OUTPUT_DIR", default_value = "./output")]
    output_dir: PathBuf,

    /// Base name of the report files
    #[arg(short, long, default_value = "HR_Candidate_Database")]
    report_name: String,

    /// JSON file overriding the skill and education dictionaries
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Year that "present"/"current" resolves to in date ranges (default: this year)
    #[arg(long, env = "RESUME_REFERENCE_YEAR")]
    reference_year: Option<i32>,

    /// Named-entity recognizer used for name extraction
    #[arg(long, value_enum, default_value_t = RecognizerKind::Capitalized)]
    recognizer: RecognizerKind,

    /// Verbose logging (debug level) unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging(args.verbose);
    tracing::info!("Starting processing for args: {:?}", args);

    // 2. Load dictionaries once for the whole run
    let library = match &args.dictionary {
        Some(path) => {
            tracing::info!("Loading dictionary override from {}", path.display());
            PatternLibrary::from_json_file(path)?
        }
        None => PatternLibrary::default(),
    };
    tracing::debug!(
        "Dictionary: {} skills, {} education keywords",
        library.target_skills().len(),
        library.education_keywords().len()
    );

    let recognizer: Arc<dyn EntityRecognizer> = match args.recognizer {
        RecognizerKind::Capitalized => Arc::new(CapitalizedRunRecognizer),
        RecognizerKind::Disabled => Arc::new(NullRecognizer),
    };
    let reference_year = args.reference_year.unwrap_or_else(|| chrono::Local::now().year());

    let pipeline = ScreeningPipeline::new(FieldExtractor::new(Arc::new(library), recognizer, reference_year));

    // 3. Find eligible resumes
    if !args.input_dir.exists() {
        std::fs::create_dir_all(&args.input_dir)?;
        tracing::info!("Created input folder: {}", args.input_dir.display());
    }
    tracing::info!("Scanning folder: {} (PDF, DOCX, TXT)", args.input_dir.display());
    let files = readers::scan_input_dir(&args.input_dir)?;

    if files.is_empty() {
        tracing::warn!(
            "No resume files found in '{}'. Add PDF, DOCX, or TXT files and run again.",
            args.input_dir.display()
        );
        return Ok(());
    }
    tracing::info!("Found {} resume file(s). Processing...", files.len());

    // 4. Process each resume
    let outcome = pipeline.run_batch(&FileTextReader, &files);
    let stats = outcome.statistics();

    tracing::info!("Processing finished. Success: {}, Failures: {}", stats.processed, stats.failed);

    if outcome.records.is_empty() {
        return Err(AppError::Processing(format!(
            "No resumes were successfully processed ({} failed)",
            stats.failed
        )));
    }

    // 5. Write the report
    let storage = StorageManager::new(&args.output_dir, &args.report_name)?;
    let paths = storage.save_report(&args.input_dir, &outcome.summary_rows(), &outcome.detailed_rows, &stats)?;

    tracing::info!(
        "Report written: {} and {} (metadata: {})",
        paths.summary.display(),
        paths.detailed.display(),
        paths.metadata.display()
    );
    tracing::info!("Average Relevance Score: {:.1}%", stats.average_score);
    if let Some((name, score)) = &stats.top_candidate {
        tracing::info!("Top Candidate: {} ({}%)", name, score);
    }
    tracing::info!("Total Skills Found: {}", stats.total_skills);
    tracing::info!("Avg Experience: {:.1} years", stats.average_experience);

    Ok(())
}
