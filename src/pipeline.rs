// src/pipeline.rs
use crate::candidate::assembler::{assemble, flatten, summary_rows};
use crate::candidate::{CandidateRecord, DetailedFieldRow, SummaryRow};
use crate::extractors::FieldExtractor;
use crate::readers::{DocumentFormat, TextReader};
use crate::scoring::compute_score;
use crate::utils::text::clean_text;
use std::path::{Path, PathBuf};

/// Normalize → extract → score → assemble for a single document.
pub struct ScreeningPipeline {
    extractor: FieldExtractor,
}

/// Everything collected over one batch run.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub records: Vec<CandidateRecord>, // processing order
    pub detailed_rows: Vec<DetailedFieldRow>,
    pub failed: Vec<PathBuf>,
}

impl BatchOutcome {
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        summary_rows(&self.records)
    }

    pub fn statistics(&self) -> BatchStatistics {
        BatchStatistics::from_records(&self.records, self.failed.len())
    }
}

/// Aggregate figures printed at the end of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchStatistics {
    pub processed: usize,
    pub failed: usize,
    pub average_score: f64,
    pub top_candidate: Option<(String, u8)>,
    pub total_skills: usize,
    pub average_experience: f64,
}

impl BatchStatistics {
    pub fn from_records(records: &[CandidateRecord], failed: usize) -> Self {
        let processed = records.len();
        let mean = |sum: f64| if processed == 0 { 0.0 } else { sum / processed as f64 };

        // First of the highest scores, matching the summary table's top row
        let top_candidate = records
            .iter()
            .fold(None::<&CandidateRecord>, |best, r| match best {
                Some(b) if b.relevance_score >= r.relevance_score => Some(b),
                _ => Some(r),
            })
            .map(|r| (r.name.clone(), r.relevance_score));

        Self {
            processed,
            failed,
            average_score: mean(records.iter().map(|r| f64::from(r.relevance_score)).sum()),
            top_candidate,
            total_skills: records.iter().map(CandidateRecord::skills_count).sum(),
            average_experience: mean(records.iter().map(|r| f64::from(r.experience_years)).sum()),
        }
    }
}

impl ScreeningPipeline {
    pub fn new(extractor: FieldExtractor) -> Self {
        Self { extractor }
    }

    /// Runs the core over raw text. Total: any input yields a record.
    pub fn process_text(&self, raw_text: &str, source_file: &str) -> CandidateRecord {
        let cleaned = clean_text(raw_text);
        let fields = self.extractor.extract_details(&cleaned);
        let score = compute_score(&fields);
        assemble(fields, score, source_file)
    }

    /// Processes every file independently; a failed read is logged and skipped.
    pub fn run_batch<R: TextReader>(
        &self,
        reader: &R,
        files: &[(PathBuf, DocumentFormat)],
    ) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for (path, format) in files {
            let file_name = display_name(path);
            match reader.read_text(path, *format) {
                Ok(raw_text) => {
                    let record = self.process_text(&raw_text, &file_name);
                    tracing::info!("Processed: {} (Score: {}%)", file_name, record.relevance_score);
                    outcome.detailed_rows.extend(flatten(&record));
                    outcome.records.push(record);
                }
                Err(e) => {
                    tracing::warn!("Failed to extract text from: {} ({})", file_name, e);
                    outcome.failed.push(path.clone());
                }
            }
        }

        outcome
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
