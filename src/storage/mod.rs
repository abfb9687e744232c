// src/storage/mod.rs
use crate::candidate::{DetailedFieldRow, SummaryRow};
use crate::pipeline::BatchStatistics;
use crate::utils::error::StorageError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Paths of everything written for one batch.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub summary: PathBuf,
    pub detailed: PathBuf,
    pub metadata: PathBuf,
}

pub struct StorageManager {
    base_dir: PathBuf,
    report_name: String,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P, report_name: &str) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path, report_name: report_name.to_string() })
    }

    fn table_path(&self, sheet: &str, extension: &str) -> PathBuf {
        self.base_dir.join(format!("{}_{}.{}", self.report_name, sheet, extension))
    }

    /// Writes the ranked summary table (`<report>_Summary.csv`)
    pub fn save_summary(&self, rows: &[SummaryRow]) -> Result<PathBuf, StorageError> {
        let file_path = self.table_path("Summary", "csv");
        write_csv(&file_path, rows)?;
        tracing::info!("Saved summary table ({} rows) to {}", rows.len(), file_path.display());
        Ok(file_path)
    }

    /// Writes the long-format field table (`<report>_Detailed_Fields.csv`)
    pub fn save_detailed_fields(&self, rows: &[DetailedFieldRow]) -> Result<PathBuf, StorageError> {
        let file_path = self.table_path("Detailed_Fields", "csv");
        write_csv(&file_path, rows)?;
        tracing::info!("Saved detailed field table ({} rows) to {}", rows.len(), file_path.display());
        Ok(file_path)
    }

    /// Saves run metadata and batch statistics in JSON format
    pub fn save_report_metadata(
        &self,
        input_dir: &Path,
        stats: &BatchStatistics,
        summary_path: &Path,
        detailed_path: &Path,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.table_path("meta", "json");

        let metadata = serde_json::json!({
            "report_name": self.report_name,
            "input_dir": input_dir.display().to_string(),
            "processed": stats.processed,
            "failed": stats.failed,
            "average_relevance_score": stats.average_score,
            "top_candidate": stats.top_candidate.as_ref().map(|(name, score)| serde_json::json!({
                "name": name,
                "relevance_score": score,
            })),
            "total_skills_found": stats.total_skills,
            "average_experience_years": stats.average_experience,
            "tables": {
                "summary": summary_path.display().to_string(),
                "detailed_fields": detailed_path.display().to_string(),
            },
            "generated_at": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }

    /// Writes both tables plus metadata.
    pub fn save_report(
        &self,
        input_dir: &Path,
        summary: &[SummaryRow],
        detailed: &[DetailedFieldRow],
        stats: &BatchStatistics,
    ) -> Result<ReportPaths, StorageError> {
        let summary_path = self.save_summary(summary)?;
        let detailed_path = self.save_detailed_fields(detailed)?;
        let metadata = self.save_report_metadata(input_dir, stats, &summary_path, &detailed_path)?;
        Ok(ReportPaths { summary: summary_path, detailed: detailed_path, metadata })
    }
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), StorageError> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
