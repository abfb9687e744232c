// src/candidate/models.rs
use crate::extractors::fields::{join_or_not_found, NOT_FOUND};
use serde::Serialize;

/// One fully assembled resume result. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub experience_years: u32,
    pub relevance_score: u8,
    pub source_file: String,
}

impl CandidateRecord {
    pub fn skills_count(&self) -> usize {
        self.skills.len()
    }

    pub fn email_display(&self) -> &str {
        self.email.as_deref().unwrap_or(NOT_FOUND)
    }

    pub fn phone_display(&self) -> &str {
        self.phone.as_deref().unwrap_or(NOT_FOUND)
    }

    pub fn skills_display(&self) -> String {
        join_or_not_found(&self.skills)
    }

    pub fn education_display(&self) -> String {
        join_or_not_found(&self.education)
    }
}

/// Summary table row; field order is the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SummaryRow {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills_count: usize,
    pub skills: String,
    pub education: String,
    pub experience_years: u32,
    pub relevance_score: u8,
    pub source_file: String,
}

impl From<&CandidateRecord> for SummaryRow {
    fn from(record: &CandidateRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email_display().to_string(),
            phone: record.phone_display().to_string(),
            skills_count: record.skills_count(),
            skills: record.skills_display(),
            education: record.education_display(),
            experience_years: record.experience_years,
            relevance_score: record.relevance_score,
            source_file: record.source_file.clone(),
        }
    }
}

/// Long-format (field, value) projection of a record for the detailed table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetailedFieldRow {
    pub candidate_name: String,
    pub field: &'static str,
    pub value: String,
    pub source_file: String,
}
