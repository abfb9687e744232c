// src/candidate/assembler.rs
use crate::candidate::models::{CandidateRecord, DetailedFieldRow, SummaryRow};
use crate::extractors::fields::ExtractedFields;

/// Field names of the detailed table, in output order.
pub const DETAILED_FIELDS: [&str; 8] = [
    "Name",
    "Email",
    "Phone",
    "Skills",
    "SkillsCount",
    "Education",
    "ExperienceYears",
    "RelevanceScore",
];

/// Merges extracted fields, score and origin into a record. No extraction happens here.
pub fn assemble(fields: ExtractedFields, score: u8, source_file: &str) -> CandidateRecord {
    CandidateRecord {
        name: fields.name,
        email: fields.email,
        phone: fields.phone,
        skills: fields.skills,
        education: fields.education,
        experience_years: fields.experience_years,
        relevance_score: score,
        source_file: source_file.to_string(),
    }
}

/// One row per field in `DETAILED_FIELDS` order, each tagged with name and source file.
pub fn flatten(record: &CandidateRecord) -> Vec<DetailedFieldRow> {
    let values = [
        record.name.clone(),
        record.email_display().to_string(),
        record.phone_display().to_string(),
        record.skills_display(),
        record.skills_count().to_string(),
        record.education_display(),
        record.experience_years.to_string(),
        record.relevance_score.to_string(),
    ];

    DETAILED_FIELDS
        .into_iter()
        .zip(values)
        .map(|(field, value)| DetailedFieldRow {
            candidate_name: record.name.clone(),
            field,
            value,
            source_file: record.source_file.clone(),
        })
        .collect()
}

/// Summary rows ordered by score, highest first. Equal scores keep input order.
pub fn summary_rows(records: &[CandidateRecord]) -> Vec<SummaryRow> {
    let mut ranked: Vec<&CandidateRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score)); // stable sort
    ranked.into_iter().map(SummaryRow::from).collect()
}
