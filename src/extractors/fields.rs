// src/extractors/fields.rs

// --- Imports ---
use crate::extractors::name::NameResolver;
use crate::extractors::ner::EntityRecognizer;
use crate::extractors::patterns::{
    PatternLibrary, DECIMAL_DIGIT_RE, EMAIL_RE, EXPERIENCE_RE, PHONE_RE, YEAR_RANGE_RE,
};
use std::sync::Arc;

/// Rendered in place of a missing email, phone, skill list or education.
pub const NOT_FOUND: &str = "Not Found";

// --- Data Structures ---

/// Everything pulled out of one resume, before scoring and assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,      // Dictionary order, no duplicates
    pub education: Vec<String>,   // Matched education keywords
    pub experience_years: u32,
}

impl ExtractedFields {
    pub fn skills_count(&self) -> usize {
        self.skills.len()
    }

    /// Comma-joined education keywords, or "Not Found".
    pub fn education_summary(&self) -> String {
        join_or_not_found(&self.education)
    }
}

pub(crate) fn join_or_not_found(items: &[String]) -> String {
    if items.is_empty() {
        NOT_FOUND.to_string()
    } else {
        items.join(", ")
    }
}

// --- Main Extractor Structure ---

/// Runs every field routine over normalized resume text.
///
/// Holds only read-only configuration, so one instance serves a whole batch.
pub struct FieldExtractor {
    library: Arc<PatternLibrary>,
    names: NameResolver,
    reference_year: i32,
}

impl FieldExtractor {
    /// `reference_year` is the year that "present"/"current" resolves to in date ranges.
    pub fn new(
        library: Arc<PatternLibrary>,
        recognizer: Arc<dyn EntityRecognizer>,
        reference_year: i32,
    ) -> Self {
        Self::with_name_resolver(library, NameResolver::standard(recognizer), reference_year)
    }

    pub fn with_name_resolver(
        library: Arc<PatternLibrary>,
        names: NameResolver,
        reference_year: i32,
    ) -> Self {
        Self { library, names, reference_year }
    }

    /// Extracts all candidate fields. Never fails: misses become sentinels.
    pub fn extract_details(&self, text: &str) -> ExtractedFields {
        let fields = ExtractedFields {
            name: self.names.resolve(text),
            email: extract_email(text),
            phone: extract_phone(text),
            skills: extract_skills(text, self.library.target_skills()),
            education: extract_education(text, self.library.education_keywords()),
            experience_years: extract_experience_years(text, self.reference_year),
        };
        tracing::debug!(
            "Extracted fields: name='{}', skills={}, education={}, experience={}y",
            fields.name,
            fields.skills_count(),
            fields.education.len(),
            fields.experience_years
        );
        fields
    }
}

// --- Field Routines ---

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First broad phone-like run. False positives (IDs, date strings) are accepted.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

/// Case-insensitive substring match; "Java" also fires inside "JavaScript".
pub fn extract_skills(text: &str, target_skills: &[String]) -> Vec<String> {
    matching_keywords(text, target_skills)
}

pub fn extract_education(text: &str, keywords: &[String]) -> Vec<String> {
    matching_keywords(text, keywords)
}

fn matching_keywords(text: &str, keywords: &[String]) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();
    for keyword in keywords {
        if text_lower.contains(&keyword.to_lowercase()) && !found.contains(keyword) {
            found.push(keyword.clone());
        }
    }
    found
}

/// Largest of: every "N years ..." number, and the summed YYYY-YYYY ranges.
pub fn extract_experience_years(text: &str, reference_year: i32) -> u32 {
    let text_lower = text.to_lowercase();

    let mut years: Vec<u32> = EXPERIENCE_RE
        .iter()
        .flat_map(|re| re.captures_iter(&text_lower))
        .filter_map(|caps| caps.get(1).map(|m| parse_digits(m.as_str())))
        .collect();

    let range_total = summed_year_ranges(&text_lower, reference_year);
    if range_total > 0 {
        years.push(range_total);
    }

    years.into_iter().max().unwrap_or(0)
}

fn summed_year_ranges(text_lower: &str, reference_year: i32) -> u32 {
    YEAR_RANGE_RE
        .captures_iter(text_lower)
        .filter_map(|caps| {
            let start = i64::from(parse_digits(caps.get(1)?.as_str()));
            let end = match caps.get(2)?.as_str() {
                "present" | "current" => i64::from(reference_year),
                year => i64::from(parse_digits(year)),
            };
            // Reversed ranges count as zero
            Some((end - start).max(0))
        })
        .fold(0u32, |acc, span| acc.saturating_add(u32::try_from(span).unwrap_or(u32::MAX)))
}

/// Value of a run of Unicode decimal digits, saturating at `u32::MAX`.
fn parse_digits(digits: &str) -> u32 {
    digits
        .chars()
        .filter_map(decimal_value)
        .fold(0u32, |acc, d| acc.saturating_mul(10).saturating_add(d))
}

// Decimal digits always come in ascending runs of ten (0-9) code points,
// so the value is the offset from the start of the run, modulo 10.
fn decimal_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    let is_digit = |c: char| DECIMAL_DIGIT_RE.is_match(c.encode_utf8(&mut [0u8; 4]));
    if !is_digit(c) {
        return None;
    }
    let mut run_start = u32::from(c);
    while let Some(prev) = run_start.checked_sub(1).and_then(char::from_u32) {
        if !is_digit(prev) {
            break;
        }
        run_start -= 1;
    }
    Some((u32::from(c) - run_start) % 10)
}
