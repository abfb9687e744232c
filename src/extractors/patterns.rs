// src/extractors/patterns.rs

use crate::utils::error::ConfigError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

// --- Regex Patterns (Lazy Static) ---

// local@domain.tld, TLD of two or more letters
pub static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
        .expect("Failed to compile EMAIL_RE")
});

// Deliberately broad: also matches ID numbers and long date runs.
pub static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[+(]?[1-9][0-9 .\-()]{8,}[0-9]").expect("Failed to compile PHONE_RE")
});

// Applied to lowercased text. Each pattern captures the year count in group 1.
// `\d` is any Unicode decimal digit (Arabic-Indic, Devanagari, ...).
pub static EXPERIENCE_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // "5 years of experience", "3+ yrs exp"
        r"(\d+)\+?\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)",
        // "experience of 7 years"
        r"(?:experience|exp)\s*(?:of\s*)?(\d+)\+?\s*(?:years?|yrs?)",
        // "4 years in fintech", "2 years of ..."
        r"(\d+)\+?\s*(?:years?|yrs?)\s*(?:in|of)",
    ]
    .iter()
    .map(|pat| Regex::new(pat).expect("Failed to compile EXPERIENCE_RE"))
    .collect()
});

// "2018-2021", "2019 – present", "2020—current" (lowercased input)
pub static YEAR_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{4})\s*[-\u{2013}\u{2014}]\s*(\d{4}|present|current)")
        .expect("Failed to compile YEAR_RANGE_RE")
});

// Label is case-insensitive, the captured name must be capitalized words.
pub static NAME_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i:name|full name|candidate name)\s*[:\-]\s*([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)")
        .expect("Failed to compile NAME_LABEL_RE")
});

// Single Unicode decimal digit, used to find the zero of a digit's script.
pub static DECIMAL_DIGIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d$").expect("Failed to compile DECIMAL_DIGIT_RE")
});

// --- Dictionaries ---

const DEFAULT_TARGET_SKILLS: &[&str] = &[
    // Technical
    "Python", "Java", "JavaScript", "C++", "C#", "SQL", "React", "Angular", "Node.js",
    "Django", "Flask", "Spring", "AWS", "Azure", "Docker", "Kubernetes", "Git",
    // HR
    "Recruitment", "Labor Laws", "Employee Relations", "HRMS", "Talent Acquisition",
    "Performance Management", "Onboarding", "HR Analytics",
    // Marketing
    "Digital Marketing", "SEO", "SEM", "Google Analytics", "Campaigns", "Social Media",
    "Content Marketing", "Email Marketing", "PPC", "Brand Management",
    // Finance / accounting
    "Invoicing", "Taxation", "Audit", "Financial Reporting", "Excel", "QuickBooks",
    "SAP", "Budgeting", "Forecasting", "GAAP", "Financial Analysis",
    // Soft skills
    "Leadership", "Communication", "Team Management", "Problem Solving", "Project Management",
];

const DEFAULT_EDUCATION_KEYWORDS: &[&str] = &[
    "Bachelor", "Master", "PhD", "B.Tech", "M.Tech", "MBA", "BBA", "B.Sc", "M.Sc",
    "B.A", "M.A", "B.Com", "M.Com", "Engineering", "Computer Science", "Business Administration",
    "Finance", "Marketing", "Human Resources", "Diploma", "Certificate",
];

/// Read-only keyword dictionaries used by the field extractor.
///
/// Built once at startup (either the built-in lists or a JSON override) and
/// shared behind an `Arc` for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternLibrary {
    target_skills: Vec<String>,
    education_keywords: Vec<String>,
}

/// On-disk shape of a dictionary override; missing keys keep the defaults.
#[derive(Debug, Deserialize)]
struct DictionaryFile {
    target_skills: Option<Vec<String>>,
    education_keywords: Option<Vec<String>>,
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new(
            DEFAULT_TARGET_SKILLS.iter().map(|s| s.to_string()),
            DEFAULT_EDUCATION_KEYWORDS.iter().map(|s| s.to_string()),
        )
    }
}

impl PatternLibrary {
    /// Builds a library from arbitrary lists. Entries are trimmed, blanks dropped,
    /// and duplicates removed keeping the first occurrence.
    pub fn new<S, E>(target_skills: S, education_keywords: E) -> Self
    where
        S: IntoIterator<Item = String>,
        E: IntoIterator<Item = String>,
    {
        Self {
            target_skills: normalize_entries(target_skills),
            education_keywords: normalize_entries(education_keywords),
        }
    }

    /// Loads a JSON dictionary override: `{"target_skills": [...], "education_keywords": [...]}`.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::DictionaryIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw).map_err(|source| ConfigError::DictionaryParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        let file: DictionaryFile = serde_json::from_str(raw)?;
        let defaults = Self::default();
        Ok(Self::new(
            file.target_skills.unwrap_or(defaults.target_skills),
            file.education_keywords.unwrap_or(defaults.education_keywords),
        ))
    }

    pub fn target_skills(&self) -> &[String] {
        &self.target_skills
    }

    pub fn education_keywords(&self) -> &[String] {
        &self.education_keywords
    }
}

fn normalize_entries<I: IntoIterator<Item = String>>(entries: I) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for entry in entries {
        let trimmed = entry.trim();
        if trimmed.is_empty() || out.iter().any(|e| e == trimmed) {
            continue;
        }
        out.push(trimmed.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_library_is_deduplicated() {
        let lib = PatternLibrary::default();
        assert_eq!(lib.target_skills().len(), DEFAULT_TARGET_SKILLS.len());
        assert_eq!(lib.target_skills()[0], "Python");
        assert!(lib.education_keywords().contains(&"PhD".to_string()));
    }

    #[test]
    fn test_new_trims_and_dedups_in_order() {
        let lib = PatternLibrary::new(
            vec![" Rust ".to_string(), "Go".to_string(), "Rust".to_string(), "".to_string()],
            vec!["PhD".to_string()],
        );
        assert_eq!(lib.target_skills(), &["Rust".to_string(), "Go".to_string()]);
    }

    #[test]
    fn test_json_override_keeps_missing_defaults() {
        let lib = PatternLibrary::from_json_str(r#"{"target_skills": ["Rust", "Tokio"]}"#)
            .expect("valid dictionary json");
        assert_eq!(lib.target_skills(), &["Rust".to_string(), "Tokio".to_string()]);
        assert_eq!(lib.education_keywords().len(), DEFAULT_EDUCATION_KEYWORDS.len());
    }

    #[test]
    fn test_json_file_errors_are_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            PatternLibrary::from_json_file(&missing),
            Err(ConfigError::DictionaryIo { .. })
        ));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{not json").expect("write fixture");
        assert!(matches!(
            PatternLibrary::from_json_file(&bad),
            Err(ConfigError::DictionaryParse { .. })
        ));
    }

    #[test]
    fn test_name_label_requires_capitalized_words() {
        let caps = NAME_LABEL_RE.captures("FULL NAME: Maria Lopez Garcia").expect("label match");
        assert_eq!(&caps[1], "Maria Lopez Garcia");
        assert!(NAME_LABEL_RE.captures("name: maria lopez").is_none());
    }
}
