// src/scoring/mod.rs

use crate::extractors::fields::ExtractedFields;

const SKILL_POINTS: u32 = 4;
const SKILL_CAP: u32 = 40;
const EXPERIENCE_POINTS: u32 = 3;
const EXPERIENCE_CAP: u32 = 30;
const EDUCATION_ADVANCED: u32 = 20;
const EDUCATION_BACHELOR: u32 = 15;
const EDUCATION_OTHER: u32 = 10;
const CONTACT_POINTS: u32 = 5;
const MAX_SCORE: u32 = 100;

/// Per-component points behind a relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub skills: u32,
    pub experience: u32,
    pub education: u32,
    pub contact: u32,
}

impl ScoreBreakdown {
    pub fn for_fields(fields: &ExtractedFields) -> Self {
        let skills_count = u32::try_from(fields.skills_count()).unwrap_or(u32::MAX);
        let skills = SKILL_CAP.min(skills_count.saturating_mul(SKILL_POINTS));

        let experience = if fields.experience_years > 0 {
            EXPERIENCE_CAP.min(fields.experience_years.saturating_mul(EXPERIENCE_POINTS))
        } else {
            0
        };

        let education = education_points(&fields.education);

        let mut contact = 0;
        if fields.email.as_deref().is_some_and(|e| !e.is_empty()) {
            contact += CONTACT_POINTS;
        }
        if fields.phone.as_deref().is_some_and(|p| !p.is_empty()) {
            contact += CONTACT_POINTS;
        }

        Self { skills, experience, education, contact }
    }

    /// Sum of all components, clamped to 100.
    pub fn total(&self) -> u8 {
        let sum = self.skills + self.experience + self.education + self.contact;
        // MAX_SCORE fits in u8
        sum.min(MAX_SCORE) as u8
    }
}

// Checked against the joined keyword string. PhD/Master outranks Bachelor tier.
fn education_points(education: &[String]) -> u32 {
    if education.is_empty() {
        return 0;
    }
    let joined = education.join(", ");
    if joined.contains("PhD") || joined.contains("Master") {
        EDUCATION_ADVANCED
    } else if ["Bachelor", "B.Tech", "B.Sc"].iter().any(|k| joined.contains(k)) {
        EDUCATION_BACHELOR
    } else {
        EDUCATION_OTHER
    }
}

/// Relevance score in `[0, 100]`; a pure function of the extracted fields.
pub fn compute_score(fields: &ExtractedFields) -> u8 {
    let breakdown = ScoreBreakdown::for_fields(fields);
    tracing::debug!(
        "Score breakdown: skills={}, experience={}, education={}, contact={}",
        breakdown.skills,
        breakdown.experience,
        breakdown.education,
        breakdown.contact
    );
    breakdown.total()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ExtractedFields {
        ExtractedFields {
            name: "Unknown".to_string(),
            email: None,
            phone: None,
            skills: Vec::new(),
            education: Vec::new(),
            experience_years: 0,
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_record_scores_zero() {
        assert_eq!(compute_score(&fields()), 0);
    }

    #[test]
    fn test_component_caps() {
        let mut f = fields();
        f.skills = (0..25).map(|i| format!("skill{}", i)).collect();
        f.experience_years = 40;
        let b = ScoreBreakdown::for_fields(&f);
        assert_eq!(b.skills, 40);
        assert_eq!(b.experience, 30);
    }

    #[test]
    fn test_education_tiers() {
        let mut f = fields();
        f.education = strings(&["Bachelor", "PhD"]);
        assert_eq!(ScoreBreakdown::for_fields(&f).education, 20, "PhD must outrank Bachelor");
        f.education = strings(&["B.Sc", "Computer Science"]);
        assert_eq!(ScoreBreakdown::for_fields(&f).education, 15);
        f.education = strings(&["Diploma"]);
        assert_eq!(ScoreBreakdown::for_fields(&f).education, 10);
        f.education = Vec::new();
        assert_eq!(ScoreBreakdown::for_fields(&f).education, 0);
    }

    #[test]
    fn test_contact_points() {
        let mut f = fields();
        f.email = Some("a@b.co".to_string());
        assert_eq!(ScoreBreakdown::for_fields(&f).contact, 5);
        f.phone = Some("+1 555 123 4567".to_string());
        assert_eq!(ScoreBreakdown::for_fields(&f).contact, 10);
        f.email = Some(String::new());
        assert_eq!(ScoreBreakdown::for_fields(&f).contact, 5);
    }

    #[test]
    fn test_maximum_score_is_bounded() {
        let f = ExtractedFields {
            name: "Max Points".to_string(),
            email: Some("a@b.co".to_string()),
            phone: Some("5551234567".to_string()),
            skills: (0..50).map(|i| i.to_string()).collect(),
            education: strings(&["PhD", "Master", "Bachelor"]),
            experience_years: u32::MAX,
        };
        assert_eq!(compute_score(&f), 100);
    }
}
