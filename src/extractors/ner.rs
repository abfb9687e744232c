// src/extractors/ner.rs

/// Label attached to a recognized span. Only `Person` feeds name extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityLabel {
    Person,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

impl Entity {
    pub fn person(text: impl Into<String>) -> Self {
        Self { text: text.into(), label: EntityLabel::Person }
    }

    pub fn is_person(&self) -> bool {
        self.label == EntityLabel::Person
    }
}

/// Named-entity recognition oracle. Returns entities in text order.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Vec<Entity>;
}

/// Recognizer that never finds anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRecognizer;

impl EntityRecognizer for NullRecognizer {
    fn recognize(&self, _text: &str) -> Vec<Entity> {
        Vec::new()
    }
}

// Title-case words that head resume sections or fields, never part of a name.
const HEADING_STOPWORDS: &[&str] = &[
    "Resume", "Curriculum", "Vitae", "Cv", "Name", "Full", "Candidate", "Email", "E-mail",
    "Phone", "Mobile", "Tel", "Address", "Contact", "Summary", "Profile", "Objective",
    "Experience", "Education", "Skills", "Projects", "Certifications", "References",
    "Professional", "Work", "History", "Employment", "Career", "Personal", "Details",
    "Senior", "Junior", "Lead", "Manager", "Engineer", "Developer", "Analyst", "Consultant",
    "Bachelor", "Master", "Computer", "Science", "University", "College", "Institute",
];

const MIN_RUN_WORDS: usize = 2;
const MAX_RUN_WORDS: usize = 4;

/// Rule-based stand-in for a statistical NER model.
///
/// Tags each run of 2-4 consecutive title-case words as a PERSON, skipping
/// common resume headings. A run ends at any other word or after a word
/// carrying trailing punctuation (`Jane Doe, ...`).
#[derive(Debug, Default, Clone, Copy)]
pub struct CapitalizedRunRecognizer;

impl CapitalizedRunRecognizer {
    fn is_name_word(word: &str) -> bool {
        let mut chars = word.chars();
        let Some(first) = chars.next() else { return false };
        if !first.is_uppercase() {
            return false;
        }
        let rest: Vec<char> = chars.collect();
        if rest.is_empty() || !rest.iter().any(|c| c.is_lowercase()) {
            return false;
        }
        if !rest.iter().all(|c| c.is_alphabetic() || *c == '-' || *c == '\'') {
            return false;
        }
        !HEADING_STOPWORDS.iter().any(|stop| stop.eq_ignore_ascii_case(word))
    }

    fn flush(run: &mut Vec<&str>, entities: &mut Vec<Entity>) {
        if (MIN_RUN_WORDS..=MAX_RUN_WORDS).contains(&run.len()) {
            entities.push(Entity::person(run.join(" ")));
        }
        run.clear();
    }
}

impl EntityRecognizer for CapitalizedRunRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();
        let mut run: Vec<&str> = Vec::new();

        for token in text.split_whitespace() {
            let word = token.trim_end_matches(|c: char| matches!(c, ',' | '.' | ';' | ':' | '|' | ')'));
            let ends_clause = word.len() != token.len();
            let word = word.trim_start_matches('(');

            if Self::is_name_word(word) {
                run.push(word);
                if ends_clause {
                    Self::flush(&mut run, &mut entities);
                }
            } else {
                Self::flush(&mut run, &mut entities);
            }
        }
        Self::flush(&mut run, &mut entities);

        tracing::trace!("CapitalizedRunRecognizer found {} candidate spans", entities.len());
        entities
    }
}
