// src/extractors/name.rs

use crate::extractors::ner::EntityRecognizer;
use crate::extractors::patterns::NAME_LABEL_RE;
use crate::utils::text::char_prefix;
use std::sync::Arc;

/// Sentinel used when no strategy produces a name.
pub const UNKNOWN_NAME: &str = "Unknown";

// Names almost always sit at the top of a resume.
const NER_WINDOW_CHARS: usize = 1000;
const LABEL_WINDOW_CHARS: usize = 500;

/// One independent way of finding the candidate's name.
pub trait NameStrategy: Send + Sync {
    fn label(&self) -> &'static str;
    fn extract(&self, text: &str) -> Option<String>;
}

/// PERSON entities from the NER oracle, preferring a plausible full name.
pub struct PersonEntityStrategy {
    recognizer: Arc<dyn EntityRecognizer>,
}

impl PersonEntityStrategy {
    pub fn new(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self { recognizer }
    }
}

impl NameStrategy for PersonEntityStrategy {
    fn label(&self) -> &'static str {
        "person-entity"
    }

    fn extract(&self, text: &str) -> Option<String> {
        let people: Vec<String> = self
            .recognizer
            .recognize(char_prefix(text, NER_WINDOW_CHARS))
            .into_iter()
            .filter(|e| e.is_person())
            .map(|e| e.text)
            .collect();

        let full_name = people.iter().find(|name| {
            let words = name.split_whitespace().count();
            (2..=4).contains(&words)
        });
        full_name.or_else(|| people.first()).cloned()
    }
}

/// Explicit `Name: Jane Doe` style label near the top of the text.
#[derive(Debug, Default, Clone, Copy)]
pub struct LabelPatternStrategy;

impl NameStrategy for LabelPatternStrategy {
    fn label(&self) -> &'static str {
        "label-pattern"
    }

    fn extract(&self, text: &str) -> Option<String> {
        NAME_LABEL_RE
            .captures(char_prefix(text, LABEL_WINDOW_CHARS))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

/// Ordered fallback chain; the first strategy to return a name wins.
pub struct NameResolver {
    strategies: Vec<Box<dyn NameStrategy>>,
}

impl NameResolver {
    pub fn new(strategies: Vec<Box<dyn NameStrategy>>) -> Self {
        Self { strategies }
    }

    /// NER entities first, then the label pattern.
    pub fn standard(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self::new(vec![
            Box::new(PersonEntityStrategy::new(recognizer)),
            Box::new(LabelPatternStrategy),
        ])
    }

    pub fn resolve(&self, text: &str) -> String {
        for strategy in &self.strategies {
            if let Some(name) = strategy.extract(text) {
                tracing::debug!("Name resolved by {} strategy: '{}'", strategy.label(), name);
                return name;
            }
        }
        tracing::debug!("No name strategy matched, using '{}'", UNKNOWN_NAME);
        UNKNOWN_NAME.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::ner::{Entity, EntityLabel, NullRecognizer};
    use std::sync::Mutex;

    /// Returns a fixed entity list and remembers the text it was given.
    struct StubRecognizer {
        entities: Vec<Entity>,
        seen: Mutex<Vec<String>>,
    }

    impl StubRecognizer {
        fn new(entities: Vec<Entity>) -> Self {
            Self { entities, seen: Mutex::new(Vec::new()) }
        }
    }

    impl EntityRecognizer for StubRecognizer {
        fn recognize(&self, text: &str) -> Vec<Entity> {
            self.seen.lock().unwrap().push(text.to_string());
            self.entities.clone()
        }
    }

    fn org(text: &str) -> Entity {
        Entity { text: text.to_string(), label: EntityLabel::Other("ORG".to_string()) }
    }

    #[test]
    fn test_person_strategy_prefers_full_name() {
        let stub = Arc::new(StubRecognizer::new(vec![
            org("Acme Corp"),
            Entity::person("Cher"),
            Entity::person("Ada Lovelace"),
        ]));
        let strategy = PersonEntityStrategy::new(stub);
        assert_eq!(strategy.extract("irrelevant").as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_person_strategy_falls_back_to_first_person() {
        let stub = Arc::new(StubRecognizer::new(vec![
            Entity::person("Cher"),
            Entity::person("Madonna"),
            Entity::person("A B C D E"),
        ]));
        let strategy = PersonEntityStrategy::new(stub);
        assert_eq!(strategy.extract("irrelevant").as_deref(), Some("Cher"));
    }

    #[test]
    fn test_person_strategy_sees_only_window() {
        let stub = Arc::new(StubRecognizer::new(Vec::new()));
        let strategy = PersonEntityStrategy::new(stub.clone());
        let text = "x".repeat(NER_WINDOW_CHARS + 250);
        assert_eq!(strategy.extract(&text), None);
        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen[0].chars().count(), NER_WINDOW_CHARS);
    }

    #[test]
    fn test_label_strategy_window() {
        assert_eq!(
            LabelPatternStrategy.extract("Candidate Name - John Smith Email john@x.com").as_deref(),
            Some("John Smith Email")
        );
        let far = format!("{} Name: John Smith", "x".repeat(LABEL_WINDOW_CHARS));
        assert_eq!(LabelPatternStrategy.extract(&far), None);
    }

    #[test]
    fn test_resolver_person_entity_wins_over_label() {
        let stub = Arc::new(StubRecognizer::new(vec![Entity::person("Grace Hopper")]));
        let resolver = NameResolver::standard(stub);
        assert_eq!(resolver.resolve("Name: John Smith"), "Grace Hopper");
    }

    #[test]
    fn test_resolver_falls_through_to_label_then_unknown() {
        let resolver = NameResolver::standard(Arc::new(NullRecognizer));
        assert_eq!(resolver.resolve("Full Name: John Smith, engineer"), "John Smith");
        assert_eq!(resolver.resolve("no label here"), UNKNOWN_NAME);
        assert_eq!(resolver.resolve(""), UNKNOWN_NAME);
    }
}
