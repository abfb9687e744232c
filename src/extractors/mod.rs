pub mod fields;
pub mod name;
pub mod ner;
pub mod patterns;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use fields::{ExtractedFields, FieldExtractor, NOT_FOUND};
#[allow(unused_imports)]
pub use name::{LabelPatternStrategy, NameResolver, NameStrategy, PersonEntityStrategy, UNKNOWN_NAME};
#[allow(unused_imports)]
pub use ner::{CapitalizedRunRecognizer, Entity, EntityLabel, EntityRecognizer, NullRecognizer};
pub use patterns::PatternLibrary;
