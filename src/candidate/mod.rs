pub mod assembler;
pub mod models;

pub use models::{CandidateRecord, DetailedFieldRow, SummaryRow};
