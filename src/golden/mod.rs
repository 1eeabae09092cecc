//! Golden fixture generation.
//!
//! A golden file is a JSON array of [`GoldenRecord`]s, one per input of the
//! fixed corpus, recording exactly what the reference tokenizer produced.
//! Another tokenizer implementation is then tested against it.

mod corpus;
pub mod fixture;
mod generator;
mod record;

pub use corpus::default_corpus;
pub use fixture::{CheckOutcome, DEFAULT_OUTPUT, RecordDiff};
pub use generator::Generator;
pub use record::{GoldenRecord, OffsetAnomaly};
