//! sat-golden - golden fixtures for tokenizer validation
//!
//! Runs a reference HuggingFace tokenizer over a fixed corpus and records the
//! token ids, character offsets and token strings it produces. The resulting
//! JSON file is what a separate SentencePiece implementation is tested
//! against.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use sat_golden::{Generator, TokenizerSource, default_corpus, fixture};
//!
//! fn main() -> sat_golden::Result<()> {
//!     let tokenizer = TokenizerSource::huggingface("xlm-roberta-base").load()?;
//!     let records = Generator::new(tokenizer).generate(default_corpus())?;
//!     fixture::write(Path::new("testdata/tokenizer_golden.json"), &records)?;
//!     println!("Generated {} test cases", records.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod golden;
pub mod tokenizer;
pub mod version;

pub use config::Config;
pub use error::{GoldenError, Result};
pub use golden::{
    CheckOutcome, GoldenRecord, Generator, OffsetAnomaly, RecordDiff, default_corpus, fixture,
};
pub use tokenizer::{Encoded, HfTokenizer, TokenizerProvider, TokenizerSource};
pub use version::{PKG_VERSION, version_string};
