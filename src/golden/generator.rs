//! Record generation.

use tracing::{debug, warn};

use super::GoldenRecord;
use crate::error::Result;
use crate::tokenizer::TokenizerProvider;

/// Runs a tokenizer over a corpus and records its answers.
pub struct Generator<P> {
    provider: P,
}

impl<P: TokenizerProvider> Generator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Tokenize one input into a record.
    ///
    /// Ids and offsets come from a single encode call; token strings are
    /// resolved id by id afterwards.
    pub fn record(&self, text: &str) -> Result<GoldenRecord> {
        let encoded = self.provider.encode(text)?;
        let tokens = encoded
            .ids
            .iter()
            .map(|&id| self.provider.id_to_token(id))
            .collect::<Result<Vec<_>>>()?;

        let record = GoldenRecord {
            input: text.to_string(),
            token_ids: encoded.ids,
            offsets: encoded.offsets,
            tokens,
        };

        for anomaly in record.validate()? {
            warn!(input = %record.input, ?anomaly, "offset outside input bounds");
        }
        debug!(input = %record.input, tokens = ?record.tokens, "record generated");

        Ok(record)
    }

    /// Tokenize every input, keeping corpus order. Stops at the first error.
    pub fn generate(&self, corpus: &[&str]) -> Result<Vec<GoldenRecord>> {
        corpus.iter().map(|text| self.record(text)).collect()
    }
}
