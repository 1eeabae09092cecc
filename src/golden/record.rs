//! Golden record type.

use serde::{Deserialize, Serialize};

use crate::error::{GoldenError, Result};

/// Reference tokenization of one input string.
///
/// `token_ids`, `offsets` and `tokens` are positionally aligned; the field
/// order here is the key order of the fixture file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoldenRecord {
    /// Text that was tokenized.
    pub input: String,
    /// Token ids, without special tokens.
    pub token_ids: Vec<u32>,
    /// `(start, end)` character spans in `input`.
    pub offsets: Vec<(usize, usize)>,
    /// Vocabulary string for each id.
    pub tokens: Vec<String>,
}

/// Offset that falls outside what the input can contain.
///
/// Never fatal: offsets for multi-byte glyphs are whatever the tokenizer
/// library says they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetAnomaly {
    /// `start > end`.
    Inverted { index: usize, start: usize, end: usize },
    /// `end` past the input's character count.
    OutOfBounds { index: usize, end: usize, len: usize },
    /// `start` lower than the previous token's start.
    Backwards { index: usize, start: usize, prev: usize },
}

impl GoldenRecord {
    /// Number of tokens in the record.
    pub fn len(&self) -> usize {
        self.token_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.token_ids.is_empty()
    }

    /// Check the alignment invariant and collect offset anomalies.
    ///
    /// Errors only when the three sequences have different lengths.
    pub fn validate(&self) -> Result<Vec<OffsetAnomaly>> {
        if self.offsets.len() != self.token_ids.len() || self.tokens.len() != self.token_ids.len()
        {
            return Err(GoldenError::MisalignedRecord {
                input: self.input.clone(),
                ids: self.token_ids.len(),
                offsets: self.offsets.len(),
                tokens: self.tokens.len(),
            });
        }

        let len = self.input.chars().count();
        let mut anomalies = Vec::new();
        let mut prev_start = 0;

        for (index, &(start, end)) in self.offsets.iter().enumerate() {
            if start > end {
                anomalies.push(OffsetAnomaly::Inverted { index, start, end });
            }
            if end > len {
                anomalies.push(OffsetAnomaly::OutOfBounds { index, end, len });
            }
            if start < prev_start {
                anomalies.push(OffsetAnomaly::Backwards {
                    index,
                    start,
                    prev: prev_start,
                });
            }
            prev_start = start;
        }

        Ok(anomalies)
    }
}
