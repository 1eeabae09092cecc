//! HuggingFace tokenizers implementation.

use super::{Encoded, TokenizerProvider};
use crate::error::{GoldenError, Result};
use std::path::Path;
use tracing::info;

/// HuggingFace tokenizers implementation.
pub struct HfTokenizer {
    inner: tokenizers::Tokenizer,
}

impl HfTokenizer {
    /// Load tokenizer from HuggingFace Hub.
    ///
    /// Downloads `tokenizer.json` if not cached locally.
    pub fn from_hub(repo_id: &str) -> Result<Self> {
        let api = hf_hub::api::sync::Api::new().map_err(|e| {
            GoldenError::TokenizerLoad(format!("failed to initialize HF API: {e}"))
        })?;

        let repo = api.model(repo_id.to_string());

        let tokenizer_path = repo.get("tokenizer.json").map_err(|e| {
            GoldenError::TokenizerLoad(format!(
                "failed to download tokenizer from {repo_id}: {e}"
            ))
        })?;

        info!(repo_id, path = %tokenizer_path.display(), "tokenizer fetched");
        Self::from_file(&tokenizer_path)
    }

    /// Load tokenizer from local file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let inner = tokenizers::Tokenizer::from_file(path).map_err(|e| {
            GoldenError::TokenizerLoad(format!("{}: {e}", path.display()))
        })?;

        Ok(Self { inner })
    }

    /// Vocabulary size including added tokens.
    pub fn vocab_size(&self) -> usize {
        self.inner.get_vocab_size(true)
    }
}

impl TokenizerProvider for HfTokenizer {
    fn encode(&self, text: &str) -> Result<Encoded> {
        let encoding = self
            .inner
            .encode_char_offsets(text, false)
            .map_err(|e| GoldenError::Tokenization(format!("{text:?}: {e}")))?;

        Ok(Encoded {
            ids: encoding.get_ids().to_vec(),
            offsets: encoding.get_offsets().to_vec(),
        })
    }

    fn id_to_token(&self, id: u32) -> Result<String> {
        self.inner
            .id_to_token(id)
            .ok_or(GoldenError::UnknownTokenId(id))
    }
}
