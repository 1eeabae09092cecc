//! Tokenizer access for fixture generation.
//!
//! The tokenizer is an external collaborator: this module only describes how
//! to reach one ([`TokenizerSource`]) and what the generator needs from it
//! ([`TokenizerProvider`]). Encoding itself is delegated to the HuggingFace
//! `tokenizers` crate through [`HfTokenizer`].

mod hf;

pub use hf::HfTokenizer;

use crate::error::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// Model identifier used when nothing else is configured.
pub const DEFAULT_MODEL: &str = "xlm-roberta-base";

/// Token ids and character offsets for one input, positionally aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoded {
    pub ids: Vec<u32>,
    /// `(start, end)` spans counted in characters of the input.
    pub offsets: Vec<(usize, usize)>,
}

/// What the generator needs from a tokenizer.
pub trait TokenizerProvider {
    /// Encode `text` without special tokens, returning character offsets.
    fn encode(&self, text: &str) -> Result<Encoded>;

    /// Resolve a token id to its vocabulary string.
    fn id_to_token(&self, id: u32) -> Result<String>;
}

impl<T: TokenizerProvider + ?Sized> TokenizerProvider for &T {
    fn encode(&self, text: &str) -> Result<Encoded> {
        (**self).encode(text)
    }

    fn id_to_token(&self, id: u32) -> Result<String> {
        (**self).id_to_token(id)
    }
}

/// Source for a tokenizer model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizerSource {
    /// Download `tokenizer.json` from a HuggingFace Hub repository.
    HuggingFace { repo_id: String },
    /// Load a `tokenizer.json` from disk.
    Local { path: PathBuf },
}

impl TokenizerSource {
    /// Create a HuggingFace source.
    pub fn huggingface(repo_id: impl Into<String>) -> Self {
        Self::HuggingFace {
            repo_id: repo_id.into(),
        }
    }

    /// Create a local source.
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self::Local { path: path.into() }
    }

    /// Interpret a model identifier.
    ///
    /// An existing file, or anything ending in `.json`, is a local
    /// tokenizer; everything else is a hub repository id.
    pub fn parse(model: &str) -> Self {
        let path = Path::new(model);
        if path.is_file() || model.ends_with(".json") {
            Self::local(path)
        } else {
            Self::huggingface(model)
        }
    }

    /// Load the tokenizer this source points at.
    pub fn load(&self) -> Result<HfTokenizer> {
        match self {
            Self::HuggingFace { repo_id } => HfTokenizer::from_hub(repo_id),
            Self::Local { path } => HfTokenizer::from_file(path),
        }
    }
}

impl Default for TokenizerSource {
    fn default() -> Self {
        Self::huggingface(DEFAULT_MODEL)
    }
}

impl fmt::Display for TokenizerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HuggingFace { repo_id } => write!(f, "hf:{repo_id}"),
            Self::Local { path } => write!(f, "file:{}", path.display()),
        }
    }
}
