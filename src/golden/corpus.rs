//! Fixed input corpus.

/// Inputs tokenized into the golden file, in output order.
const DEFAULT_CORPUS: &[&str] = &[
    "Hello",
    "Hello world",
    "Hello world.",
    "I want to",
    "Thank you very much.",
    "This is a test sentence.",
    "The quick brown fox jumps over the lazy dog.",
    "",         // empty string
    "café",     // non-ASCII
    "你好世界", // Chinese
    "🎉",       // emoji
];

/// The fixed corpus every golden file is generated from.
pub fn default_corpus() -> &'static [&'static str] {
    DEFAULT_CORPUS
}
