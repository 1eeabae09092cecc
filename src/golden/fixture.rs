//! Golden file I/O.
//!
//! The file layout matches what the consuming test suites already parse: a
//! JSON array, 2-space indentation, non-ASCII characters written literally,
//! and no trailing newline.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::info;

use super::GoldenRecord;
use crate::error::{GoldenError, Result};

/// Default destination, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "testdata/tokenizer_golden.json";

/// Render records as the exact golden file text.
pub fn render(records: &[GoldenRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Overwrite `path` with the rendered records.
///
/// The parent directory must already exist; it is never created.
pub fn write(path: &Path, records: &[GoldenRecord]) -> Result<()> {
    let content = render(records)?;
    fs::write(path, content).map_err(|e| GoldenError::io(path, e))?;
    info!(path = %path.display(), records = records.len(), "golden file written");
    Ok(())
}

/// Read an existing golden file.
pub fn load(path: &Path) -> Result<Vec<GoldenRecord>> {
    let content = fs::read_to_string(path).map_err(|e| GoldenError::io(path, e))?;
    Ok(serde_json::from_str(&content)?)
}

/// Result of comparing fresh records with a golden file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The file is byte-identical to what would be written.
    UpToDate,
    /// Same records, different text (indentation, escaping, trailing newline).
    Reformatted,
    /// Records differ.
    Stale(Vec<RecordDiff>),
}

/// Compare `records` with the golden file at `path` without writing.
pub fn check(path: &Path, records: &[GoldenRecord]) -> Result<CheckOutcome> {
    let on_disk = fs::read_to_string(path).map_err(|e| GoldenError::io(path, e))?;
    if on_disk == render(records)? {
        return Ok(CheckOutcome::UpToDate);
    }

    let expected: Vec<GoldenRecord> = serde_json::from_str(&on_disk)?;
    let diffs = compare(&expected, records);
    if diffs.is_empty() {
        Ok(CheckOutcome::Reformatted)
    } else {
        Ok(CheckOutcome::Stale(diffs))
    }
}

/// One difference between an expected and an actual record list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordDiff {
    /// Same position, different content.
    Changed {
        index: usize,
        expected: GoldenRecord,
        actual: GoldenRecord,
    },
    /// Present in the expected list only.
    Missing { index: usize, input: String },
    /// Present in the actual list only.
    Unexpected { index: usize, input: String },
}

impl fmt::Display for RecordDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Changed {
                index,
                expected,
                actual,
            } => {
                write!(f, "#{index} {:?}:", expected.input)?;
                if expected.input != actual.input {
                    write!(f, " input is now {:?};", actual.input)?;
                }
                if expected.token_ids != actual.token_ids {
                    write!(
                        f,
                        " token_ids {:?} -> {:?};",
                        expected.token_ids, actual.token_ids
                    )?;
                }
                if expected.offsets != actual.offsets {
                    write!(
                        f,
                        " offsets {:?} -> {:?};",
                        expected.offsets, actual.offsets
                    )?;
                }
                if expected.tokens != actual.tokens {
                    write!(f, " tokens {:?} -> {:?};", expected.tokens, actual.tokens)?;
                }
                Ok(())
            }
            Self::Missing { index, input } => write!(f, "#{index} {input:?}: no longer generated"),
            Self::Unexpected { index, input } => write!(f, "#{index} {input:?}: not in golden file"),
        }
    }
}

/// Compare records position by position.
pub fn compare(expected: &[GoldenRecord], actual: &[GoldenRecord]) -> Vec<RecordDiff> {
    let mut diffs: Vec<RecordDiff> = expected
        .iter()
        .zip(actual)
        .enumerate()
        .filter(|(_, (e, a))| e != a)
        .map(|(index, (e, a))| RecordDiff::Changed {
            index,
            expected: e.clone(),
            actual: a.clone(),
        })
        .collect();

    let common = expected.len().min(actual.len());
    diffs.extend(
        expected[common..]
            .iter()
            .enumerate()
            .map(|(i, r)| RecordDiff::Missing {
                index: common + i,
                input: r.input.clone(),
            }),
    );
    diffs.extend(
        actual[common..]
            .iter()
            .enumerate()
            .map(|(i, r)| RecordDiff::Unexpected {
                index: common + i,
                input: r.input.clone(),
            }),
    );

    diffs
}
