//! End-to-end generation against a small local tokenizer.
//!
//! `tests/fixtures/wordlevel_tokenizer.json` is a whitespace-split word-level
//! model, so every expected id and offset below can be read off its vocab.

use std::fs;
use std::path::{Path, PathBuf};

use sat_golden::{
    CheckOutcome, GoldenError, GoldenRecord, Generator, HfTokenizer, TokenizerProvider,
    TokenizerSource, default_corpus, fixture,
};

fn fixture_tokenizer_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/wordlevel_tokenizer.json")
}

fn fixture_tokenizer() -> HfTokenizer {
    TokenizerSource::local(fixture_tokenizer_path())
        .load()
        .expect("fixture tokenizer should load")
}

fn generate() -> Vec<GoldenRecord> {
    Generator::new(fixture_tokenizer())
        .generate(default_corpus())
        .expect("generation should succeed")
}

// ============================================================================
// Records
// ============================================================================

#[test]
fn generates_one_record_per_input_in_order() {
    let records = generate();
    assert_eq!(records.len(), 11);
    for (record, input) in records.iter().zip(default_corpus()) {
        assert_eq!(record.input, *input);
    }
}

#[test]
fn every_record_is_aligned_and_in_bounds() {
    for record in generate() {
        assert_eq!(record.token_ids.len(), record.offsets.len());
        assert_eq!(record.token_ids.len(), record.tokens.len());

        let anomalies = record.validate().expect("record should be aligned");
        assert!(anomalies.is_empty(), "{:?}: {anomalies:?}", record.input);
    }
}

#[test]
fn hello_world_record() {
    let records = generate();
    let record = records
        .iter()
        .find(|r| r.input == "Hello world")
        .expect("corpus contains Hello world");

    assert_eq!(record.token_ids, vec![1, 2]);
    assert_eq!(record.offsets, vec![(0, 5), (6, 11)]);
    assert_eq!(record.tokens, vec!["Hello", "world"]);
}

#[test]
fn empty_input_has_empty_sequences() {
    let records = generate();
    let record = records.iter().find(|r| r.input.is_empty()).unwrap();
    assert!(record.token_ids.is_empty());
    assert!(record.offsets.is_empty());
    assert!(record.tokens.is_empty());
}

#[test]
fn offsets_count_characters_not_bytes() {
    let tokenizer = fixture_tokenizer();

    let encoded = tokenizer.encode("café").unwrap();
    assert_eq!(encoded.ids, vec![25]);
    assert_eq!(encoded.offsets, vec![(0, 4)]);

    let encoded = tokenizer.encode("你好世界").unwrap();
    assert_eq!(encoded.offsets, vec![(0, 4)]);

    let encoded = tokenizer.encode("🎉").unwrap();
    assert_eq!(encoded.offsets, vec![(0, 1)]);
}

#[test]
fn unknown_words_resolve_to_unk_token() {
    let records = generate();
    let record = records.iter().find(|r| r.input == "你好世界").unwrap();
    assert_eq!(record.token_ids, vec![0]);
    assert_eq!(record.tokens, vec!["[UNK]"]);
}

#[test]
fn id_outside_vocab_is_an_error() {
    let err = fixture_tokenizer().id_to_token(9_999).unwrap_err();
    assert!(matches!(err, GoldenError::UnknownTokenId(9_999)));
}

// ============================================================================
// Golden file
// ============================================================================

#[test]
fn written_file_parses_back_to_the_same_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokenizer_golden.json");
    let records = generate();

    fixture::write(&path, &records).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let array = value.as_array().expect("top level is an array");
    assert_eq!(array.len(), 11);
    assert_eq!(array[1]["input"], "Hello world");
    assert_eq!(array[1]["offsets"][1], serde_json::json!([6, 11]));

    assert_eq!(fixture::load(&path).unwrap(), records);
}

#[test]
fn generation_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    fixture::write(&first, &generate()).unwrap();
    fixture::write(&second, &generate()).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn non_ascii_written_literally() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokenizer_golden.json");
    fixture::write(&path, &generate()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"café\""));
    assert!(text.contains("\"你好世界\""));
    assert!(text.contains("\"🎉\""));
    assert!(text.starts_with("[\n  {\n    \"input\": \"Hello\","));
}

#[test]
fn write_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokenizer_golden.json");
    fs::write(&path, "stale content that is much longer than nothing at all").unwrap();

    fixture::write(&path, &[]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn missing_destination_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("testdata").join("tokenizer_golden.json");

    let err = fixture::write(&path, &generate()).unwrap_err();
    assert!(matches!(err, GoldenError::Io { .. }));
    assert!(!path.parent().unwrap().exists(), "directory must not be created");
}

#[test]
fn check_detects_tampered_golden_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokenizer_golden.json");
    let records = generate();
    fixture::write(&path, &records).unwrap();

    assert_eq!(
        fixture::check(&path, &records).unwrap(),
        CheckOutcome::UpToDate
    );

    let mut tampered = records.clone();
    tampered[0].token_ids = vec![42];
    fixture::write(&path, &tampered).unwrap();

    match fixture::check(&path, &records).unwrap() {
        CheckOutcome::Stale(diffs) => {
            assert_eq!(diffs.len(), 1);
            assert!(diffs[0].to_string().contains("[42] -> [1]"));
        }
        other => panic!("expected stale golden file, got {other:?}"),
    }
}
