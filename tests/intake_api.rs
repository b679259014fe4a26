// tests/intake_api.rs

use filedrop::progress::CallbackProgress;
use filedrop::source::{DiskSource, FileSource, MemorySource};
use filedrop::{
    CancellationToken, ErrorCode, IntakeSession, NoOpProgress, ProcessingOptions, SessionState,
    ValidationRules,
};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::{tempdir, TempDir};

// --- Test Harness for reducing boilerplate ---

/// Manages the environment for a single intake API test.
struct TestHarness {
    _temp_dir: TempDir,
    root: PathBuf,
    token: CancellationToken,
}

impl TestHarness {
    fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
            token: CancellationToken::new(),
        }
    }

    /// Creates a file on disk and returns a source for it.
    fn file(&self, name: &str, content: &[u8]) -> DiskSource {
        let path = self.root.join(name);
        fs::write(&path, content).unwrap();
        DiskSource::open(&path).unwrap()
    }
}

// --- Tests ---

#[test]
fn test_disk_intake_end_to_end() {
    let harness = TestHarness::new();
    let source = harness.file("minutes.txt", b"first line\nsecond line\n");

    let mut session = IntakeSession::new(
        ValidationRules::default()
            .allowed_mime_types(["text/plain"])
            .allowed_extensions(["txt"]),
        ProcessingOptions::default().compute_digest(true),
    );

    let processed = session.process(&source, &harness.token).unwrap();
    assert_eq!(processed.name, "minutes.txt");
    assert_eq!(processed.size, 23);
    assert_eq!(processed.mime_type, "text/plain");
    assert!(processed.last_modified.is_some());
    assert_eq!(processed.content, "first line\nsecond line\n");

    let counts = processed.counts.unwrap();
    assert_eq!(counts.words, 4);
    assert_eq!(counts.lines, 3); // trailing empty segment counts

    let digest = processed.digest.clone().unwrap();
    assert_eq!(digest.len(), 64);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_digest_is_stable_across_sessions() {
    let harness = TestHarness::new();
    let source = harness.file("a.txt", b"stable content");
    let options = ProcessingOptions::default().compute_digest(true);

    let mut first = IntakeSession::new(ValidationRules::default(), options.clone());
    let mut second = IntakeSession::new(ValidationRules::default(), options);

    let d1 = first
        .process(&source, &harness.token)
        .unwrap()
        .digest
        .clone();
    let d2 = second
        .process(&source, &harness.token)
        .unwrap()
        .digest
        .clone();
    assert_eq!(d1, d2);

    let changed = harness.file("b.txt", b"stable content!");
    let d3 = first
        .process(&changed, &harness.token)
        .unwrap()
        .digest
        .clone();
    assert_ne!(d1, d3);
}

#[test]
fn test_rule_failures_identify_the_rule() {
    let harness = TestHarness::new();
    let mut session = IntakeSession::new(
        ValidationRules::default()
            .max_size(100)
            .allowed_extensions(["csv"]),
        ProcessingOptions::default(),
    );

    let wrong_ext = harness.file("data.txt", b"a,b\n");
    let err = session.process(&wrong_ext, &harness.token).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Validation);
    assert!(err.to_string().contains("extension 'txt'"));

    let too_big = harness.file("data.csv", &[b'x'; 101]);
    let err = session.process(&too_big, &harness.token).unwrap_err();
    assert!(err.to_string().contains("maximum"));

    // Nothing reached the processed list.
    assert!(session.processed().is_empty());
}

#[test]
fn test_batch_reports_exact_progress_and_order() {
    let harness = TestHarness::new();
    let files: Vec<Box<dyn FileSource>> = vec![
        Box::new(harness.file("a.txt", b"aaa")),
        Box::new(harness.file("b.txt", b"bbb")),
        Box::new(harness.file("c.txt", b"ccc")),
        Box::new(harness.file("d.txt", b"ddd")),
    ];

    let seen: Arc<Mutex<Vec<(u64, u64)>>> = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    let reporter =
        CallbackProgress::new(move |pos, len| seen_clone.lock().unwrap().push((pos, len)));

    let mut session = IntakeSession::new(ValidationRules::default(), ProcessingOptions::default());
    let outcome = session.process_batch(&files, &reporter, &harness.token);

    assert_eq!(outcome.succeeded, 4);
    assert!(outcome.failed.is_empty());

    let positions = seen.lock().unwrap();
    assert_eq!(*positions, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);

    let names: Vec<&str> = session
        .processed()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["a.txt", "b.txt", "c.txt", "d.txt"]);
}

#[test]
fn test_batch_partial_failure_policy() {
    let harness = TestHarness::new();
    let files: Vec<Box<dyn FileSource>> = vec![
        Box::new(harness.file("keep1.txt", b"fine")),
        Box::new(MemorySource::new("broken.txt", "text/plain", "x").with_read_error("io lost")),
        Box::new(harness.file("keep2.txt", b"also fine")),
    ];

    let mut session = IntakeSession::new(ValidationRules::default(), ProcessingOptions::default());
    let outcome = session.process_batch(&files, &NoOpProgress, &harness.token);

    assert_eq!(outcome.succeeded, 2);
    assert_eq!(outcome.failed.len(), 1);
    assert_eq!(outcome.failed[0].code, ErrorCode::Processing);
    assert_eq!(outcome.failed[0].file.as_deref(), Some("broken.txt"));

    let names: Vec<&str> = session
        .processed()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["keep1.txt", "keep2.txt"]);

    // The failure is also visible in the session error slot.
    assert_eq!(
        session.last_error().unwrap().file.as_deref(),
        Some("broken.txt")
    );
}

#[test]
fn test_cancellation_before_batch() {
    let harness = TestHarness::new();
    harness.token.cancel();

    let files: Vec<Box<dyn FileSource>> = vec![Box::new(harness.file("a.txt", b"abc"))];
    let mut session = IntakeSession::new(ValidationRules::default(), ProcessingOptions::default());
    let outcome = session.process_batch(&files, &NoOpProgress, &harness.token);

    assert!(outcome.cancelled);
    assert_eq!(outcome.succeeded, 0);
    assert!(session.processed().is_empty());
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(
        session.last_error().unwrap().code,
        ErrorCode::Processing
    );
}

#[test]
fn test_invalid_utf8_is_a_processing_error() {
    let harness = TestHarness::new();
    let source = harness.file("latin1.txt", &[b'c', b'a', b'f', 0xe9]);

    let mut session = IntakeSession::new(ValidationRules::default(), ProcessingOptions::default());
    let err = session.process(&source, &harness.token).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Processing);

    // Lossy decoding accepts the same bytes.
    let mut lossy = IntakeSession::new(
        ValidationRules::default(),
        ProcessingOptions::default().encoding(filedrop::TextEncoding::Utf8Lossy),
    );
    let processed = lossy.process(&source, &harness.token).unwrap();
    assert_eq!(processed.encoding, "utf-8 (lossy)");
    assert!(processed.content.starts_with("caf"));
}
