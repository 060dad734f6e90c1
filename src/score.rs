use itertools::Itertools;

/// Collapse every run of whitespace to a single space and trim the ends.
///
/// Only the character-level scoring path goes through this; the line
/// diff in [`crate::diff`] compares per-line trimmed text instead, so
/// the two views can legitimately disagree on what counts as an error.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().join(" ")
}

/// Metrics for one completed transcription attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub elapsed_secs: f64,
    pub errors: usize,
    pub accuracy: f64,
    pub wpm: f64,
}

/// Score a typed transcription against the original snippet.
///
/// Both texts are normalized before comparison. The error count is a
/// position-wise character mismatch count plus the length difference as
/// a single aggregate penalty; it is not an edit distance, so one early
/// insertion can cascade into many counted errors.
///
/// All arithmetic edge cases resolve to defined numbers: a zero-length
/// normalized original yields accuracy 100 when the typed text is also
/// empty (0 otherwise), and zero elapsed time or empty input yields a
/// WPM of 0 rather than infinity. Never returns NaN.
pub fn score(original: &str, typed: &str, elapsed_ms: u64) -> ScoreResult {
    let original = normalize(original);
    let typed = normalize(typed);

    let errors = count_errors(&original, &typed);

    let original_len = original.chars().count();
    let accuracy = if original_len == 0 {
        if errors == 0 {
            100.0
        } else {
            0.0
        }
    } else {
        (original_len as f64 - errors as f64) / original_len as f64 * 100.0
    };

    let elapsed_secs = elapsed_ms as f64 / 1000.0;
    let words = if typed.is_empty() {
        0
    } else {
        typed.split(' ').count()
    };
    let wpm = if elapsed_ms == 0 || words == 0 {
        0.0
    } else {
        words as f64 / (elapsed_secs / 60.0)
    };

    ScoreResult {
        elapsed_secs,
        errors,
        accuracy,
        wpm,
    }
}

fn count_errors(original: &str, typed: &str) -> usize {
    let mismatches = original
        .chars()
        .zip(typed.chars())
        .filter(|(expected, got)| expected != got)
        .count();
    let original_len = original.chars().count();
    let typed_len = typed.chars().count();

    mismatches + original_len.abs_diff(typed_len)
}
