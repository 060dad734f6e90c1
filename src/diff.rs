/// One line of the match/mismatch report.
#[derive(Debug, Clone, PartialEq)]
pub struct LineDiff {
    pub original: String,
    pub typed: String,
    pub matched: bool,
}

/// Pair up original and typed text line by line.
///
/// Both texts are trimmed as a whole and split on newlines; lines are
/// paired naively by index and compared after a per-line trim. The
/// report always has one entry per original line: a missing typed line
/// shows up as empty, and typed lines beyond the original's count are
/// dropped from the report. Internal whitespace is NOT normalized here,
/// so this view can flag lines the character-level scorer considers
/// clean.
pub fn diff_lines(original: &str, typed: &str) -> Vec<LineDiff> {
    let typed_lines: Vec<&str> = typed.trim().lines().collect();

    original
        .trim()
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            let typed_line = typed_lines.get(idx).copied().unwrap_or("");
            LineDiff {
                original: line.to_string(),
                typed: typed_line.to_string(),
                matched: line.trim() == typed_line.trim(),
            }
        })
        .collect()
}
