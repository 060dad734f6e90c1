use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use crate::config::UserConfig;
use crate::diff::{diff_lines, LineDiff};
use crate::history;
use crate::leaderboard::{LeaderboardEntry, LeaderboardStore};
use crate::report;
use crate::score::{score, ScoreResult};

/// One event from the typed-input channel.
#[derive(Debug, Clone, PartialEq)]
pub enum LineEvent {
    Line(String),
    /// End of input; the terminal signal, nothing follows it.
    Closed,
}

/// Source of typed lines with an explicit close signal, so the session
/// state machine can be driven by a finite scripted sequence in tests.
pub trait LineSource {
    fn next_event(&mut self) -> LineEvent;
}

/// Production line source over any buffered reader (stdin in the binary).
pub struct ReaderLineSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ReaderLineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderLineSource<R> {
    fn next_event(&mut self) -> LineEvent {
        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            Ok(0) | Err(_) => LineEvent::Closed,
            Ok(_) => {
                while buf.ends_with('\n') || buf.ends_with('\r') {
                    buf.pop();
                }
                LineEvent::Line(buf)
            }
        }
    }
}

/// Scripted line source for tests: yields the given lines, then Closed.
pub struct ScriptedLineSource {
    lines: VecDeque<String>,
}

impl ScriptedLineSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// A source that closes immediately, without a ready line.
    pub fn closed() -> Self {
        Self {
            lines: VecDeque::new(),
        }
    }
}

impl LineSource for ScriptedLineSource {
    fn next_event(&mut self) -> LineEvent {
        match self.lines.pop_front() {
            Some(line) => LineEvent::Line(line),
            None => LineEvent::Closed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    AwaitingReady,
    Capturing,
    Scored,
}

/// Everything produced by a completed session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub user: String,
    pub score: ScoreResult,
    pub diff: Vec<LineDiff>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// Input closed before capture started; nothing scored or persisted.
    Aborted,
    Completed(SessionSummary),
}

/// Drives one practice attempt end to end: renders the snippet, waits
/// for the ready line, captures typed lines until the input closes,
/// then scores, diffs, updates the leaderboard, and renders the report.
///
/// The start timestamp is taken exactly once, on the transition into
/// `Capturing`; input is never read (let alone buffered) before then.
pub struct SessionController<'a, L, S, W>
where
    L: LineSource,
    S: LeaderboardStore,
    W: Write,
{
    snippet: String,
    lines: L,
    store: &'a S,
    out: W,
    user: UserConfig,
    phase: SessionPhase,
    typed_lines: Vec<String>,
    started_at: Option<Instant>,
    history_path: Option<PathBuf>,
}

impl<'a, L, S, W> SessionController<'a, L, S, W>
where
    L: LineSource,
    S: LeaderboardStore,
    W: Write,
{
    pub fn new(
        snippet: impl Into<String>,
        lines: L,
        store: &'a S,
        out: W,
        user: UserConfig,
    ) -> Self {
        Self {
            snippet: snippet.into(),
            lines,
            store,
            out,
            user,
            phase: SessionPhase::Idle,
            typed_lines: Vec::new(),
            started_at: None,
            history_path: None,
        }
    }

    /// Also append completed sessions to a CSV history log (best effort).
    pub fn with_history_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_path = Some(path.into());
        self
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn run(mut self) -> io::Result<SessionOutcome> {
        report::render_snippet(&mut self.out, &self.snippet)?;
        self.phase = SessionPhase::AwaitingReady;

        // any content on the ready line is ignored, only the event matters
        match self.lines.next_event() {
            LineEvent::Closed => {
                // aborted before the clock started: no score, no update
                self.out.flush()?;
                return Ok(SessionOutcome::Aborted);
            }
            LineEvent::Line(_) => {}
        }

        self.started_at = Some(Instant::now());
        self.phase = SessionPhase::Capturing;
        report::render_capture_prompt(&mut self.out)?;

        loop {
            match self.lines.next_event() {
                LineEvent::Line(line) => self.typed_lines.push(line),
                LineEvent::Closed => break,
            }
        }

        let elapsed_ms = self
            .started_at
            .map(|started| started.elapsed().as_millis() as u64)
            .unwrap_or(0);
        self.phase = SessionPhase::Scored;

        let typed = self.typed_lines.join("\n");
        let result = score(&self.snippet, &typed, elapsed_ms);
        let diff = diff_lines(&self.snippet, &typed);

        let user = self.user.resolve().to_string();
        let entry =
            LeaderboardEntry::new(user.clone(), result.wpm, result.accuracy, result.elapsed_secs);
        let leaderboard = self.store.record(entry)?;

        report::render_results(&mut self.out, &result)?;
        report::render_diff(&mut self.out, &diff)?;
        report::render_leaderboard(&mut self.out, &leaderboard)?;
        self.out.flush()?;

        if let Some(path) = &self.history_path {
            let _ = history::append(path, &user, &result);
        }

        Ok(SessionOutcome::Completed(SessionSummary {
            user,
            score: result,
            diff,
            leaderboard,
        }))
    }
}
