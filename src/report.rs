//! Styled terminal rendering. Styling is cosmetic: every functional
//! value is plain text inside the color codes.

use crossterm::style::Stylize;
use std::io::{self, Write};

use crate::diff::LineDiff;
use crate::leaderboard::LeaderboardEntry;
use crate::score::ScoreResult;

const SEPARATOR: &str = "========================================";

pub fn render_snippet(out: &mut impl Write, snippet: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        "📜 Type the following code as fast and accurately as you can:".cyan()
    )?;
    writeln!(out)?;
    writeln!(out, "{}", SEPARATOR.yellow())?;
    writeln!(out, "{}", snippet.green())?;
    writeln!(out, "{}", SEPARATOR.yellow())?;
    writeln!(out)?;
    writeln!(out, "{}", "Press Enter when ready...".magenta())?;
    Ok(())
}

pub fn render_capture_prompt(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        "📝 Start typing your input. Press Ctrl+D when finished:".blue()
    )?;
    writeln!(out)?;
    Ok(())
}

pub fn render_results(out: &mut impl Write, score: &ScoreResult) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "--- 📊 Results ---".yellow())?;
    writeln!(out, "⏱ Time taken: {:.2}s", score.elapsed_secs)?;
    writeln!(out, "❌ Errors: {}", score.errors)?;
    writeln!(out, "✅ Accuracy: {:.2}%", score.accuracy)?;
    writeln!(out, "⌨️ WPM: {:.2}", score.wpm)?;
    Ok(())
}

pub fn render_diff(out: &mut impl Write, report: &[LineDiff]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "--- 🔍 Diff View ---".yellow())?;
    for line in report {
        if line.matched {
            writeln!(out, "{}", format!("✔ {}", line.original).green())?;
        } else {
            writeln!(out, "{}", format!("✘ {}", line.original).red())?;
            writeln!(out, "{}", format!("↳ You typed: {}", line.typed).yellow())?;
        }
    }
    Ok(())
}

pub fn render_leaderboard(out: &mut impl Write, entries: &[LeaderboardEntry]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "🏆 Top 10 Leaderboard:".yellow())?;
    for (rank, entry) in entries.iter().enumerate() {
        writeln!(
            out,
            "{}. {} - {} WPM, {}% Accuracy, {}s",
            rank + 1,
            entry.user,
            entry.wpm,
            entry.accuracy,
            entry.time
        )?;
    }
    Ok(())
}
