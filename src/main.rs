use std::io;
use std::process;

use typedash::config::{self, UserConfig};
use typedash::error::Result;
use typedash::history;
use typedash::leaderboard::FileLeaderboardStore;
use typedash::session::{ReaderLineSource, SessionController};
use typedash::snippet::SnippetSet;

fn main() {
    if let Err(err) = run() {
        eprintln!("typedash: {err}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let snippets = SnippetSet::load(config::snippets_path())?;
    let snippet = snippets.pick_random().to_string();

    let store = FileLeaderboardStore::new(config::leaderboard_path());
    let stdin = io::stdin();
    let lines = ReaderLineSource::new(stdin.lock());

    let mut controller = SessionController::new(
        snippet,
        lines,
        &store,
        io::stdout(),
        UserConfig::from_env(),
    );
    if let Some(path) = history::history_path() {
        controller = controller.with_history_path(path);
    }
    controller.run()?;

    Ok(())
}
