// Library surface for headless/integration tests and reuse.
// The binary in main.rs only wires these together against stdin/stdout.
pub mod config;
pub mod diff;
pub mod error;
pub mod history;
pub mod leaderboard;
pub mod report;
pub mod score;
pub mod session;
pub mod snippet;
