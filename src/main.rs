//! Strictly Rounds - terminal front end.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io::Write;
use strictly_rounds::shell::{render_engine, replay, Shell};
use strictly_rounds::{Phase, ShellConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ShellConfig::load_or_default(&cli.config)?;
    initialize_tracing(&config);

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_shell(config, cli.json),
        Command::Replay { moves } => run_replay(&moves, cli.json),
    }
}

/// Logs go to stderr so stdout carries only the board.
fn initialize_tracing(config: &ShellConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive shell on stdin/stdout
#[instrument(skip(config))]
fn run_shell(config: ShellConfig, json: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(config, stdin.lock(), stdout.lock()).with_json(json);
    shell.run()?;
    Ok(())
}

/// Replay a move list and print the final state
#[instrument]
fn run_replay(moves: &[usize], json: bool) -> Result<()> {
    let report = replay(moves);
    info!(applied = report.applied, ignored = report.ignored, "Replay finished");

    let mut out = std::io::stdout().lock();
    if json {
        let summary = serde_json::json!({
            "applied": report.applied,
            "ignored": report.ignored,
            "last": report.last,
            "state": report.engine.snapshot(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        let outcome = match report.engine.phase() {
            Phase::Idle => "No moves played".to_string(),
            Phase::InProgress => format!("Player {} to move", report.engine.current_player()),
            Phase::Won(mark) => format!("Player {} wins", mark),
            Phase::Drawn => "Draw".to_string(),
        };
        writeln!(out, "{}", render_engine(&report.engine))?;
        writeln!(
            out,
            "{} ({} applied, {} ignored)",
            outcome, report.applied, report.ignored
        )?;
    }
    Ok(())
}
