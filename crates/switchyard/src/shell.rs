// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `switchyard shell` and `switchyard ask` command implementations.
//!
//! The shell is an interactive REPL with a colored prompt and readline
//! history. One session spans the whole shell run, so follow-up queries
//! see prior turns. `ask` processes a single query in a fresh session.

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use switchyard_config::model::SwitchyardConfig;
use switchyard_core::{QueryPipeline, Session, SwitchyardError};

use crate::agent::build_agent;

/// Runs a single query through the pipeline and prints the response.
pub async fn run_ask(config: &SwitchyardConfig, query: &str) -> Result<(), SwitchyardError> {
    let agent = build_agent(config);
    let mut session = Session::new();
    let outcome = agent.dispatcher.process_query(&mut session, query).await;

    println!("{}", outcome.response);
    eprintln!(
        "{}",
        format!("[routed to {} via {}]", outcome.tool_used, outcome.routing_decision).dimmed()
    );
    Ok(())
}

/// Runs the `switchyard shell` interactive REPL.
pub async fn run_shell(config: &SwitchyardConfig) -> Result<(), SwitchyardError> {
    let agent = build_agent(config);
    let mut session = Session::new();

    let mut rl = DefaultEditor::new()
        .map_err(|e| SwitchyardError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "switchyard shell".bold().green());
    println!(
        "Type {} to exit, {} to reset the session.\n",
        "/quit".yellow(),
        "/clear".yellow()
    );

    let prompt = format!("{}> ", "switchyard".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed == "/clear" {
                    session.clear();
                    println!("{}", "session cleared".dimmed());
                    continue;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                let outcome = agent.dispatcher.process_query(&mut session, trimmed).await;
                println!("{}", outcome.response);
                eprintln!(
                    "{}",
                    format!("[{}]", outcome.tool_used).dimmed()
                );
                debug!(
                    routing_decision = %outcome.routing_decision,
                    turns = session.len(),
                    "shell query processed"
                );
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}
