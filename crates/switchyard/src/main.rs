// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Switchyard - a query-routing agent.
//!
//! This is the binary entry point for the Switchyard agent.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod agent;
mod eval;
mod shell;
mod stats;

use clap::{Parser, Subcommand};
use switchyard_eval::EvalKind;

/// Switchyard - a query-routing agent.
#[derive(Parser, Debug)]
#[command(name = "switchyard", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Route a single query and print the response.
    Ask {
        /// The query to process.
        query: String,
    },
    /// Launch an interactive REPL session.
    Shell,
    /// Rebuild the document index from the configured documents directory.
    Index,
    /// Show routing statistics from the interaction log.
    Stats,
    /// Run an evaluation benchmark through the pipeline.
    Eval {
        /// Benchmark to run: gsm8k or lama.
        benchmark: String,
        /// Number of questions to evaluate.
        #[arg(long, default_value_t = 10)]
        num: usize,
        /// Compare against the previous run instead of evaluating.
        #[arg(long)]
        compare: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match switchyard_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            switchyard_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    let result = match cli.command {
        Some(Commands::Ask { query }) => shell::run_ask(&config, &query).await,
        Some(Commands::Shell) => shell::run_shell(&config).await,
        Some(Commands::Index) => stats::run_index(&config),
        Some(Commands::Stats) => stats::run_stats(&config),
        Some(Commands::Eval {
            benchmark,
            num,
            compare,
        }) => {
            let kind = match benchmark.as_str() {
                "gsm8k" => EvalKind::Gsm8k,
                "lama" => EvalKind::Lama,
                other => {
                    eprintln!("unknown benchmark: {other} (expected gsm8k or lama)");
                    std::process::exit(2);
                }
            };
            if compare {
                eval::run_compare(&config, kind)
            } else {
                eval::run_eval(&config, kind, num).await
            }
        }
        None => {
            println!("switchyard: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("switchyard={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

#[cfg(test)]
mod tests {
    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        // Verify jemalloc is the global allocator by advancing the epoch.
        // Only jemalloc supports this -- the system allocator would fail.
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn binary_loads_config_defaults() {
        // Verify config loads with defaults (no config file needed)
        let config =
            switchyard_config::load_and_validate().expect("default config should be valid");
        assert_eq!(config.agent.name, "switchyard");
    }
}
