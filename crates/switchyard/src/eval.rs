// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `switchyard eval` command implementation.
//!
//! Replays a benchmark through the live pipeline and prints a summary,
//! or compares the two most recent saved runs.

use std::path::Path;

use colored::Colorize;

use switchyard_config::model::SwitchyardConfig;
use switchyard_core::SwitchyardError;
use switchyard_eval::{compare_runs, run_evaluation, EvalKind};

use crate::agent::build_agent;

/// Runs a benchmark through the pipeline and prints the results.
pub async fn run_eval(
    config: &SwitchyardConfig,
    kind: EvalKind,
    num: usize,
) -> Result<(), SwitchyardError> {
    let agent = build_agent(config);
    let results_dir = Path::new(&config.eval.results_dir);

    println!("Running {} evaluation ({num} questions)...\n", kind.as_str().bold());

    let results = run_evaluation(&agent.dispatcher, kind, num, results_dir).await?;

    for detail in &results.details {
        let mark = if detail.correct {
            "PASS".green()
        } else {
            "FAIL".red()
        };
        println!("  [{mark}] {} ({})", truncate(&detail.question, 60), detail.category);
    }

    println!(
        "\n{}: {}/{} ({:.1}%)",
        "accuracy".bold(),
        results.correct_answers,
        results.total_questions,
        results.accuracy * 100.0
    );

    println!("\n{}", "by category".bold());
    for (category, perf) in &results.category_performance {
        println!(
            "  {category:<18} {}/{} ({:.1}%)",
            perf.correct,
            perf.total,
            perf.accuracy * 100.0
        );
    }
    Ok(())
}

/// Compares the two most recent saved runs of a benchmark.
pub fn run_compare(config: &SwitchyardConfig, kind: EvalKind) -> Result<(), SwitchyardError> {
    let results_dir = Path::new(&config.eval.results_dir);
    match compare_runs(kind, results_dir)? {
        Some(cmp) => {
            println!("{} comparison", kind.as_str().bold());
            println!("  latest:   {:.1}%  ({})", cmp.latest_accuracy * 100.0, cmp.latest_date);
            println!(
                "  previous: {:.1}%  ({})",
                cmp.previous_accuracy * 100.0,
                cmp.previous_date
            );
            let delta = format!("{:+.1}%", cmp.improvement * 100.0);
            let delta = if cmp.improvement >= 0.0 {
                delta.green()
            } else {
                delta.red()
            };
            println!("  change:   {delta}  ({})", cmp.trend);
        }
        None => {
            println!(
                "Need at least two saved {} runs to compare.",
                kind.as_str()
            );
        }
    }
    Ok(())
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let prefix: String = text.chars().take(max).collect();
        format!("{prefix}...")
    } else {
        text.to_string()
    }
}
