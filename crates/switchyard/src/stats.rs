// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `switchyard index` and `switchyard stats` command implementations.

use colored::Colorize;

use switchyard_config::model::SwitchyardConfig;
use switchyard_core::SwitchyardError;
use switchyard_docqa::Retriever;
use switchyard_log::InteractionLog;

/// Rebuilds the document index from the configured documents directory.
pub fn run_index(config: &SwitchyardConfig) -> Result<(), SwitchyardError> {
    let retriever = Retriever::new(config.retrieval.clone());
    let count = retriever.rebuild()?;

    if count == 0 {
        println!(
            "No documents found in {}",
            config.retrieval.documents_dir.yellow()
        );
    } else {
        println!(
            "Indexed {} chunks from {}",
            count.to_string().green(),
            config.retrieval.documents_dir
        );
        println!("Index written to {}", config.retrieval.index_path.dimmed());
    }
    Ok(())
}

/// Prints routing statistics aggregated from the interaction log.
pub fn run_stats(config: &SwitchyardConfig) -> Result<(), SwitchyardError> {
    let log = InteractionLog::new(config.log.dir.clone());
    let stats = log.routing_stats();

    if stats.is_empty() {
        println!("No interactions logged yet.");
        return Ok(());
    }

    let total: usize = stats.values().sum();
    println!("{}", "routing statistics".bold());
    for (decision, count) in &stats {
        let share = *count as f64 / total as f64 * 100.0;
        println!("  {decision:<16} {count:>6}  ({share:.1}%)");
    }
    println!("  {:<16} {total:>6}", "total".dimmed());
    Ok(())
}
