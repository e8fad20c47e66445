// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Comparison across saved evaluation runs.

use std::fs;
use std::path::Path;

use serde::Serialize;

use switchyard_core::SwitchyardError;

use crate::harness::{EvalKind, EvalResults};

/// Accuracy delta between the two most recent runs of a benchmark.
#[derive(Debug, Clone, Serialize)]
pub struct RunComparison {
    pub latest_accuracy: f64,
    pub previous_accuracy: f64,
    pub improvement: f64,
    pub latest_date: String,
    pub previous_date: String,
    pub trend: &'static str,
}

/// One entry in the run history.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub date: String,
    pub accuracy: f64,
    pub total_questions: usize,
    pub correct_answers: usize,
}

/// Compare the two most recent result files for `kind`.
///
/// Returns `None` when fewer than two runs exist.
pub fn compare_runs(
    kind: EvalKind,
    results_dir: &Path,
) -> Result<Option<RunComparison>, SwitchyardError> {
    let mut runs = load_runs(kind, results_dir)?;
    if runs.len() < 2 {
        return Ok(None);
    }
    let latest = runs.pop().map(|(_, r)| r);
    let previous = runs.pop().map(|(_, r)| r);
    let (Some(latest), Some(previous)) = (latest, previous) else {
        return Ok(None);
    };

    let improvement = latest.accuracy - previous.accuracy;
    Ok(Some(RunComparison {
        latest_accuracy: latest.accuracy,
        previous_accuracy: previous.accuracy,
        improvement,
        latest_date: latest.timestamp,
        previous_date: previous.timestamp,
        trend: if improvement >= 0.0 {
            "improving"
        } else {
            "declining"
        },
    }))
}

/// All saved runs for `kind`, oldest first.
pub fn run_history(kind: EvalKind, results_dir: &Path) -> Result<Vec<HistoryEntry>, SwitchyardError> {
    let runs = load_runs(kind, results_dir)?;
    Ok(runs
        .into_iter()
        .map(|(_, r)| HistoryEntry {
            date: r.timestamp,
            accuracy: r.accuracy,
            total_questions: r.total_questions,
            correct_answers: r.correct_answers,
        })
        .collect())
}

/// Result files sorted by filename, which sorts by run time thanks to the
/// `{kind}_evaluation_{YYYYmmdd_HHMMSS}.json` naming scheme.
fn load_runs(
    kind: EvalKind,
    results_dir: &Path,
) -> Result<Vec<(String, EvalResults)>, SwitchyardError> {
    if !results_dir.is_dir() {
        return Ok(Vec::new());
    }

    let prefix = format!("{kind}_evaluation_");
    let mut names: Vec<String> = fs::read_dir(results_dir)
        .map_err(|e| SwitchyardError::Internal(format!("failed to read results directory: {e}")))?
        .flatten()
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with(&prefix) && name.ends_with(".json"))
        .collect();
    names.sort();

    let mut runs = Vec::with_capacity(names.len());
    for name in names {
        let content = fs::read_to_string(results_dir.join(&name))
            .map_err(|e| SwitchyardError::Internal(format!("failed to read {name}: {e}")))?;
        match serde_json::from_str::<EvalResults>(&content) {
            Ok(results) => runs.push((name, results)),
            Err(e) => {
                tracing::warn!(file = %name, error = %e, "skipping unreadable results file");
            }
        }
    }
    Ok(runs)
}
