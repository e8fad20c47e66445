// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Benchmark replay through the dispatch pipeline.
//!
//! Each run replays a fixed question set through a [`QueryPipeline`], scores
//! the responses, aggregates per-category accuracy, and writes one
//! timestamped JSON document per run.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::info;

use switchyard_core::{QueryPipeline, Session, SwitchyardError};

use crate::dataset::{EvalItem, GSM8K_PROBLEMS, LAMA_QUESTIONS};
use crate::extract::extract_numeric_answer;

/// Which benchmark to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalKind {
    /// Grade-school math, scored by numeric answer extraction.
    Gsm8k,
    /// Factual recall, scored by substring matching.
    Lama,
}

impl EvalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvalKind::Gsm8k => "gsm8k",
            EvalKind::Lama => "lama",
        }
    }

    fn dataset(&self) -> &'static [EvalItem] {
        match self {
            EvalKind::Gsm8k => GSM8K_PROBLEMS,
            EvalKind::Lama => LAMA_QUESTIONS,
        }
    }
}

impl std::fmt::Display for EvalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category tally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPerformance {
    pub correct: usize,
    pub total: usize,
    pub accuracy: f64,
}

/// One scored question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalDetail {
    pub question: String,
    pub expected_answer: String,
    pub extracted_answer: Option<String>,
    /// Response text, truncated to 300 characters.
    pub full_response: String,
    pub tool_used: String,
    pub correct: bool,
    pub category: String,
}

/// The results of one evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalResults {
    pub timestamp: String,
    pub total_questions: usize,
    pub correct_answers: usize,
    pub accuracy: f64,
    pub details: Vec<EvalDetail>,
    pub category_performance: BTreeMap<String, CategoryPerformance>,
}

/// Run a benchmark through the pipeline and persist the results.
///
/// Takes the first `num_questions` items of the fixed set, so repeated runs
/// score the same questions and stay comparable.
pub async fn run_evaluation(
    pipeline: &dyn QueryPipeline,
    kind: EvalKind,
    num_questions: usize,
    results_dir: &Path,
) -> Result<EvalResults, SwitchyardError> {
    let items = kind.dataset();
    let items = &items[..num_questions.min(items.len())];

    let mut results = EvalResults {
        timestamp: Local::now().to_rfc3339(),
        total_questions: items.len(),
        correct_answers: 0,
        accuracy: 0.0,
        details: Vec::with_capacity(items.len()),
        category_performance: BTreeMap::new(),
    };

    info!(kind = %kind, questions = items.len(), "starting evaluation");

    for (i, item) in items.iter().enumerate() {
        // Each question gets a fresh session: no cross-question context.
        let mut session = Session::new();
        let outcome = pipeline.process_query(&mut session, item.prompt).await;

        let (correct, extracted) = score(kind, item, &outcome.response);
        if correct {
            results.correct_answers += 1;
        }

        let perf = results
            .category_performance
            .entry(item.category.to_string())
            .or_default();
        perf.total += 1;
        if correct {
            perf.correct += 1;
        }

        results.details.push(EvalDetail {
            question: item.prompt.to_string(),
            expected_answer: item.answer.to_string(),
            extracted_answer: extracted,
            full_response: truncate(&outcome.response, 300),
            tool_used: outcome.tool_used,
            correct,
            category: item.category.to_string(),
        });

        info!(
            kind = %kind,
            question = i + 1,
            of = items.len(),
            correct,
            "evaluation step"
        );
    }

    results.accuracy = if results.total_questions > 0 {
        results.correct_answers as f64 / results.total_questions as f64
    } else {
        0.0
    };
    for perf in results.category_performance.values_mut() {
        perf.accuracy = if perf.total > 0 {
            perf.correct as f64 / perf.total as f64
        } else {
            0.0
        };
    }

    save_results(kind, &results, results_dir)?;
    info!(kind = %kind, accuracy = results.accuracy, "evaluation completed");

    Ok(results)
}

fn score(kind: EvalKind, item: &EvalItem, response: &str) -> (bool, Option<String>) {
    match kind {
        EvalKind::Gsm8k => {
            let extracted = extract_numeric_answer(response);
            let correct = extracted.as_deref() == Some(item.answer);
            (correct, extracted)
        }
        EvalKind::Lama => {
            let answer = item.answer.to_lowercase();
            let response = response.to_lowercase();
            let correct = response.contains(&answer)
                || answer
                    .split_whitespace()
                    .any(|word| word.len() > 2 && response.contains(word));
            (correct, None)
        }
    }
}

fn save_results(
    kind: EvalKind,
    results: &EvalResults,
    results_dir: &Path,
) -> Result<PathBuf, SwitchyardError> {
    fs::create_dir_all(results_dir).map_err(|e| {
        SwitchyardError::Internal(format!("failed to create results directory: {e}"))
    })?;

    let filename = format!(
        "{}_evaluation_{}.json",
        kind,
        Local::now().format("%Y%m%d_%H%M%S")
    );
    let path = results_dir.join(filename);
    let json = serde_json::to_string_pretty(results)
        .map_err(|e| SwitchyardError::Internal(format!("failed to encode results: {e}")))?;
    fs::write(&path, json)
        .map_err(|e| SwitchyardError::Internal(format!("failed to write results: {e}")))?;

    Ok(path)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let prefix: String = text.chars().take(max).collect();
        format!("{prefix}...")
    } else {
        text.to_string()
    }
}
