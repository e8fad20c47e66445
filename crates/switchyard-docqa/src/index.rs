// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! TF-IDF chunk index with atomic rebuild.
//!
//! The index is immutable once built. [`Retriever`] holds it behind an
//! `ArcSwapOption`, so a rebuild constructs a complete new index and swaps
//! the pointer: concurrent readers always see either the old snapshot or the
//! new one, never a half-built state.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use serde::{Deserialize, Serialize};
use tracing::info;

use switchyard_config::model::RetrievalConfig;
use switchyard_core::SwitchyardError;

use crate::chunker::chunk_text;
use crate::loader::load_documents;

/// One indexed chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub content: String,
    pub source: String,
}

/// One retrieval hit.
#[derive(Debug, Clone)]
pub struct ScoredChunk {
    pub content: String,
    pub source_label: String,
    pub score: f64,
}

/// Persisted index snapshot.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    chunks: Vec<Chunk>,
}

/// Immutable TF-IDF index over document chunks.
#[derive(Debug)]
pub struct ChunkIndex {
    chunks: Vec<Chunk>,
    /// Per-chunk term frequency vectors, normalized to unit length.
    vectors: Vec<HashMap<String, f64>>,
    idf: HashMap<String, f64>,
}

impl ChunkIndex {
    /// Build an index from chunks.
    pub fn build(chunks: Vec<Chunk>) -> Self {
        let total = chunks.len() as f64;
        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        let term_lists: Vec<Vec<String>> = chunks
            .iter()
            .map(|chunk| tokenize(&chunk.content))
            .collect();

        for terms in &term_lists {
            let mut seen: Vec<&String> = terms.iter().collect();
            seen.sort();
            seen.dedup();
            for term in seen {
                *document_frequency.entry(term.clone()).or_insert(0) += 1;
            }
        }

        let idf: HashMap<String, f64> = document_frequency
            .into_iter()
            .map(|(term, df)| (term, (1.0 + total / (1.0 + df as f64)).ln()))
            .collect();

        let vectors = term_lists
            .iter()
            .map(|terms| weigh(terms, &idf))
            .collect();

        Self {
            chunks,
            vectors,
            idf,
        }
    }

    /// Number of indexed chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// The `top_k` chunks most similar to the question, best first.
    /// Zero-similarity chunks are excluded.
    pub fn similarity_search(&self, question: &str, top_k: usize) -> Vec<ScoredChunk> {
        let query = weigh(&tokenize(question), &self.idf);
        if query.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, f64)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(i, vector)| (i, cosine(&query, vector)))
            .filter(|(_, score)| *score > 0.0)
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);

        scored
            .into_iter()
            .map(|(i, score)| ScoredChunk {
                content: self.chunks[i].content.clone(),
                source_label: self.chunks[i].source.clone(),
                score,
            })
            .collect()
    }

    fn save(&self, path: &Path) -> Result<(), SwitchyardError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SwitchyardError::retrieval(format!("failed to create index directory: {e}"))
            })?;
        }
        let snapshot = Snapshot {
            chunks: self.chunks.clone(),
        };
        let json = serde_json::to_string(&snapshot)
            .map_err(|e| SwitchyardError::retrieval(format!("snapshot encode failed: {e}")))?;
        fs::write(path, json)
            .map_err(|e| SwitchyardError::retrieval(format!("snapshot write failed: {e}")))
    }

    fn load(path: &Path) -> Result<Self, SwitchyardError> {
        let json = fs::read_to_string(path)
            .map_err(|e| SwitchyardError::retrieval(format!("snapshot read failed: {e}")))?;
        let snapshot: Snapshot = serde_json::from_str(&json)
            .map_err(|e| SwitchyardError::retrieval(format!("snapshot decode failed: {e}")))?;
        Ok(Self::build(snapshot.chunks))
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.len() > 1)
        .map(|token| token.to_string())
        .collect()
}

fn weigh(terms: &[String], idf: &HashMap<String, f64>) -> HashMap<String, f64> {
    let mut tf: HashMap<String, f64> = HashMap::new();
    for term in terms {
        *tf.entry(term.clone()).or_insert(0.0) += 1.0;
    }

    let mut vector: HashMap<String, f64> = tf
        .into_iter()
        .filter_map(|(term, count)| idf.get(&term).map(|w| (term, count * w)))
        .collect();

    let norm: f64 = vector.values().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for value in vector.values_mut() {
            *value /= norm;
        }
    }
    vector
}

fn cosine(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(term, v)| large.get(term).map(|w| v * w))
        .sum()
}

/// The retrieval collaborator: owns the current index and its snapshot path.
pub struct Retriever {
    config: RetrievalConfig,
    index: ArcSwapOption<ChunkIndex>,
}

impl Retriever {
    /// Create a retriever, loading the persisted snapshot when one exists.
    pub fn new(config: RetrievalConfig) -> Self {
        let index = match ChunkIndex::load(Path::new(&config.index_path)) {
            Ok(index) => {
                info!(chunks = index.len(), "loaded retrieval index snapshot");
                ArcSwapOption::from_pointee(index)
            }
            Err(_) => ArcSwapOption::empty(),
        };
        Self { config, index }
    }

    /// Re-read the corpus directory, build a fresh index, persist it, and
    /// atomically replace the active index. Returns the chunk count.
    pub fn rebuild(&self) -> Result<usize, SwitchyardError> {
        let documents = load_documents(Path::new(&self.config.documents_dir))?;

        let mut chunks = Vec::new();
        for document in &documents {
            for content in chunk_text(
                &document.content,
                self.config.chunk_size,
                self.config.chunk_overlap,
            ) {
                chunks.push(Chunk {
                    content,
                    source: document.source.clone(),
                });
            }
        }
        info!(
            documents = documents.len(),
            chunks = chunks.len(),
            "rebuilt retrieval index"
        );

        let index = ChunkIndex::build(chunks);
        index.save(Path::new(&self.config.index_path))?;

        let count = index.len();
        self.index.store(Some(Arc::new(index)));
        Ok(count)
    }

    /// Search the active index. `None` when no index has been built yet.
    pub fn similarity_search(&self, question: &str) -> Option<Vec<ScoredChunk>> {
        let guard = self.index.load();
        guard
            .as_ref()
            .map(|index| index.similarity_search(question, self.config.top_k))
    }

    /// Number of chunks in the active index, zero when absent.
    pub fn chunk_count(&self) -> usize {
        self.index.load().as_ref().map_or(0, |index| index.len())
    }
}
