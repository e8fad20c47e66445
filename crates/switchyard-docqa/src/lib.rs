// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document question answering for Switchyard.
//!
//! Loads a corpus of text, PDF, and Word documents, chunks it with overlap,
//! and serves similarity search over a TF-IDF index. Rebuilds are atomic:
//! a new index is built and swapped in whole, so concurrent readers never
//! observe a partially-built index. The handler retrieves the most similar
//! chunks and asks an oracle to answer strictly from that context.

pub mod chunker;
pub mod handler;
pub mod index;
pub mod loader;

pub use handler::DocumentQaHandler;
pub use index::{Chunk, ChunkIndex, Retriever, ScoredChunk};
