// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The document question-answering handler.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use switchyard_core::{
    ChatMessage, Handler, Oracle, OracleRequest, RoutingLabel, SwitchyardError,
};

use crate::index::{Retriever, ScoredChunk};

const QA_TEMPERATURE: f32 = 0.2;

const QA_SYSTEM_PROMPT: &str = r#"You are a helpful document analysis assistant. Answer questions based ONLY on the provided document context.

Rules:
1. Use only information from the provided documents
2. If the answer isn't in the documents, say so clearly
3. Cite which document(s) you're referencing
4. Be concise but comprehensive
5. If multiple documents contain relevant info, synthesize them
6. Maintain accuracy - don't make assumptions beyond the text"#;

/// Handler bound to the `document_qa` routing label.
///
/// Retrieves the most similar chunks and asks the oracle to answer from
/// that context only. Without an oracle (or when the oracle call fails) it
/// degrades to raw document excerpts.
pub struct DocumentQaHandler {
    retriever: Arc<Retriever>,
    oracle: Option<Arc<dyn Oracle>>,
    model: Option<String>,
}

impl DocumentQaHandler {
    pub fn new(
        retriever: Arc<Retriever>,
        oracle: Option<Arc<dyn Oracle>>,
        model: Option<String>,
    ) -> Self {
        Self {
            retriever,
            oracle,
            model,
        }
    }

    async fn answer_from_context(
        &self,
        question: &str,
        hits: &[ScoredChunk],
    ) -> String {
        let oracle = match &self.oracle {
            Some(oracle) => oracle,
            None => return excerpt_answer(hits),
        };

        let context = build_context(hits);
        let user_prompt = format!(
            "Context from documents:\n{context}\n\nQuestion: {question}\n\nPlease provide a detailed answer based on the document content above."
        );

        let mut request = OracleRequest::new(
            vec![
                ChatMessage::system(QA_SYSTEM_PROMPT),
                ChatMessage::user(user_prompt),
            ],
            QA_TEMPERATURE,
        );
        if let Some(model) = &self.model {
            request = request.with_model(model.clone());
        }

        match oracle.complete(request).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!(error = %e, "answer generation failed, falling back to excerpts");
                excerpt_answer(hits)
            }
        }
    }
}

#[async_trait]
impl Handler for DocumentQaHandler {
    fn name(&self) -> &str {
        "Document QA"
    }

    fn label(&self) -> RoutingLabel {
        RoutingLabel::DocumentQa
    }

    async fn execute(&self, query: &str) -> Result<String, SwitchyardError> {
        let hits = match self.retriever.similarity_search(query) {
            Some(hits) => hits,
            None => {
                return Ok(
                    "No documents available. Please upload documents first.".to_string(),
                )
            }
        };

        if hits.is_empty() {
            return Ok("No relevant information found in the documents.".to_string());
        }

        let answer = self.answer_from_context(query, &hits).await;
        Ok(format_qa_response(query, &answer, &hits))
    }
}

fn build_context(hits: &[ScoredChunk]) -> String {
    hits.iter()
        .enumerate()
        .map(|(i, hit)| format!("Document {} ({}):\n{}", i + 1, hit.source_label, hit.content))
        .collect::<Vec<String>>()
        .join("\n\n")
}

/// Plain-excerpt answer used when no oracle is available.
fn excerpt_answer(hits: &[ScoredChunk]) -> String {
    let mut answer = String::from("Based on the uploaded documents:\n\n");
    for hit in hits {
        let content: String = if hit.content.chars().count() > 300 {
            let prefix: String = hit.content.chars().take(300).collect();
            format!("{prefix}...")
        } else {
            hit.content.clone()
        };
        answer.push_str(&format!("**From {}:**\n{content}\n\n", hit.source_label));
    }
    answer.push_str("*Note: Advanced analysis unavailable (LLM not configured)*");
    answer
}

fn format_qa_response(question: &str, answer: &str, hits: &[ScoredChunk]) -> String {
    let sources: BTreeSet<&str> = hits.iter().map(|h| h.source_label.as_str()).collect();

    let mut text = String::from("**Document-Based Answer**\n\n");
    text.push_str(&format!("**Question:** {question}\n\n"));
    text.push_str(&format!("**Answer:**\n{answer}\n\n"));
    text.push_str("**Sources:**\n");
    for source in &sources {
        text.push_str(&format!("- {source}\n"));
    }
    text.push_str(&format!(
        "\n*Answer generated from {} relevant document sections*",
        hits.len()
    ));
    text
}
