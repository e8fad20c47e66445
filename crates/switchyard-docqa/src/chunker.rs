// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Overlapping text chunking for the retrieval index.
//!
//! Splits text into chunks of at most `chunk_size` characters with
//! `overlap` characters carried into the next chunk. Cuts prefer natural
//! boundaries in order: paragraph break, line break, sentence end, word
//! boundary.

/// Split text into overlapping chunks.
pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Vec<String> {
    assert!(chunk_size > 0, "chunk_size must be positive");
    assert!(overlap < chunk_size, "overlap must be smaller than chunk_size");

    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let hard_end = (start + chunk_size).min(chars.len());
        let end = if hard_end < chars.len() {
            find_cut(&chars, start, hard_end)
        } else {
            hard_end
        };

        let chunk: String = chars[start..end].iter().collect();
        let trimmed = chunk.trim();
        if !trimmed.is_empty() {
            chunks.push(trimmed.to_string());
        }

        if end >= chars.len() {
            break;
        }
        // Overlap carries trailing context into the next chunk, but the
        // window must always advance.
        start = end.saturating_sub(overlap).max(start + 1);
    }

    chunks
}

/// Find the best cut point in `(start, hard_end]`, preferring paragraph
/// breaks, then line breaks, then sentence ends, then spaces. Boundaries in
/// the first half of the window are ignored so chunks stay reasonably full.
fn find_cut(chars: &[char], start: usize, hard_end: usize) -> usize {
    let floor = start + (hard_end - start) / 2;

    let mut last_paragraph = None;
    let mut last_newline = None;
    let mut last_sentence = None;
    let mut last_space = None;

    for i in (floor..hard_end).rev() {
        match chars[i] {
            '\n' => {
                if i > 0 && chars[i - 1] == '\n' && last_paragraph.is_none() {
                    last_paragraph = Some(i + 1);
                }
                if last_newline.is_none() {
                    last_newline = Some(i + 1);
                }
            }
            ' ' => {
                if i > 0 && chars[i - 1] == '.' && last_sentence.is_none() {
                    last_sentence = Some(i + 1);
                }
                if last_space.is_none() {
                    last_space = Some(i + 1);
                }
            }
            _ => {}
        }
        if last_paragraph.is_some() {
            break;
        }
    }

    last_paragraph
        .or(last_newline)
        .or(last_sentence)
        .or(last_space)
        .unwrap_or(hard_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_chunk() {
        let chunks = chunk_text("hello world", 1000, 200);
        assert_eq!(chunks, vec!["hello world"]);
    }

    #[test]
    fn empty_text_yields_no_chunks() {
        assert!(chunk_text("", 1000, 200).is_empty());
        assert!(chunk_text("   \n\n  ", 1000, 200).is_empty());
    }

    #[test]
    fn long_text_is_split_with_overlap() {
        let sentence = "The quick brown fox jumps over the lazy dog. ";
        let text = sentence.repeat(100);
        let chunks = chunk_text(&text, 500, 100);

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 500);
        }
        // Adjacent chunks share overlapping text.
        let tail: String = chunks[0].chars().rev().take(50).collect();
        let tail: String = tail.chars().rev().collect();
        assert!(chunks[1].contains(tail.trim()));
    }

    #[test]
    fn cuts_prefer_paragraph_breaks() {
        let paragraph = "word ".repeat(60);
        let text = format!("{paragraph}\n\n{paragraph}");
        let chunks = chunk_text(&text, 350, 0);
        // The first chunk ends where the paragraph does.
        assert!(chunks[0].ends_with("word"));
        assert!(!chunks[0].contains('\n'));
    }

    #[test]
    fn chunker_always_terminates() {
        // Pathological input with no boundaries at all.
        let text = "x".repeat(5000);
        let chunks = chunk_text(&text, 1000, 200);
        assert!(chunks.len() >= 5);
        assert_eq!(chunks[0].len(), 1000);
    }

    #[test]
    fn multibyte_text_is_handled_by_chars() {
        let text = "héllo wörld ".repeat(200);
        let chunks = chunk_text(&text, 300, 50);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 300);
        }
    }
}
