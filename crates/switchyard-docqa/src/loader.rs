// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document loading from the corpus directory.
//!
//! Supports plain text and markdown, PDF, and Word-processor files.
//! Unreadable files are skipped with a warning; one bad document must not
//! block indexing the rest of the corpus.

use std::fs;
use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{info, warn};

use switchyard_core::SwitchyardError;

/// One loaded document: the source file name and its extracted text.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub source: String,
    pub content: String,
}

/// Load every supported file in the corpus directory.
///
/// A missing directory yields an empty corpus rather than an error.
pub fn load_documents(dir: &Path) -> Result<Vec<LoadedDocument>, SwitchyardError> {
    let mut documents = Vec::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(documents),
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };

        match load_single(&path) {
            Ok(Some(content)) => {
                info!(source = %name, chars = content.chars().count(), "loaded document");
                documents.push(LoadedDocument {
                    source: name,
                    content,
                });
            }
            Ok(None) => {} // unsupported extension
            Err(e) => {
                warn!(source = %name, error = %e, "skipping unreadable document");
            }
        }
    }

    Ok(documents)
}

fn load_single(path: &Path) -> Result<Option<String>, SwitchyardError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let content = match extension.as_str() {
        "txt" | "md" => fs::read_to_string(path)
            .map_err(|e| SwitchyardError::retrieval(format!("read failed: {e}")))?,
        "pdf" => pdf_extract::extract_text(path)
            .map_err(|e| SwitchyardError::retrieval(format!("PDF extraction failed: {e}")))?,
        "docx" | "doc" => extract_docx_text(path)?,
        _ => return Ok(None),
    };

    Ok(Some(content))
}

/// Extract the text runs from a Word document's main part.
fn extract_docx_text(path: &Path) -> Result<String, SwitchyardError> {
    let file = fs::File::open(path)
        .map_err(|e| SwitchyardError::retrieval(format!("open failed: {e}")))?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| SwitchyardError::retrieval(format!("not a Word archive: {e}")))?;
    let mut document = archive
        .by_name("word/document.xml")
        .map_err(|e| SwitchyardError::retrieval(format!("missing document part: {e}")))?;

    let mut xml = String::new();
    document
        .read_to_string(&mut xml)
        .map_err(|e| SwitchyardError::retrieval(format!("read failed: {e}")))?;

    let mut reader = Reader::from_str(&xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.local_name().as_ref() == b"t" => {
                in_text_run = true;
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                // Paragraph boundaries become newlines.
                b"p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(ref t)) if in_text_run => {
                let fragment = t
                    .unescape()
                    .map_err(|e| SwitchyardError::retrieval(format!("bad XML text: {e}")))?;
                text.push_str(&fragment);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(SwitchyardError::retrieval(format!("XML parse failed: {e}")));
            }
            _ => {}
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn loads_text_and_markdown_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "plain text content").unwrap();
        fs::write(tmp.path().join("b.md"), "# markdown content").unwrap();

        let docs = load_documents(tmp.path()).unwrap();
        assert_eq!(docs.len(), 2);
        let sources: Vec<&str> = docs.iter().map(|d| d.source.as_str()).collect();
        assert!(sources.contains(&"a.txt"));
        assert!(sources.contains(&"b.md"));
    }

    #[test]
    fn unsupported_extensions_are_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("image.png"), [0u8; 8]).unwrap();
        fs::write(tmp.path().join("notes.txt"), "keep me").unwrap();

        let docs = load_documents(tmp.path()).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].source, "notes.txt");
    }

    #[test]
    fn missing_directory_yields_empty_corpus() {
        let docs = load_documents(Path::new("/nonexistent/switchyard-docs")).unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn corrupt_pdf_is_skipped_not_fatal() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("broken.pdf"), b"not a real pdf").unwrap();
        fs::write(tmp.path().join("good.txt"), "fine").unwrap();

        let docs = load_documents(tmp.path()).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].source, "good.txt");
    }
}
