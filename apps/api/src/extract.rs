//! Text extraction for uploaded documents.
//!
//! Extraction never aborts a screening batch: a failure degrades to an
//! inline `[Error reading ...]` placeholder that flows into scoring as-is,
//! so one unreadable resume costs only its own score.

use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use tracing::warn;

/// Extracts text from an uploaded file, dispatching on the filename extension.
/// Unknown binary formats and parse failures yield placeholder text.
pub fn extract_text(filename: &str, data: &[u8]) -> String {
    match extension(filename).as_deref() {
        Some("pdf") => extract_pdf(data),
        Some("docx") => extract_docx(data),
        Some("txt") | Some("md") | None => String::from_utf8_lossy(data).into_owned(),
        Some(other) => {
            warn!("Unsupported upload type '{other}' for {filename}");
            format!("[Unsupported file type: {other}]")
        }
    }
}

fn extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

fn extract_pdf(data: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(data) {
        Ok(text) => text,
        Err(e) => {
            warn!("PDF extraction failed: {e}");
            format!("[Error reading PDF: {e}]")
        }
    }
}

fn extract_docx(data: &[u8]) -> String {
    match docx_rs::read_docx(data) {
        Ok(docx) => {
            let mut paragraphs: Vec<String> = Vec::new();
            for child in &docx.document.children {
                if let DocumentChild::Paragraph(paragraph) = child {
                    let line: String = paragraph
                        .children
                        .iter()
                        .filter_map(|child| match child {
                            ParagraphChild::Run(run) => Some(
                                run.children
                                    .iter()
                                    .filter_map(|run_child| match run_child {
                                        RunChild::Text(text) => Some(text.text.as_str()),
                                        _ => None,
                                    })
                                    .collect::<String>(),
                            ),
                            _ => None,
                        })
                        .collect();
                    paragraphs.push(line);
                }
            }
            paragraphs.join("\n")
        }
        Err(e) => {
            warn!("DOCX extraction failed: {e}");
            format!("[Error reading DOCX: {e}]")
        }
    }
}

/// Derives a candidate display name from an uploaded resume's filename:
/// extension stripped, underscores to spaces, each word title-cased.
pub fn candidate_name(filename: &str) -> String {
    let stem = filename.rsplit_once('.').map_or(filename, |(stem, _)| stem);
    stem.replace('_', " ")
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
