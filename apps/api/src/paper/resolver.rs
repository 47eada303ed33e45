//! Abstract Resolver — turns a `PaperReference` into a bounded `AbstractText`.
//!
//! Flow: parse reference → (arXiv only) rewrite to PDF URL → fetch + extract text
//!       → three-tier abstract extraction → 1500-word truncation.

use std::sync::Arc;

use tracing::info;

use crate::errors::AppError;
use crate::paper::extract::AbstractExtractor;
use crate::paper::source::PaperSource;

/// Maximum number of whitespace-delimited words kept in an abstract.
pub const MAX_ABSTRACT_WORDS: usize = 1500;

/// User input: either the abstract itself or a link to an arXiv paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaperReference {
    Text(String),
    Arxiv(String),
}

impl PaperReference {
    /// Inputs starting with `http` and mentioning `arxiv.org` are links; anything else is text.
    pub fn parse(input: &str) -> Self {
        if input.starts_with("http") && input.contains("arxiv.org") {
            PaperReference::Arxiv(input.to_string())
        } else {
            PaperReference::Text(input.to_string())
        }
    }
}

/// Rewrites an arXiv abstract-page URL (`/abs/<id>`) to its PDF (`/pdf/<id>.pdf`).
/// Other arXiv URLs are returned unchanged.
pub fn arxiv_pdf_url(url: &str) -> String {
    if url.contains("/abs/") {
        format!("{}.pdf", url.replacen("/abs/", "/pdf/", 1))
    } else {
        url.to_string()
    }
}

/// Keeps the first `max_words` whitespace-delimited words, joined by single spaces.
/// Text at or under the limit is returned untouched.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    if text.split_whitespace().count() <= max_words {
        return text.to_string();
    }
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Clone)]
pub struct AbstractResolver {
    source: Arc<dyn PaperSource>,
    extractor: AbstractExtractor,
}

impl AbstractResolver {
    pub fn new(source: Arc<dyn PaperSource>, extractor: AbstractExtractor) -> Self {
        Self { source, extractor }
    }

    pub async fn resolve(&self, reference: &PaperReference) -> Result<String, AppError> {
        let abstract_text = match reference {
            PaperReference::Text(text) => text.clone(),
            PaperReference::Arxiv(url) => {
                let pdf_url = arxiv_pdf_url(url);
                let paper_text = self.source.fetch_text(&pdf_url).await?;
                self.extractor.extract(&paper_text)
            }
        };

        let truncated = truncate_words(&abstract_text, MAX_ABSTRACT_WORDS);
        if truncated.len() != abstract_text.len() {
            info!("Abstract truncated to {MAX_ABSTRACT_WORDS} words");
        }
        Ok(truncated)
    }
}
