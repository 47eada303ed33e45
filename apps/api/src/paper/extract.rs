//! Abstract extraction — locates the abstract inside raw PDF text.
//!
//! Three tiers, first match wins:
//! 1. heading match: `abstract` up to the first blank line, numbered line,
//!    `introduction` or `related work` line
//! 2. first two-line paragraph between blank lines
//! 3. first 500 characters
//!
//! Spaces after the heading and one blank line directly beneath it belong to the
//! heading. A single newline does not, so a terminator right under the heading
//! still ends the span there.
//!
//! The heading match is loose on purpose. Papers whose headings are irregular can
//! pull later content into the span, and a numbered terminator such as `\n1`
//! stays in the result.

use regex::Regex;
use tracing::debug;

const HEADING_PATTERN: &str = r"(?i)abstract[ \t]*(?:\n\n)?(?s:.*?)(?:\n\n|\n[0-9]|\nintroduction|\n1\.\s*introduction|\nrelated\s*work)";
const HEADING_PREFIX_PATTERN: &str = r"(?i)^abstract\s*";
const TRAILING_SECTION_PATTERN: &str = r"\n\n.*$";
const PARAGRAPH_PATTERN: &str = r"\n\n([^\n]+\n[^\n]+[^\n]+)\n\n";

/// Number of characters returned when no abstract-shaped span is found.
pub const PREFIX_FALLBACK_CHARS: usize = 500;

/// Which heuristic produced the abstract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionTier {
    Heading,
    FirstParagraph,
    Prefix,
}

/// Compiled patterns for the three-tier heuristic. Build once and share.
#[derive(Debug, Clone)]
pub struct AbstractExtractor {
    heading: Regex,
    heading_prefix: Regex,
    trailing_section: Regex,
    paragraph: Regex,
}

impl AbstractExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            heading: Regex::new(HEADING_PATTERN)?,
            heading_prefix: Regex::new(HEADING_PREFIX_PATTERN)?,
            trailing_section: Regex::new(TRAILING_SECTION_PATTERN)?,
            paragraph: Regex::new(PARAGRAPH_PATTERN)?,
        })
    }

    /// Returns the abstract and the tier that found it.
    pub fn extract_with_tier(&self, text: &str) -> (String, ExtractionTier) {
        if let Some(m) = self.heading.find(text) {
            let without_heading = self.heading_prefix.replace(m.as_str(), "");
            let without_trailer = self.trailing_section.replace(&without_heading, "");
            return (without_trailer.trim().to_string(), ExtractionTier::Heading);
        }

        if let Some(caps) = self.paragraph.captures(text) {
            return (caps[1].trim().to_string(), ExtractionTier::FirstParagraph);
        }

        (
            text.chars().take(PREFIX_FALLBACK_CHARS).collect(),
            ExtractionTier::Prefix,
        )
    }

    pub fn extract(&self, text: &str) -> String {
        let (abstract_text, tier) = self.extract_with_tier(text);
        debug!(
            "Abstract located via {:?} ({} chars)",
            tier,
            abstract_text.chars().count()
        );
        abstract_text
    }
}
