//! Critique style — selects the tone instruction injected into the synthesis prompt.

use crate::analysis::prompts::{
    AGGRESSIVE_STYLE_INSTRUCTION, ANGRY_STYLE_INSTRUCTION, SARCASTIC_STYLE_INSTRUCTION,
    WEARY_STYLE_INSTRUCTION,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    Sarcastic,
    Angry,
    Weary,
    /// Used for any absent or unrecognised style tag.
    #[default]
    Aggressive,
}

impl Style {
    /// Tags are matched exactly (`"Sarcastic"`, `"Angry"`, `"Weary"`).
    pub fn parse(tag: Option<&str>) -> Self {
        match tag {
            Some("Sarcastic") => Style::Sarcastic,
            Some("Angry") => Style::Angry,
            Some("Weary") => Style::Weary,
            _ => Style::Aggressive,
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            Style::Sarcastic => SARCASTIC_STYLE_INSTRUCTION,
            Style::Angry => ANGRY_STYLE_INSTRUCTION,
            Style::Weary => WEARY_STYLE_INSTRUCTION,
            Style::Aggressive => AGGRESSIVE_STYLE_INSTRUCTION,
        }
    }
}
