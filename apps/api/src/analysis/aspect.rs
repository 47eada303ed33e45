use crate::analysis::prompts::{
    render, CONCEPT_PROMPT_TEMPLATE, EXPERIMENT_PROMPT_TEMPLATE, LANGUAGE_PROMPT_TEMPLATE,
};

/// One of the three independent analyses run before synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    Language,
    Concepts,
    Experiments,
}

impl AnalysisKind {
    pub fn template(self) -> &'static str {
        match self {
            AnalysisKind::Language => LANGUAGE_PROMPT_TEMPLATE,
            AnalysisKind::Concepts => CONCEPT_PROMPT_TEMPLATE,
            AnalysisKind::Experiments => EXPERIMENT_PROMPT_TEMPLATE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnalysisKind::Language => "language",
            AnalysisKind::Concepts => "concepts",
            AnalysisKind::Experiments => "experiments",
        }
    }

    pub fn prompt(self, abstract_text: &str) -> String {
        render(self.template(), &[("abstract", abstract_text)])
    }
}
