//! Critique pipeline — two stages over the completion client.
//!
//! Stage 1 (`fan_out`): language, concept and experiment analyses run as independent
//! tokio tasks. The first failure is returned immediately. The other tasks are
//! detached, not aborted, and their results are discarded.
//! Stage 2 (`synthesize`): one sequential call combining the three analyses, the
//! abstract, the bias document and the style instruction.

use std::sync::Arc;

use anyhow::anyhow;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::info;

use crate::analysis::aspect::AnalysisKind;
use crate::analysis::prompts::{render, SYNTHESIS_PROMPT_TEMPLATE};
use crate::analysis::style::Style;
use crate::errors::AppError;
use crate::llm_client::{CompletionClient, LlmError};

/// Output of stage 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AspectAnalyses {
    pub language: String,
    pub concepts: String,
    pub experiments: String,
}

/// Full `/analyze` result, serialized with the field names the browser client reads.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub language_analysis: String,
    pub concept_revelation: String,
    pub experiment_analysis: String,
    pub sarcastic_rewrite: String,
}

#[derive(Clone)]
pub struct CritiquePipeline {
    llm: Arc<dyn CompletionClient>,
}

impl CritiquePipeline {
    pub fn new(llm: Arc<dyn CompletionClient>) -> Self {
        Self { llm }
    }

    /// Stage 1: runs the three aspect analyses concurrently and waits for all of them.
    pub async fn fan_out(&self, abstract_text: &str) -> Result<AspectAnalyses, AppError> {
        let language = self.spawn_aspect(AnalysisKind::Language, abstract_text);
        let concepts = self.spawn_aspect(AnalysisKind::Concepts, abstract_text);
        let experiments = self.spawn_aspect(AnalysisKind::Experiments, abstract_text);

        let (language, concepts, experiments) = tokio::try_join!(
            join_aspect(AnalysisKind::Language, language),
            join_aspect(AnalysisKind::Concepts, concepts),
            join_aspect(AnalysisKind::Experiments, experiments),
        )?;

        Ok(AspectAnalyses {
            language,
            concepts,
            experiments,
        })
    }

    /// Stage 2: a single completion over everything gathered so far.
    pub async fn synthesize(
        &self,
        analyses: &AspectAnalyses,
        abstract_text: &str,
        bias_document: &str,
        style: Style,
    ) -> Result<String, AppError> {
        let prompt = synthesis_prompt(analyses, abstract_text, bias_document, style);
        Ok(self.llm.complete(&prompt).await?)
    }

    pub async fn run(
        &self,
        abstract_text: &str,
        bias_document: &str,
        style: Style,
    ) -> Result<AnalysisResult, AppError> {
        let analyses = self.fan_out(abstract_text).await?;
        info!("Aspect analyses complete, synthesizing with {:?} style", style);
        let sarcastic_rewrite = self
            .synthesize(&analyses, abstract_text, bias_document, style)
            .await?;

        Ok(AnalysisResult {
            language_analysis: analyses.language,
            concept_revelation: analyses.concepts,
            experiment_analysis: analyses.experiments,
            sarcastic_rewrite,
        })
    }

    fn spawn_aspect(
        &self,
        kind: AnalysisKind,
        abstract_text: &str,
    ) -> JoinHandle<Result<String, LlmError>> {
        let llm = Arc::clone(&self.llm);
        let prompt = kind.prompt(abstract_text);
        tokio::spawn(async move { llm.complete(&prompt).await })
    }
}

async fn join_aspect(
    kind: AnalysisKind,
    handle: JoinHandle<Result<String, LlmError>>,
) -> Result<String, AppError> {
    match handle.await {
        Ok(result) => Ok(result?),
        Err(e) => Err(AppError::Internal(anyhow!(
            "{} analysis task failed: {e}",
            kind.label()
        ))),
    }
}

/// Builds the stage 2 prompt.
pub fn synthesis_prompt(
    analyses: &AspectAnalyses,
    abstract_text: &str,
    bias_document: &str,
    style: Style,
) -> String {
    render(
        SYNTHESIS_PROMPT_TEMPLATE,
        &[
            ("language", analyses.language.as_str()),
            ("concepts", analyses.concepts.as_str()),
            ("experiments", analyses.experiments.as_str()),
            ("style_instruction", style.instruction()),
            ("abstract", abstract_text),
            ("bias", bias_document),
        ],
    )
}
