//! Analysis operations behind the HTTP endpoints.
//!
//! Full critique: resolve → read bias document → pipeline (fan-out, then synthesis).
//! Go-crazy: resolve → one scramble call.
//! Single-aspect endpoints take the abstract as-is: no resolution, no bias injection.

use std::sync::Arc;

use tracing::info;

use crate::analysis::aspect::AnalysisKind;
use crate::analysis::pipeline::{AnalysisResult, CritiquePipeline};
use crate::analysis::prompts::{render, GO_CRAZY_PROMPT_TEMPLATE, SARCASTIC_REWRITE_PROMPT_TEMPLATE};
use crate::analysis::style::Style;
use crate::bias::BiasStore;
use crate::errors::AppError;
use crate::llm_client::CompletionClient;
use crate::paper::resolver::{AbstractResolver, PaperReference};

pub async fn analyze(
    resolver: &AbstractResolver,
    bias: &dyn BiasStore,
    llm: Arc<dyn CompletionClient>,
    input: &str,
    style: Style,
) -> Result<AnalysisResult, AppError> {
    let reference = PaperReference::parse(input);
    if let PaperReference::Arxiv(url) = &reference {
        info!("Resolving abstract from {url}");
    }
    let abstract_text = resolver.resolve(&reference).await?;
    let bias_document = bias.read().await?;

    CritiquePipeline::new(llm)
        .run(&abstract_text, &bias_document, style)
        .await
}

pub async fn go_crazy(
    resolver: &AbstractResolver,
    llm: &dyn CompletionClient,
    input: &str,
) -> Result<String, AppError> {
    let abstract_text = resolver.resolve(&PaperReference::parse(input)).await?;
    let prompt = render(GO_CRAZY_PROMPT_TEMPLATE, &[("abstract", abstract_text.as_str())]);
    Ok(llm.complete(&prompt).await?)
}

pub async fn analyze_aspect(
    llm: &dyn CompletionClient,
    kind: AnalysisKind,
    abstract_text: &str,
) -> Result<String, AppError> {
    Ok(llm.complete(&kind.prompt(abstract_text)).await?)
}

pub async fn rewrite_sarcastically(
    llm: &dyn CompletionClient,
    abstract_text: &str,
) -> Result<String, AppError> {
    let prompt = render(SARCASTIC_REWRITE_PROMPT_TEMPLATE, &[("abstract", abstract_text)]);
    Ok(llm.complete(&prompt).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bias::InMemoryBiasStore;
    use crate::paper::extract::AbstractExtractor;
    use crate::paper::resolver::MAX_ABSTRACT_WORDS;
    use crate::test_support::{CannedSource, ScriptedClient, SYNTHESIS_PREFIX};

    fn resolver(source: Arc<CannedSource>) -> AbstractResolver {
        AbstractResolver::new(source, AbstractExtractor::new().unwrap())
    }

    #[tokio::test]
    async fn test_analyze_injects_bias_document() {
        let client = Arc::new(ScriptedClient::replying());
        let bias = InMemoryBiasStore::new("# 偏见\n- 消融实验永远缺席");

        let result = analyze(
            &resolver(Arc::new(CannedSource::ok(""))),
            &bias,
            client.clone(),
            "Our method is novel.",
            Style::Sarcastic,
        )
        .await
        .unwrap();

        assert_eq!(result.sarcastic_rewrite, "SYNTHESIS");
        let synthesis = client.prompt_starting_with(SYNTHESIS_PREFIX).unwrap();
        assert!(synthesis.contains("- 消融实验永远缺席"));
        assert!(synthesis.contains("Our method is novel."));
    }

    #[tokio::test]
    async fn test_analyze_resolves_arxiv_links() {
        let client = Arc::new(ScriptedClient::replying());
        let source = Arc::new(CannedSource::ok("Abstract\nWe beat SOTA.\n\nIntroduction"));

        analyze(
            &resolver(source.clone()),
            &InMemoryBiasStore::default(),
            client.clone(),
            "https://arxiv.org/abs/2501.01234",
            Style::Weary,
        )
        .await
        .unwrap();

        assert_eq!(source.requested(), vec!["https://arxiv.org/pdf/2501.01234.pdf"]);
        let language = client.prompt_starting_with("请详细分析").unwrap();
        assert!(language.ends_with("We beat SOTA."));
    }

    #[tokio::test]
    async fn test_analyze_fetch_failure_skips_llm() {
        let client = Arc::new(ScriptedClient::replying());

        let err = analyze(
            &resolver(Arc::new(CannedSource::failing("connection reset"))),
            &InMemoryBiasStore::default(),
            client.clone(),
            "https://arxiv.org/abs/2501.01234",
            Style::Weary,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Fetch(_)));
        assert!(client.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_go_crazy_truncates_before_prompting() {
        let client = ScriptedClient::replying();
        let long = vec!["blah"; MAX_ABSTRACT_WORDS + 10].join(" ");

        let rewrite = go_crazy(&resolver(Arc::new(CannedSource::ok(""))), &client, &long)
            .await
            .unwrap();

        assert_eq!(rewrite, "CRAZY");
        let prompts = client.prompts();
        let prompt = &prompts[0];
        let expected = vec!["blah"; MAX_ABSTRACT_WORDS].join(" ");
        assert!(prompt.ends_with(&format!("原始摘要：\n{expected}")));
    }

    #[tokio::test]
    async fn test_single_aspect_sends_one_prompt() {
        let client = ScriptedClient::replying();
        let text = analyze_aspect(&client, AnalysisKind::Concepts, "Dual Synergy Net")
            .await
            .unwrap();
        assert_eq!(text, "CONCEPTS");
        assert_eq!(client.prompts(), vec![AnalysisKind::Concepts.prompt("Dual Synergy Net")]);
    }

    #[tokio::test]
    async fn test_single_aspect_does_not_resolve_links() {
        let client = ScriptedClient::replying();
        let url = "https://arxiv.org/abs/2501.01234";
        analyze_aspect(&client, AnalysisKind::Language, url).await.unwrap();
        assert!(client.prompts()[0].ends_with(url));
    }

    #[tokio::test]
    async fn test_rewrite_sarcastically() {
        let client = ScriptedClient::replying();
        let text = rewrite_sarcastically(&client, "We leverage synergies.")
            .await
            .unwrap();
        assert_eq!(text, "REWRITE");
        assert!(client.prompts()[0].ends_with("\n\nWe leverage synergies."));
    }
}
