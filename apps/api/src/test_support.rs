//! Fakes shared by unit tests across modules.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::{CompletionClient, LlmError};
use crate::paper::source::PaperSource;

/// Prompt prefixes of each template, paired with the canned reply.
const DEFAULT_REPLIES: &[(&str, &str)] = &[
    ("请详细分析", "LANGUAGE"),
    ("请深入分析", "CONCEPTS"),
    ("请批判性地", "EXPERIMENTS"),
    ("请根据以下分析结果", "SYNTHESIS"),
    ("请用不屑", "REWRITE"),
    ("请将以下学术论文摘要以前言不搭后语", "CRAZY"),
];

pub(crate) const SYNTHESIS_PREFIX: &str = "请根据以下分析结果";

/// Replies by prompt prefix and records every prompt it sees.
pub(crate) struct ScriptedClient {
    failing_prefix: Option<&'static str>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub(crate) fn replying() -> Self {
        Self {
            failing_prefix: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Returns an upstream 500 for prompts starting with `prefix`.
    pub(crate) fn failing_on(prefix: &'static str) -> Self {
        Self {
            failing_prefix: Some(prefix),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub(crate) fn prompt_starting_with(&self, prefix: &str) -> Option<String> {
        self.prompts().into_iter().find(|p| p.starts_with(prefix))
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(prefix) = self.failing_prefix {
            if prompt.starts_with(prefix) {
                return Err(LlmError::Api {
                    status: 500,
                    message: "upstream exploded".to_string(),
                });
            }
        }

        DEFAULT_REPLIES
            .iter()
            .find(|(prefix, _)| prompt.starts_with(prefix))
            .map(|(_, reply)| reply.to_string())
            .ok_or(LlmError::EmptyContent)
    }
}

/// Serves fixed paper text and records every requested URL.
pub(crate) struct CannedSource {
    text: Result<String, String>,
    requested: Mutex<Vec<String>>,
}

impl CannedSource {
    pub(crate) fn ok(text: &str) -> Self {
        Self {
            text: Ok(text.to_string()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            text: Err(message.to_string()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaperSource for CannedSource {
    async fn fetch_text(&self, pdf_url: &str) -> Result<String, AppError> {
        self.requested.lock().unwrap().push(pdf_url.to_string());
        self.text.clone().map_err(AppError::Fetch)
    }
}

/// Config pointing nowhere real; override fields per test.
pub(crate) fn test_config(static_dir: &Path) -> Config {
    Config {
        llm_api_key: "test-key".to_string(),
        llm_api_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
        llm_model: "moonshot-v1-8k".to_string(),
        llm_temperature: 0.7,
        bias_file: None,
        static_dir: static_dir.to_path_buf(),
        port: 0,
        rust_log: "info".to_string(),
    }
}

/// Serves `router` on an ephemeral local port for the rest of the test.
pub(crate) async fn serve_stub(router: axum::Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}
