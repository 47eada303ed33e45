use std::sync::Arc;

use crate::bias::BiasStore;
use crate::config::Config;
use crate::llm_client::CompletionClient;
use crate::paper::resolver::AbstractResolver;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion client. Production: `LlmClient`.
    pub llm: Arc<dyn CompletionClient>,
    /// Bias document store. Production: `FileBiasStore` over `BIAS_FILE`.
    pub bias: Arc<dyn BiasStore>,
    pub resolver: AbstractResolver,
    pub config: Config,
}
