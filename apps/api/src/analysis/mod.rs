// Abstract critique: single-aspect analyses, the full two-stage pipeline, go-crazy.
// All LLM calls go through llm_client::CompletionClient.

pub mod aspect;
pub mod handlers;
pub mod orchestrator;
pub mod pipeline;
pub mod prompts;
pub mod style;
