//! Remote paper retrieval — fetches a PDF and turns it into plain text.

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::errors::AppError;

/// Fetches a paper PDF and returns its extracted text.
///
/// Carried by `AbstractResolver` as `Arc<dyn PaperSource>`, so tests can serve canned text.
#[async_trait]
pub trait PaperSource: Send + Sync {
    async fn fetch_text(&self, pdf_url: &str) -> Result<String, AppError>;
}

/// Downloads PDFs over HTTP and extracts their text with `pdf-extract`.
#[derive(Clone, Default)]
pub struct HttpPdfSource {
    client: Client,
}

impl HttpPdfSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn download(&self, pdf_url: &str) -> Result<bytes::Bytes, AppError> {
        let response = self
            .client
            .get(pdf_url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        response
            .bytes()
            .await
            .map_err(|e| AppError::Fetch(e.to_string()))
    }
}

#[async_trait]
impl PaperSource for HttpPdfSource {
    async fn fetch_text(&self, pdf_url: &str) -> Result<String, AppError> {
        info!("Fetching PDF from {pdf_url}");
        let pdf = self.download(pdf_url).await?;
        info!("Downloaded {} bytes, extracting text", pdf.len());

        // pdf-extract is CPU-bound and synchronous.
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&pdf))
            .await
            .map_err(|e| AppError::Extraction(e.to_string()))?
            .map_err(|e| AppError::Extraction(e.to_string()))
    }
}
