use crate::utils::error::Result;
use async_trait::async_trait;

/// Key/value persistence. Keys are flat names such as `portfolio.json`.
pub trait Storage: Send + Sync {
    /// `Ok(None)` when nothing has been stored under `path` yet.
    fn read_file(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<Option<Vec<u8>>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove_file(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Text,
    Json,
}

/// A generative text backend: one prompt in, one completion out.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn generate(&self, prompt: &str, format: ResponseFormat) -> Result<String>;
}
