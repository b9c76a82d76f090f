use async_trait::async_trait;
use crate::enums::fetch_error::FetchError;
use crate::structs::fetched_content::FetchedContent;

#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedContent, FetchError>;
}
