pub mod analyzer;
pub mod content_fetcher;
