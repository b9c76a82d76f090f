pub mod page_fetcher;
pub mod llm_client;
pub mod analyzers;
pub mod supervisor;
pub mod aggregator;
pub mod orchestrator;
pub mod report_builder;
