pub mod cli;
pub mod analysis_request;
pub mod run_options;
pub mod fetched_content;
pub mod domain_metadata;
pub mod form_field;
pub mod form_info;
pub mod security_flags;
pub mod analyzer_verdict;
pub mod analyzer_outcome;
pub mod reputation_record;
pub mod fused_result;
pub mod risk_report;
pub mod pipeline_summary;
pub mod config;
pub mod ai;
