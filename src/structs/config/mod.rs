pub mod config;
pub mod fusion_config;
pub mod supervisor_config;
pub mod fetch_config;
pub mod ai_config;
pub mod reputation_config;
pub mod output_config;
