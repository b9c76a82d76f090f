pub mod content_analysis_prompt;
pub mod visual_analysis_prompt;
