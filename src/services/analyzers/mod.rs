pub mod content_analyzer;
pub mod visual_analyzer;
pub mod reputation_analyzer;
