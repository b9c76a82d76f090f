pub mod config_helper;
pub mod url_helper;
pub mod json_extractor;
pub mod html_extractor;
pub mod verdict_parser;
