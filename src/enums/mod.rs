pub mod commands;
pub mod analyzer_kind;
pub mod outcome_status;
pub mod recommendation;
pub mod run_state;
pub mod analyzer_failure;
pub mod fetch_error;
pub mod content_block;
