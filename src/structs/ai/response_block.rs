use serde::Deserialize;

/// One content block of a completion. Unknown block kinds deserialize
/// with `text: None` and are ignored by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub text: Option<String>,
}
