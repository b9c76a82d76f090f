use serde::Deserialize;
use crate::structs::ai::response_block::ResponseBlock;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub content: Vec<ResponseBlock>,
}

impl ChatResponse {
    /// First text block of the completion, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.content
            .iter()
            .filter(|block| block.block_type == "text")
            .find_map(|block| block.text.as_deref())
    }
}
