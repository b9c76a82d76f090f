use serde::Serialize;
use crate::enums::content_block::ContentBlock;
use crate::structs::ai::image_source::ImageSource;

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Vec<ContentBlock>,
}

impl ChatMessage {
    pub fn user_text(text: String) -> Self {
        Self {
            role: String::from("user"),
            content: vec![ContentBlock::Text { text }],
        }
    }

    pub fn user_image_and_text(source: ImageSource, text: String) -> Self {
        Self {
            role: String::from("user"),
            content: vec![ContentBlock::Image { source }, ContentBlock::Text { text }],
        }
    }
}
