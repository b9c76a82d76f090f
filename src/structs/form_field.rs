use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormField {
    #[serde(rename = "type")]
    pub field_type: String,
    pub name: String,
    pub placeholder: String,
}

impl FormField {
    pub fn new(field_type: &str, name: &str, placeholder: &str) -> Self {
        Self {
            field_type: field_type.to_string(),
            name: name.to_string(),
            placeholder: placeholder.to_string(),
        }
    }
}
