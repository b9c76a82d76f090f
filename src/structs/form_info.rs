use serde::{Deserialize, Serialize};
use crate::structs::form_field::FormField;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormInfo {
    pub action: String,
    pub method: String,
    pub fields: Vec<FormField>,
}

impl FormInfo {
    pub fn has_password_field(&self) -> bool {
        self.fields.iter().any(|f| f.field_type == "password")
    }

    /// Forms collecting several pieces of personal data at once are
    /// treated as payment/credential harvesting candidates.
    pub fn looks_like_payment_form(&self) -> bool {
        let personal_field_types = ["email", "text", "password", "tel"];
        self.fields
            .iter()
            .filter(|f| personal_field_types.contains(&f.field_type.as_str()))
            .count()
            > 2
    }
}
