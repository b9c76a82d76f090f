use serde::{Deserialize, Serialize};
use crate::config::constants::SUSPICIOUS_KEYWORDS;
use crate::structs::fetched_content::FetchedContent;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SecurityFlags {
    pub has_https: bool,
    pub has_suspicious_keywords: bool,
    pub has_login_form: bool,
    pub has_payment_form: bool,
}

impl SecurityFlags {
    pub fn derive(content: &FetchedContent) -> Self {
        let mut haystack = content.text.to_lowercase();
        if let Some(title) = &content.title {
            haystack.push(' ');
            haystack.push_str(&title.to_lowercase());
        }

        Self {
            has_https: content.domain.https,
            has_suspicious_keywords: SUSPICIOUS_KEYWORDS.iter().any(|kw| haystack.contains(kw)),
            has_login_form: content.forms.iter().any(|f| f.has_password_field()),
            has_payment_form: content.forms.iter().any(|f| f.looks_like_payment_form()),
        }
    }
}
