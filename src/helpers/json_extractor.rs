use serde_json::Value;

pub struct JsonExtractor;

impl JsonExtractor {
    /// Pull the JSON object out of a model completion that may wrap it
    /// in prose or code fences: everything from the first `{` to the
    /// last `}` is treated as the candidate document.
    pub fn extract_object(response: &str) -> Option<Value> {
        let start = response.find('{')?;
        let end = response.rfind('}')?;
        if end < start {
            return None;
        }

        let candidate = &response[start..=end];
        match serde_json::from_str::<Value>(candidate) {
            Ok(value) if value.is_object() => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_bare_object() {
        let value = JsonExtractor::extract_object(r#"{"risk_score": 8.0}"#).unwrap();
        assert_eq!(value["risk_score"], 8.0);
    }

    #[test]
    fn test_extracts_object_from_fenced_completion() {
        let response = "Here is my assessment:\n```json\n{\"risk_score\": 2.0, \"confidence\": 0.9}\n```\nLet me know.";
        let value = JsonExtractor::extract_object(response).unwrap();
        assert_eq!(value["confidence"], 0.9);
    }

    #[test]
    fn test_nested_braces_survive_extraction() {
        let response = r#"verdict {"risk_score": 5.0, "findings": {"indicators": ["a", "b"]}} end"#;
        let value = JsonExtractor::extract_object(response).unwrap();
        assert_eq!(value["findings"]["indicators"][0], "a");
    }

    #[test]
    fn test_prose_without_json_yields_none() {
        assert!(JsonExtractor::extract_object("this site looks legitimate").is_none());
        assert!(JsonExtractor::extract_object("} backwards {").is_none());
    }
}
