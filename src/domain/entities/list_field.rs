use serde::{Deserialize, Serialize};

/// JSON list column that tolerates legacy encodings.
///
/// Some imported rows stored these columns as a JSON string holding an
/// encoded array (`"[\"a\", \"b\"]"`) rather than a real array. `items`
/// decodes both shapes and yields an empty list for anything else, so a
/// malformed column never fails a read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ListField {
    Structured(Vec<String>),
    Legacy(String),
    Other(serde_json::Value),
}

impl Default for ListField {
    fn default() -> Self {
        ListField::Structured(Vec::new())
    }
}

impl ListField {
    pub fn items(&self) -> Vec<String> {
        match self {
            ListField::Structured(items) => items.clone(),
            ListField::Legacy(raw) => serde_json::from_str(raw).unwrap_or_default(),
            ListField::Other(_) => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

impl From<Vec<String>> for ListField {
    fn from(items: Vec<String>) -> Self {
        ListField::Structured(items)
    }
}

/// Split a comma-separated column into trimmed, non-empty items.
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_real_array_decodes_directly() {
        let field: ListField = serde_json::from_str(r#"["web", "mobile"]"#).unwrap();
        assert_eq!(field.items(), vec!["web".to_string(), "mobile".to_string()]);
    }

    #[test]
    fn a_stringified_array_still_decodes() {
        let field: ListField = serde_json::from_str(r#""[\"web\", \"mobile\"]""#).unwrap();
        assert_eq!(field.items(), vec!["web".to_string(), "mobile".to_string()]);
    }

    #[test]
    fn garbage_reads_as_an_empty_list() {
        let field: ListField = serde_json::from_str(r#""not json""#).unwrap();
        assert!(field.items().is_empty());

        let field: ListField = serde_json::from_str("{\"k\": 1}").unwrap();
        assert!(field.items().is_empty());
    }

    #[test]
    fn split_csv_trims_and_drops_empties() {
        assert_eq!(
            split_csv(" rust, web , ,tooling"),
            vec!["rust".to_string(), "web".to_string(), "tooling".to_string()]
        );
        assert!(split_csv("").is_empty());
    }
}
