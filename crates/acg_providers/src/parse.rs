use serde::de::DeserializeOwned;

use acg_core::{Error, Result};

/// Extract and deserialize the JSON document from free-form model output.
/// Models wrap documents in markdown fences or surround them with prose, so
/// this takes the slice from the first `{` to the last `}`.
pub fn parse_document<T: DeserializeOwned>(text: &str) -> Result<T> {
    let start = text
        .find('{')
        .ok_or_else(|| Error::Parse("no JSON object in provider response".to_string()))?;
    let end = text
        .rfind('}')
        .ok_or_else(|| Error::Parse("unterminated JSON object in provider response".to_string()))?;
    if end < start {
        return Err(Error::Parse("malformed JSON object in provider response".to_string()));
    }
    serde_json::from_str(&text[start..=end]).map_err(|e| Error::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use acg_core::{GeneratedContent, Outline};

    const OUTLINE_DOC: &str = r#"{
        "title": "T", "h1": "T",
        "h2_sections": [{"title": "S", "h3_subsections": ["a"]}],
        "faq": ["q"], "conclusion": "c"
    }"#;

    #[test]
    fn parses_a_bare_document() {
        let outline: Outline = parse_document(OUTLINE_DOC).unwrap();
        assert_eq!(outline.title, "T");
    }

    #[test]
    fn parses_a_fenced_document_with_prose() {
        let wrapped = format!("Berikut outline-nya:\n```json\n{}\n```\nSemoga membantu!", OUTLINE_DOC);
        let outline: Outline = parse_document(&wrapped).unwrap();
        assert_eq!(outline.sections.len(), 1);
    }

    #[test]
    fn rejects_text_without_a_document() {
        let err = parse_document::<Outline>("maaf, saya tidak bisa").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn rejects_invalid_json_between_braces() {
        let err = parse_document::<GeneratedContent>("{not json}").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
