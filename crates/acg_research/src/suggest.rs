//! Keyword-suggestion lookups: the suggest API plus deterministic local
//! expansions (modifiers and question templates) that need no network.

use acg_core::Result;

const SUGGEST_URL: &str = "http://suggestqueries.google.com/complete/search";

const MODIFIERS: [&str; 10] = [
    "tips", "cara", "panduan", "tutorial", "review", "harga", "terbaik", "terbaru", "lengkap",
    "gratis",
];

const QUESTION_PREFIXES: [&str; 9] = [
    "how to", "what is", "why", "when", "where", "tips", "cara", "apa itu", "mengapa",
];

/// Query the suggestion API. The response is `[query, [suggestion, ...]]`.
pub async fn related_keywords(client: &reqwest::Client, keyword: &str) -> Result<Vec<String>> {
    let response = client
        .get(SUGGEST_URL)
        .query(&[("client", "firefox"), ("q", keyword)])
        .send()
        .await?
        .error_for_status()?
        .json::<serde_json::Value>()
        .await?;

    let suggestions = response
        .get(1)
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str())
                .map(|s| s.to_string())
                .take(10)
                .collect()
        })
        .unwrap_or_default();

    Ok(suggestions)
}

/// Deterministic modifier expansion of the keyword, both orders, capped at 10.
pub fn modifier_keywords(keyword: &str) -> Vec<String> {
    MODIFIERS
        .iter()
        .flat_map(|modifier| {
            [
                format!("{} {}", modifier, keyword),
                format!("{} {}", keyword, modifier),
            ]
        })
        .take(10)
        .collect()
}

/// Templated questions for the keyword, capped.
pub fn questions(keyword: &str, cap: usize) -> Vec<String> {
    QUESTION_PREFIXES
        .iter()
        .map(|prefix| format!("{} {}", prefix, keyword))
        .take(cap)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_keywords_are_capped_at_ten() {
        let keywords = modifier_keywords("seo");
        assert_eq!(keywords.len(), 10);
        assert!(keywords.contains(&"tips seo".to_string()));
        assert!(keywords.contains(&"seo tips".to_string()));
    }

    #[test]
    fn questions_are_capped_and_templated() {
        let questions = questions("diet sehat", 5);
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[0], "how to diet sehat");
        assert!(questions.iter().all(|q| q.contains("diet sehat")));
    }

    #[test]
    fn question_cap_larger_than_templates_returns_all() {
        assert_eq!(questions("seo", 20).len(), QUESTION_PREFIXES.len());
    }
}
