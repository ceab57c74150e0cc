use std::collections::HashSet;

use tracing::{debug, warn};

use acg_core::{Competition, ResearchResult, Settings, TopResult};

pub mod serp;
pub mod suggest;

/// Research aggregator: several independent lookups merged into one
/// `ResearchResult`. Any individual lookup failing contributes nothing; the
/// aggregate itself never fails, so a fully offline run still returns a
/// deterministic result built from the templated expansions.
pub struct Researcher {
    client: reqwest::Client,
    related_cap: usize,
    question_cap: usize,
    high_domains: usize,
    medium_domains: usize,
}

impl Researcher {
    pub fn from_settings(settings: &Settings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            related_cap: settings.related_keyword_cap,
            question_cap: settings.question_cap,
            high_domains: settings.competition_high_domains,
            medium_domains: settings.competition_medium_domains,
        }
    }

    pub async fn research(&self, keyword: &str) -> ResearchResult {
        // Independent lookups, issued together; each one failing contributes
        // an empty partial result.
        let (suggestions, serp) = tokio::join!(
            suggest::related_keywords(&self.client, keyword),
            serp::top_results(&self.client, keyword),
        );

        let suggestions = suggestions.unwrap_or_else(|e| {
            warn!("⚠️ Suggestion lookup failed for '{}': {}", keyword, e);
            Vec::new()
        });
        let (top_results, total_results) = serp.unwrap_or_else(|e| {
            warn!("⚠️ Search-result lookup failed for '{}': {}", keyword, e);
            (Vec::new(), 0)
        });

        let related_keywords = merge_related(
            [suggestions, suggest::modifier_keywords(keyword)],
            self.related_cap,
        );
        let competition = analyze_competition(
            &top_results,
            total_results,
            self.high_domains,
            self.medium_domains,
        );
        debug!(
            "🔎 '{}': {} related, {} top results, competition {}",
            keyword,
            related_keywords.len(),
            top_results.len(),
            competition.level
        );

        ResearchResult {
            keyword: keyword.to_string(),
            related_keywords,
            questions: suggest::questions(keyword, self.question_cap),
            top_results,
            competition,
            search_volume: estimate_search_volume(keyword).to_string(),
        }
    }
}

/// Merge related-keyword contributions in order, dropping duplicates and
/// truncating to the cap.
pub fn merge_related<I>(sources: I, cap: usize) -> Vec<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    for source in sources {
        for keyword in source {
            if merged.len() >= cap {
                return merged;
            }
            if seen.insert(keyword.to_lowercase()) {
                merged.push(keyword);
            }
        }
    }
    merged
}

/// Competition heuristic over unique top-result domains. The thresholds are
/// ad-hoc, not derived from ranking data.
pub fn analyze_competition(
    top_results: &[TopResult],
    total_results: usize,
    high_domains: usize,
    medium_domains: usize,
) -> Competition {
    if top_results.is_empty() {
        return Competition {
            total_results,
            ..Competition::default()
        };
    }

    let unique_domains = top_results
        .iter()
        .map(|result| result.domain.as_str())
        .collect::<HashSet<_>>()
        .len();

    let (level, difficulty) = if unique_domains >= high_domains {
        ("High", "Hard")
    } else if unique_domains >= medium_domains {
        ("Medium", "Moderate")
    } else {
        ("Low", "Easy")
    };

    Competition {
        level: level.to_string(),
        difficulty: difficulty.to_string(),
        unique_domains,
        total_results,
    }
}

/// Search-volume placeholder heuristic: purely a function of keyword word
/// count.
pub fn estimate_search_volume(keyword: &str) -> &'static str {
    match keyword.split_whitespace().count() {
        0 | 1 => "high",
        2 => "medium",
        _ => "low",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn result(domain: &str) -> TopResult {
        TopResult {
            title: format!("Hasil dari {}", domain),
            url: format!("https://{}/artikel", domain),
            domain: domain.to_string(),
        }
    }

    #[test]
    fn merge_dedups_and_caps() {
        let merged = merge_related(
            [
                vec!["seo".to_string(), "tips seo".to_string(), "SEO".to_string()],
                (0..30).map(|i| format!("kw{}", i)).collect(),
            ],
            20,
        );
        assert_eq!(merged.len(), 20);
        let unique: HashSet<_> = merged.iter().map(|k| k.to_lowercase()).collect();
        assert_eq!(unique.len(), merged.len());
        assert_eq!(merged[0], "seo");
    }

    #[test]
    fn competition_single_domain_is_low() {
        let results: Vec<_> = (0..5).map(|_| result("a.com")).collect();
        let competition = analyze_competition(&results, 100, 4, 2);
        assert_eq!(competition.level, "Low");
        assert_eq!(competition.difficulty, "Easy");
        assert_eq!(competition.unique_domains, 1);
    }

    #[test]
    fn competition_five_unique_domains_is_high() {
        let results: Vec<_> = ["a.com", "b.com", "c.com", "d.com", "e.com"]
            .iter()
            .map(|d| result(d))
            .collect();
        assert_eq!(analyze_competition(&results, 100, 4, 2).level, "High");
    }

    #[test]
    fn competition_exactly_four_unique_domains_is_high() {
        let results: Vec<_> = ["a.com", "b.com", "c.com", "d.com", "a.com"]
            .iter()
            .map(|d| result(d))
            .collect();
        let competition = analyze_competition(&results, 100, 4, 2);
        assert_eq!(competition.unique_domains, 4);
        assert_eq!(competition.level, "High");
    }

    #[test]
    fn competition_two_unique_domains_is_medium() {
        let results: Vec<_> = ["a.com", "b.com", "a.com"].iter().map(|d| result(d)).collect();
        assert_eq!(analyze_competition(&results, 100, 4, 2).level, "Medium");
    }

    #[test]
    fn competition_without_results_stays_unknown() {
        let competition = analyze_competition(&[], 0, 4, 2);
        assert_eq!(competition.level, "Unknown");
        assert_eq!(competition.unique_domains, 0);
    }

    #[test]
    fn search_volume_buckets_by_word_count() {
        assert_eq!(estimate_search_volume("seo"), "high");
        assert_eq!(estimate_search_volume("belajar seo"), "medium");
        assert_eq!(estimate_search_volume("belajar seo dasar"), "low");
    }

    #[tokio::test]
    async fn research_never_fails_even_offline() {
        let settings = Settings {
            request_timeout: Duration::from_secs(2),
            ..Settings::default()
        };
        let researcher = Researcher::from_settings(&settings);
        let research = researcher.research("diet sehat").await;

        assert_eq!(research.keyword, "diet sehat");
        // Templated expansions contribute even when every lookup fails.
        assert!(!research.related_keywords.is_empty());
        assert!(research.related_keywords.len() <= 20);
        assert_eq!(research.questions.len(), 5);
        assert_eq!(research.search_volume, "medium");
    }
}
