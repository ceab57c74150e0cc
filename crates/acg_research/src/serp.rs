//! Best-effort scrape of the top search results for a keyword. Everything
//! here is tolerant: missing elements are skipped and an empty page yields
//! empty results, never an error to the aggregator.

use scraper::{Html, Selector};

use acg_core::{Result, TopResult};

const SEARCH_URL: &str = "https://www.google.com/search";
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const MAX_RESULTS: usize = 5;

pub async fn top_results(
    client: &reqwest::Client,
    keyword: &str,
) -> Result<(Vec<TopResult>, usize)> {
    let html = client
        .get(SEARCH_URL)
        .query(&[("q", keyword)])
        .header("User-Agent", USER_AGENT)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(parse_results(&html))
}

/// Extract result blocks and the reported total result count from a search
/// page. Pure so it can be exercised against fixture markup.
pub fn parse_results(html: &str) -> (Vec<TopResult>, usize) {
    let document = Html::parse_document(html);
    let block_selector = Selector::parse("div.g").unwrap();
    let title_selector = Selector::parse("h3").unwrap();
    let link_selector = Selector::parse("a").unwrap();

    let mut results = Vec::new();
    for block in document.select(&block_selector).take(MAX_RESULTS) {
        let title = match block.select(&title_selector).next() {
            Some(el) => el.text().collect::<String>().trim().to_string(),
            None => continue,
        };
        let url = match block
            .select(&link_selector)
            .next()
            .and_then(|el| el.value().attr("href"))
        {
            Some(href) => href.to_string(),
            None => continue,
        };
        let domain = extract_domain(&url);
        if title.is_empty() || domain.is_empty() {
            continue;
        }
        results.push(TopResult { title, url, domain });
    }

    let total = document
        .select(&Selector::parse("#result-stats").unwrap())
        .next()
        .map(|el| first_number(&el.text().collect::<String>()))
        .unwrap_or(0);

    (results, total)
}

pub fn extract_domain(raw: &str) -> String {
    url::Url::parse(raw)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.trim_start_matches("www.").to_string()))
        .unwrap_or_default()
}

/// First integer in a string like "About 1,234,567 results".
fn first_number(text: &str) -> usize {
    let mut digits = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if c != ',' && !digits.is_empty() {
            break;
        }
    }
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
        <html><body>
            <div id="result-stats">About 1,230,000 results (0.42 seconds)</div>
            <div class="g">
                <a href="https://www.example.com/a"><h3>Hasil Pertama</h3></a>
            </div>
            <div class="g">
                <a href="https://blog.example.org/b"><h3>Hasil Kedua</h3></a>
            </div>
            <div class="g">
                <a href="https://example.com/c"></a>
            </div>
        </body></html>
    "#;

    #[test]
    fn parses_result_blocks_and_total_count() {
        let (results, total) = parse_results(FIXTURE);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Hasil Pertama");
        assert_eq!(results[0].domain, "example.com");
        assert_eq!(results[1].domain, "blog.example.org");
        assert_eq!(total, 1_230_000);
    }

    #[test]
    fn empty_page_yields_empty_results() {
        let (results, total) = parse_results("<html><body></body></html>");
        assert!(results.is_empty());
        assert_eq!(total, 0);
    }

    #[test]
    fn domain_extraction_strips_www() {
        assert_eq!(extract_domain("https://www.a.co/x"), "a.co");
        assert_eq!(extract_domain("not a url"), "");
    }

    #[test]
    fn first_number_handles_thousands_separators() {
        assert_eq!(first_number("About 12,345 results"), 12_345);
        assert_eq!(first_number("no numbers here"), 0);
    }
}
