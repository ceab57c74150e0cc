//! Bulk keyword input: newline-separated text or a single-column CSV with
//! an optional `keyword` header.

use std::path::Path;

use acg_core::Result;

pub fn keywords_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn keywords_from_csv(path: &Path) -> Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)?;
    let mut keywords = Vec::new();
    for (index, line) in raw.lines().enumerate() {
        let first_cell = line.split(',').next().unwrap_or("").trim();
        if first_cell.is_empty() {
            continue;
        }
        if index == 0 && first_cell.eq_ignore_ascii_case("keyword") {
            continue;
        }
        keywords.push(first_cell.to_string());
    }
    Ok(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn text_input_skips_blank_lines() {
        let keywords = keywords_from_text("seo\n\n  diet sehat  \n");
        assert_eq!(keywords, vec!["seo", "diet sehat"]);
    }

    #[test]
    fn csv_input_takes_first_column_and_skips_header() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "keyword,volume").unwrap();
        writeln!(file, "seo,100").unwrap();
        writeln!(file, "diet sehat,50").unwrap();
        let keywords = keywords_from_csv(file.path()).unwrap();
        assert_eq!(keywords, vec!["seo", "diet sehat"]);
    }

    #[test]
    fn csv_input_without_header_keeps_first_row() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "belajar seo").unwrap();
        writeln!(file, "diet sehat").unwrap();
        let keywords = keywords_from_csv(file.path()).unwrap();
        assert_eq!(keywords, vec!["belajar seo", "diet sehat"]);
    }

    #[test]
    fn missing_csv_file_is_an_error() {
        assert!(keywords_from_csv(Path::new("/nonexistent/keywords.csv")).is_err());
    }
}
