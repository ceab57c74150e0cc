use acg_core::{GenerationRequest, Outline, ResearchResult};

/// E-E-A-T boilerplate injected into the content prompt. This is phrasing
/// only; nothing downstream scores or parses it.
pub const EEAT_CONTEXT: &str = "\
Tulis artikel dengan menerapkan E-E-A-T (Experience, Expertise, Authority, Trust):

EXPERIENCE:
- Sertakan pengalaman praktis dan studi kasus nyata
- Berikan contoh implementasi yang sudah terbukti

EXPERTISE:
- Tunjukkan pengetahuan mendalam tentang topik
- Sertakan data ilmiah dan penelitian terbaru
- Gunakan terminologi yang tepat dan profesional

AUTHORITY:
- Kutip sumber terpercaya dan ahli di bidangnya
- Berikan rekomendasi yang berdasarkan best practices

TRUST:
- Jujur tentang keterbatasan dan risiko
- Berikan informasi yang seimbang dan objektif";

pub fn outline_request(keyword: &str, research: &ResearchResult) -> GenerationRequest {
    let prompt = format!(
        r#"Buat outline artikel untuk keyword: "{keyword}"

Research Data:
- Related Keywords: {related:?}
- Questions: {questions:?}
- Competition: {competition}

Buat outline dengan struktur:
1. H1: Judul utama yang menarik dan SEO-friendly
2. H2: 3-5 subheading yang mencakup aspek penting
3. H3: 2-3 sub-subheading untuk setiap H2
4. FAQ: 5-7 pertanyaan umum
5. Conclusion

Format output JSON:
{{
    "title": "Judul Artikel",
    "h1": "Judul Utama",
    "h2_sections": [
        {{
            "title": "Subheading 1",
            "h3_subsections": ["Sub-sub 1", "Sub-sub 2"]
        }}
    ],
    "faq": ["Pertanyaan 1", "Pertanyaan 2"],
    "conclusion": "Kesimpulan artikel"
}}"#,
        keyword = keyword,
        related = research.related_keywords,
        questions = research.questions,
        competition = research.competition.level,
    );

    GenerationRequest {
        system: "Anda adalah content strategist yang ahli dalam membuat outline artikel SEO-friendly."
            .to_string(),
        prompt,
        temperature: 0.7,
        max_tokens: 1000,
    }
}

pub fn content_request(
    keyword: &str,
    outline: &Outline,
    research: &ResearchResult,
    target_words: usize,
) -> GenerationRequest {
    let outline_json = serde_json::to_string_pretty(outline).unwrap_or_default();
    let top_titles: Vec<&str> = research
        .top_results
        .iter()
        .map(|result| result.title.as_str())
        .collect();

    let prompt = format!(
        r#"Tulis artikel lengkap untuk keyword: "{keyword}"

Outline:
{outline_json}

Research Data:
- Related Keywords: {related:?}
- Top Results: {top:?}

E-E-A-T Requirements:
{eeat}

Instruksi:
1. Tulis dalam bahasa Indonesia yang natural dan mudah dipahami
2. Sertakan data, statistik, dan contoh nyata
3. Gunakan tone yang meyakinkan dan profesional
4. Panjang artikel: {target_words} kata
5. Optimalkan untuk SEO dengan keyword density yang natural
6. Sertakan call-to-action yang relevan

Format output JSON:
{{
    "title": "Judul Artikel",
    "meta_description": "Meta description untuk SEO",
    "content": "Konten artikel lengkap dengan HTML tags",
    "summary": "Ringkasan singkat artikel",
    "keywords": ["keyword1", "keyword2"],
    "word_count": {target_words}
}}"#,
        keyword = keyword,
        outline_json = outline_json,
        related = research.related_keywords,
        top = top_titles,
        eeat = EEAT_CONTEXT,
        target_words = target_words,
    );

    GenerationRequest {
        system: "Anda adalah content writer profesional dengan pengalaman 10+ tahun. \
                 Tulis artikel yang informatif, meyakinkan, dan SEO-friendly."
            .to_string(),
        prompt,
        temperature: 0.8,
        max_tokens: 3000,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback;
    use acg_core::{Competition, ResearchResult};

    fn research(keyword: &str) -> ResearchResult {
        ResearchResult {
            keyword: keyword.to_string(),
            related_keywords: vec![format!("tips {}", keyword)],
            questions: vec![format!("apa itu {}", keyword)],
            top_results: vec![],
            competition: Competition::default(),
            search_volume: "low".to_string(),
        }
    }

    #[test]
    fn outline_request_carries_keyword_and_research() {
        let request = outline_request("diet sehat", &research("diet sehat"));
        assert!(request.prompt.contains("diet sehat"));
        assert!(request.prompt.contains("tips diet sehat"));
        assert!(request.prompt.contains("h2_sections"));
        assert_eq!(request.max_tokens, 1000);
    }

    #[test]
    fn content_request_embeds_outline_and_eeat() {
        let outline = fallback::outline("diet sehat");
        let request = content_request("diet sehat", &outline, &research("diet sehat"), 1500);
        assert!(request.prompt.contains("E-E-A-T"));
        assert!(request.prompt.contains(&outline.title));
        assert!(request.prompt.contains("1500 kata"));
    }
}
