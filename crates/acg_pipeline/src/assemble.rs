//! Final HTML assembly. Pure templating: same inputs, byte-identical
//! output. The timestamp is a parameter so callers (and tests) control it;
//! nothing here reads the clock or the network.

use chrono::{DateTime, Utc};

use acg_core::{GeneratedContent, ImageRef};

const CSS: &str = r#"body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    line-height: 1.6;
    color: #333;
    max-width: 800px;
    margin: 0 auto;
    padding: 20px;
    background-color: #f9f9f9;
}
.article-container {
    background: white;
    padding: 30px;
    border-radius: 10px;
    box-shadow: 0 2px 10px rgba(0,0,0,0.1);
}
h1 {
    color: #2c3e50;
    font-size: 2.5em;
    margin-bottom: 20px;
    border-bottom: 3px solid #3498db;
    padding-bottom: 10px;
}
h2 {
    color: #34495e;
    font-size: 1.8em;
    margin-top: 30px;
    margin-bottom: 15px;
}
h3 {
    color: #2c3e50;
    font-size: 1.4em;
    margin-top: 25px;
    margin-bottom: 10px;
}
p {
    margin-bottom: 15px;
    text-align: justify;
}
.faq-section {
    background-color: #f8f9fa;
    padding: 20px;
    border-radius: 8px;
    margin: 30px 0;
}
.faq-item {
    margin-bottom: 15px;
}
.faq-question {
    font-weight: bold;
    color: #2c3e50;
    margin-bottom: 5px;
}
.image-container {
    text-align: center;
    margin: 20px 0;
}
.image-container img {
    max-width: 100%;
    height: auto;
    border-radius: 8px;
    box-shadow: 0 2px 8px rgba(0,0,0,0.1);
}
.conclusion {
    background-color: #d4edda;
    padding: 20px;
    border-radius: 8px;
    margin-top: 30px;
    border-left: 4px solid #28a745;
}
.meta-info {
    background-color: #e9ecef;
    padding: 15px;
    border-radius: 5px;
    margin-bottom: 20px;
    font-size: 0.9em;
    color: #6c757d;
}"#;

pub fn assemble(
    keyword: &str,
    content: &GeneratedContent,
    images: &[ImageRef],
    generated_at: DateTime<Utc>,
) -> String {
    let title = if content.title.is_empty() {
        keyword
    } else {
        &content.title
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="id">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="description" content="{description}">
    <meta name="keywords" content="{keywords}">
    <style>
{css}
    </style>
</head>
<body>
    <div class="article-container">
        <div class="meta-info">
            <strong>Keyword:</strong> {keyword} |
            <strong>Word Count:</strong> {word_count} |
            <strong>Published:</strong> {published}
        </div>

        <h1>{title}</h1>

        {body}

        {image_block}

        <div class="conclusion">
            <h3>Kesimpulan</h3>
            <p>{summary}</p>
        </div>
    </div>
</body>
</html>
"#,
        title = title,
        description = content.meta_description,
        keywords = content.keywords.join(", "),
        css = CSS,
        keyword = keyword,
        word_count = content.word_count,
        published = generated_at.format("%Y-%m-%d"),
        body = content.body_html,
        image_block = image_block(keyword, images),
        summary = content.summary,
    )
}

/// The image container, or an empty string when there are no images.
pub fn image_block(keyword: &str, images: &[ImageRef]) -> String {
    if images.is_empty() {
        return String::new();
    }
    let mut block = String::from("<div class=\"image-container\">");
    for (index, image) in images.iter().enumerate() {
        block.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" />",
            image.src(),
            acg_images::alt_text(keyword, index),
        ));
    }
    block.push_str("</div>");
    block
}
