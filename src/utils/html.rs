use std::collections::HashSet;

/// Reduces backend HTML (story bodies, descriptions) to plain text for the terminal.
///
/// Uses an ammonia builder with no allowed tags: markup is dropped, text is kept,
/// and `<script>`/`<style>` blocks disappear together with their content.
/// ammonia re-escapes the text it emits, so the common entities are decoded back.
pub fn plain_text(input: &str) -> String {
    let mut builder = ammonia::Builder::empty();
    builder.clean_content_tags(HashSet::from(["script", "style"]));
    let cleaned = builder.clean(input).to_string();

    cleaned
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}
