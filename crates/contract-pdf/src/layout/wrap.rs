use crate::constants::MARKUP_CHARS;

/// Remove Markdown control characters (`#`, `*`) one by one. Everything
/// else, including the newlines that separate paragraphs, is kept.
pub fn strip_markup(text: &str) -> String {
    text.chars().filter(|c| !MARKUP_CHARS.contains(c)).collect()
}

/// Greedy word wrap of one paragraph.
///
/// Words are appended to the current line while `measure(line) <= max_width`.
/// The word that would overflow starts the next line. Words are never split:
/// a single word wider than `max_width` becomes a line of its own and simply
/// overflows. A paragraph with no words yields no lines.
pub fn wrap_paragraph<F>(paragraph: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in paragraph.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if measure(&candidate) > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
