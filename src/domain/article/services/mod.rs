// src/domain/article/services/mod.rs

/// Maximum number of characters kept from the normalized content.
pub const EXCERPT_MAX_CHARS: usize = 160;

/// Appended when the normalized content was cut.
pub const EXCERPT_ELLIPSIS: char = '…';

/// Derives the listing excerpt from an article's content.
///
/// Whitespace runs collapse to a single space and the ends are trimmed. The
/// result holds at most [`EXCERPT_MAX_CHARS`] characters of content, followed
/// by [`EXCERPT_ELLIPSIS`] when anything was dropped. Missing content yields
/// an empty excerpt. The text is never interpreted as markup.
pub fn derive_excerpt(content: Option<&str>) -> String {
    let Some(content) = content else {
        return String::new();
    };

    let normalized = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.chars().count() <= EXCERPT_MAX_CHARS {
        return normalized;
    }

    let mut excerpt: String = normalized.chars().take(EXCERPT_MAX_CHARS).collect();
    excerpt.truncate(excerpt.trim_end().len());
    excerpt.push(EXCERPT_ELLIPSIS);
    excerpt
}
