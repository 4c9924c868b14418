//! Text helpers shared by the classifiers.

/// Lower-case `raw`, split camelCase words and turn every run of
/// non-alphanumeric characters into a single space.
///
/// `iconSearch_24px` becomes `icon search 24px`.
pub(crate) fn normalize_signal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 8);
    let mut prev_lower = false;
    let mut pending_space = false;

    for c in raw.chars() {
        if c.is_alphanumeric() {
            if c.is_uppercase() && prev_lower {
                pending_space = true;
            }
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.extend(c.to_lowercase());
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
        } else {
            pending_space = true;
            prev_lower = false;
        }
    }
    out
}

/// Collapse whitespace runs to single spaces and trim.
pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Upper-case the first character.
pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-case the first character of every word.
pub(crate) fn title_case(words: &[String]) -> String {
    words
        .iter()
        .map(|w| capitalize_first(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cut `s` to at most `max` characters.
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => s[..cut].trim_end().to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_signal_separators() {
        assert_eq!(normalize_signal("icon-search_24px.svg"), "icon search 24px svg");
        assert_eq!(normalize_signal("  --a--b  "), "a b");
    }

    #[test]
    fn test_normalize_signal_camel_case() {
        assert_eq!(normalize_signal("iconSearch"), "icon search");
        assert_eq!(normalize_signal("heartGradient"), "heart gradient");
        assert_eq!(normalize_signal("HTMLLogo"), "htmllogo");
    }

    #[test]
    fn test_normalize_keeps_accented_letters() {
        assert_eq!(normalize_signal("Gráfico_Vendas"), "gráfico vendas");
    }

    #[test]
    fn test_capitalize_and_title_case() {
        assert_eq!(capitalize_first("ícone"), "Ícone");
        assert_eq!(capitalize_first(""), "");
        let words = vec!["acme".to_string(), "corp".to_string()];
        assert_eq!(title_case(&words), "Acme Corp");
    }

    #[test]
    fn test_collapse_and_truncate() {
        assert_eq!(collapse_whitespace("  a \n  b "), "a b");
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 3), "ab");
    }
}
