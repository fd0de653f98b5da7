pub const TITLE_MAX: usize = 70;
pub const DESCRIPTION_MAX: usize = 155;

const ELLIPSIS: char = '…';

/// Truncates `text` to at most `max_chars` characters, marking the cut with an ellipsis.
/// Lengths are counted in chars, not bytes.
pub fn clamp(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut clamped: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    let trimmed_len = clamped.trim_end().len();
    clamped.truncate(trimmed_len);
    clamped.push(ELLIPSIS);
    clamped
}

pub fn clamp_title(title: &str) -> String {
    clamp(title, TITLE_MAX)
}

pub fn clamp_description(description: &str) -> String {
    clamp(description, DESCRIPTION_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_text_at_the_limit() {
        assert_eq!(clamp("12345", 5), "12345");
        assert_eq!(clamp("", 5), "");
    }

    #[test]
    fn truncates_with_ellipsis() {
        let out = clamp("123456", 5);
        assert_eq!(out, "1234…");
        assert_eq!(out.chars().count(), 5);
    }

    #[test]
    fn never_exceeds_tiny_limits() {
        assert_eq!(clamp("abc", 0), "");
        assert_eq!(clamp("", 0), "");
        assert_eq!(clamp("abc", 1), "…");
        for max in 0..4 {
            assert!(clamp("abcdef", max).chars().count() <= max);
        }
    }

    #[test]
    fn trims_whitespace_before_the_ellipsis() {
        assert_eq!(clamp("abc   defgh", 6), "abc…");
    }

    #[test]
    fn counts_chars_not_bytes() {
        let text = "ééééé";
        assert_eq!(clamp(text, 5), text);
        assert_eq!(clamp("éééééé", 5), "éééé…");
    }

    #[test]
    fn long_titles_fit_the_ceiling() {
        let long = "Woodpecker Damage Repair/Wood Siding & EIFS Services in Fort Walton Beach, FL";
        let out = clamp_title(long);
        assert!(out.chars().count() <= TITLE_MAX);
        assert!(out.ends_with('…'));
        let desc = "x".repeat(400);
        assert_eq!(clamp_description(&desc).chars().count(), DESCRIPTION_MAX);
    }
}
