//! LIKE-pattern escaping.
//!
//! User-supplied filter text is embedded into `LIKE '%...%' ESCAPE '\'`
//! patterns; `%`, `_` and the escape character itself must be neutralized so
//! they match literally instead of acting as wildcards.

/// Escape LIKE metacharacters with a backslash.
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_like("Mathematics"), "Mathematics");
    }

    #[test]
    fn percent_is_escaped() {
        assert_eq!(escape_like("100%"), "100\\%");
    }

    #[test]
    fn underscore_is_escaped() {
        assert_eq!(escape_like("CS_101"), "CS\\_101");
    }

    #[test]
    fn backslash_is_escaped() {
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }

    #[test]
    fn mixed_metacharacters() {
        assert_eq!(escape_like("%_\\"), "\\%\\_\\\\");
    }
}
