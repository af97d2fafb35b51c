//! Free-text field sanitization applied before validation.

use std::borrow::Cow;

/// Trims surrounding whitespace and HTML-escapes a display name.
///
/// Escapes `&`, `<`, `>`, `"` and `'`; forward slashes stay literal so a name
/// like `</b>` keeps its shape after encoding.
///
/// Existing entities are decoded before re-encoding, so the transform is
/// idempotent: re-sanitizing a stored value never double-escapes it.
///
/// # Examples
///
/// ```
/// use pandemic_stats::utils::sanitize::sanitize_name;
///
/// assert_eq!(sanitize_name("  <b>Thai</b>  "), "&lt;b&gt;Thai&lt;/b&gt;");
/// ```
pub fn sanitize_name(name: &str) -> String {
    let decoded: Cow<'_, str> = html_escape::decode_html_entities(name.trim());
    html_escape::encode_quoted_attribute(decoded.as_ref()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(sanitize_name("  Thailand  "), "Thailand");
        assert_eq!(sanitize_name("\tBangkok\n"), "Bangkok");
    }

    #[test]
    fn test_escapes_html_metacharacters() {
        assert_eq!(sanitize_name("  <b>Thai</b>  "), "&lt;b&gt;Thai&lt;/b&gt;");
        assert_eq!(sanitize_name("a & b"), "a &amp; b");
    }

    #[test]
    fn test_escapes_both_quote_characters() {
        assert_eq!(sanitize_name(r#"Ko "Phi Phi""#), "Ko &quot;Phi Phi&quot;");
        assert_eq!(sanitize_name("Ko' Samui"), "Ko&#x27; Samui");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "  <b>Thai</b>  ",
            "a & b",
            "plain",
            "  spaced  ",
            "<script>alert(1)</script>",
            r#"Ko "Phi Phi" & Ko' Samui"#,
        ];

        for input in inputs {
            let once = sanitize_name(input);
            let twice = sanitize_name(&once);
            assert_eq!(once, twice, "sanitize not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_whitespace_only_becomes_empty() {
        assert_eq!(sanitize_name("   "), "");
        assert_eq!(sanitize_name(""), "");
    }
}
