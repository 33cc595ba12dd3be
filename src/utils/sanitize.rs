//! Markup stripping for free-text fields.
//!
//! Applied to user supplied text right before it is bound into a write
//! statement. Statements stay parameterized regardless.

/// Strips markup from `input`.
///
/// Every `<...>` tag is removed, leftover angle brackets and control
/// characters are dropped, and the result is trimmed. Applying it twice
/// gives the same result as applying it once.
///
/// An unterminated `<` is treated as a stray bracket, so the text after it
/// is kept.
pub fn sanitize_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => rest = &rest[open + 1..],
        }
    }
    out.push_str(rest);

    out.retain(|c| c != '<' && c != '>' && !c.is_control());
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_simple_tags() {
        assert_eq!(sanitize_text("<b>Ann</b>"), "Ann");
    }

    #[test]
    fn strips_script_tags_but_keeps_text() {
        assert_eq!(
            sanitize_text("<script>alert('x')</script>Bob"),
            "alert('x')Bob"
        );
    }

    #[test]
    fn plain_email_is_unchanged() {
        assert_eq!(sanitize_text("ann@example.com"), "ann@example.com");
    }

    #[test]
    fn stray_brackets_are_dropped() {
        assert_eq!(sanitize_text("a > b"), "a  b");
        assert_eq!(sanitize_text("1 < 2"), "1  2");
    }

    #[test]
    fn control_characters_and_padding_are_removed() {
        assert_eq!(sanitize_text("  Ann\u{0}\n "), "Ann");
    }

    #[test]
    fn sanitizing_is_idempotent() {
        let samples = [
            "<b>Ann</b>",
            "<<b>>Ann",
            "a < b > c",
            "<img src=x onerror=alert(1)>",
            " <i> spaced </i> ",
            "ann@example.com",
            "Zoë <em>Ünïcode</em>",
            "<",
            "",
        ];
        for sample in samples {
            let once = sanitize_text(sample);
            assert_eq!(sanitize_text(&once), once, "not idempotent for {sample:?}");
        }
    }
}
