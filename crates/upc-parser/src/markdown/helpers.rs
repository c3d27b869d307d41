use std::borrow::Cow;

pub(super) fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or_default().trim().to_string()
}

pub(super) fn heading_text(raw: &str) -> String {
    first_line(raw)
        .trim_start_matches('#')
        .trim()
        .trim_end_matches('#')
        .trim()
        .to_string()
}

/// Strip a bullet (`-`, `*`, `+`) or ordered (`1.`, `1)`) list marker.
pub(super) fn strip_list_marker(line: &str) -> Option<&str> {
    let line = line.trim_start();
    for marker in ["- ", "* ", "+ "] {
        if let Some(rest) = line.strip_prefix(marker) {
            return Some(rest.trim_start());
        }
    }

    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 || digits > 9 {
        return None;
    }
    let rest = &line[digits..];
    rest.strip_prefix(". ")
        .or_else(|| rest.strip_prefix(") "))
        .map(str::trim_start)
}

/// Split `[label](target) rest` into its three parts.
///
/// Backslash-escaped brackets do not count toward nesting and are unescaped
/// in the returned label. Returns `None` unless the text opens with an
/// inline link.
pub(super) fn split_leading_link(text: &str) -> Option<(Cow<'_, str>, &str, &str)> {
    let text = text.strip_prefix('[')?;

    let mut depth = 0usize;
    let mut close_bracket = None;
    let mut escaped = false;
    for (i, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '[' => depth += 1,
            ']' if depth == 0 => {
                close_bracket = Some(i);
                break;
            }
            ']' => depth -= 1,
            _ => {}
        }
    }
    let close_bracket = close_bracket?;
    let label = &text[..close_bracket];
    let after = text[close_bracket + 1..].strip_prefix('(')?;

    let (target, rest) = if let Some(inner) = after.strip_prefix('<') {
        let end = inner.find('>')?;
        let tail = &inner[end + 1..];
        let close = tail.find(')')?;
        (&inner[..end], &tail[close + 1..])
    } else {
        let mut depth = 0usize;
        let mut close = None;
        for (i, ch) in after.char_indices() {
            match ch {
                '(' => depth += 1,
                ')' if depth == 0 => {
                    close = Some(i);
                    break;
                }
                ')' => depth -= 1,
                _ => {}
            }
        }
        let close = close?;
        // An unbracketed destination ends at the first space; anything after is a title.
        let destination = after[..close]
            .split_whitespace()
            .next()
            .unwrap_or_default();
        (destination, &after[close + 1..])
    };

    Some((unescape(label.trim()), target.trim(), rest))
}

/// Resolve backslash escapes of ASCII punctuation; other backslashes stay.
pub(super) fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some(next) if next.is_ascii_punctuation() => out.push(next),
            Some(next) => {
                out.push(ch);
                out.push(next);
            }
            None => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Drop one leading `:`, `-`, `–` or `—` separator between link and description.
pub(super) fn strip_description_separator(rest: &str) -> &str {
    let rest = rest.trim_start();
    for separator in [':', '-', '\u{2013}', '\u{2014}'] {
        if let Some(stripped) = rest.strip_prefix(separator) {
            return stripped.trim();
        }
    }
    rest.trim()
}

pub(super) fn is_external(target: &str) -> bool {
    target.contains("://") || target.starts_with("mailto:") || target.starts_with('#')
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("- item", Some("item"))]
    #[case("* item", Some("item"))]
    #[case("+   item", Some("item"))]
    #[case("1. item", Some("item"))]
    #[case("12) item", Some("item"))]
    #[case("-item", None)]
    #[case("item", None)]
    #[case("1.item", None)]
    fn list_markers(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(strip_list_marker(line), expected);
    }

    #[test]
    fn leading_link_with_description() {
        let (label, target, rest) =
            split_leading_link("[AHN preprocessing](1.%20AHN.ipynb): details").expect("link");
        assert_eq!(label, "AHN preprocessing");
        assert_eq!(target, "1.%20AHN.ipynb");
        assert_eq!(rest, ": details");
    }

    #[test]
    fn leading_link_with_angle_brackets_and_title() {
        let (_, target, rest) =
            split_leading_link("[A](<dir/a b.ipynb> \"Title\") tail").expect("link");
        assert_eq!(target, "dir/a b.ipynb");
        assert_eq!(rest, " tail");

        let (_, target, _) = split_leading_link("[A](a.ipynb \"Title\")").expect("link");
        assert_eq!(target, "a.ipynb");
    }

    #[test]
    fn nested_brackets_and_parens_are_balanced() {
        let (label, target, rest) =
            split_leading_link("[Fusion [v2]](fusion_(v2).ipynb) x").expect("link");
        assert_eq!(label, "Fusion [v2]");
        assert_eq!(target, "fusion_(v2).ipynb");
        assert_eq!(rest, " x");
    }

    #[test]
    fn escaped_brackets_do_not_close_the_label() {
        let (label, target, rest) =
            split_leading_link(r"[Fusion \] notes](fusion.ipynb): d").expect("link");
        assert_eq!(label, "Fusion ] notes");
        assert_eq!(target, "fusion.ipynb");
        assert_eq!(rest, ": d");
    }

    #[rstest]
    #[case(r"plain", "plain")]
    #[case(r"a\](b", "a](b")]
    #[case(r"C:\\data", r"C:\data")]
    #[case(r"keep \d", r"keep \d")]
    #[case(r"trailing \", r"trailing \")]
    fn label_unescaping(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(unescape(raw), expected);
    }

    #[test]
    fn text_without_leading_link_is_ignored() {
        assert!(split_leading_link("See [A](a.ipynb)").is_none());
        assert!(split_leading_link("[A] not a link").is_none());
        assert!(split_leading_link("[A](unterminated").is_none());
    }

    #[rstest]
    #[case(": desc", "desc")]
    #[case(" - desc", "desc")]
    #[case(" \u{2014} desc", "desc")]
    #[case(" desc", "desc")]
    #[case(": - keeps inner dash", "- keeps inner dash")]
    #[case("", "")]
    fn description_separators(#[case] rest: &str, #[case] expected: &str) {
        assert_eq!(strip_description_separator(rest), expected);
    }

    #[test]
    fn heading_text_strips_hashes() {
        assert_eq!(heading_text("## Notebooks ##\n"), "Notebooks");
    }
}
