//! Syntax highlighting for submission files.
//!
//! Line-at-a-time and regex driven: the format has no nesting that spans
//! lines, so every line is classified on its own. [`highlight_line`] returns
//! non-overlapping spans in char offsets, sorted by start. Where two rules
//! overlap, the earlier-starting (then longer) span wins, so a linked title
//! `_Blade Runner (1982)_` is one `Title` span rather than a title with a
//! year inside it.

use std::sync::LazyLock;

use regex::Regex;

use crate::keyword;

/// What a span of text is.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum HighlightKind {
    /// A `#` line.
    Comment,
    /// A catalog keyword starting a line.
    Keyword,
    /// A biography tag such as `NM: `.
    Tag,
    /// The `|` field separator.
    Delimiter,
    /// `(1982)`, `(1982/II)`, `(????)`.
    Year,
    /// A disambiguation suffix such as `(III)`.
    Numeral,
    /// The `(qv)` cross-reference marker.
    Link,
    /// A linked title, `_Title (Year)_`.
    Title,
}

/// A highlighted span `[start, end)` in chars.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub kind: HighlightKind,
}

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{2}: ").unwrap());
static KEYWORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][A-Z-]*\b").unwrap());

// Order matters only for ties on start and length.
static RULES: LazyLock<Vec<(Regex, HighlightKind)>> = LazyLock::new(|| {
    [
        (r"_[^_|]+_", HighlightKind::Title),
        (r"\((?:\d{4}|\?{4})(?:/[IVXL]+)?\)", HighlightKind::Year),
        (r"\([IVXL]+\)", HighlightKind::Numeral),
        (r"\(qv\)", HighlightKind::Link),
        (r"\|", HighlightKind::Delimiter),
    ]
    .into_iter()
    .map(|(pattern, kind)| (Regex::new(pattern).unwrap(), kind))
    .collect()
});

/// Classify one line (without its line ending).
#[must_use]
pub fn highlight_line(line: &str) -> Vec<Span> {
    let to_char = |byte: usize| line[..byte].chars().count();

    if line.starts_with('#') {
        return vec![Span {
            start: 0,
            end: line.chars().count(),
            kind: HighlightKind::Comment,
        }];
    }

    let mut found: Vec<Span> = Vec::new();

    if let Some(m) = TAG.find(line) {
        found.push(Span {
            start: 0,
            end: to_char(m.end()) - 1,
            kind: HighlightKind::Tag,
        });
    } else if let Some(m) = KEYWORD.find(line) {
        // Only a keyword standing alone on its line (or followed by a space).
        let rest = &line[m.end()..];
        if (rest.is_empty() || rest.starts_with(' ')) && keyword::lookup(m.as_str()).is_some() {
            found.push(Span {
                start: 0,
                end: to_char(m.end()),
                kind: HighlightKind::Keyword,
            });
        }
    }

    for (regex, kind) in RULES.iter() {
        found.extend(regex.find_iter(line).map(|m| Span {
            start: to_char(m.start()),
            end: to_char(m.end()),
            kind: *kind,
        }));
    }

    found.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
    let mut spans: Vec<Span> = Vec::with_capacity(found.len());
    for span in found {
        if spans.last().is_none_or(|last| span.start >= last.end) {
            spans.push(span);
        }
    }
    spans
}

/// Highlight every line of `text`.
#[must_use]
pub fn highlight(text: &str) -> Vec<Vec<Span>> {
    text.lines().map(highlight_line).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(line: &str) -> Vec<(usize, usize, HighlightKind)> {
        highlight_line(line).into_iter().map(|s| (s.start, s.end, s.kind)).collect()
    }

    use HighlightKind::*;

    #[test]
    fn comment_line_is_one_span() {
        assert_eq!(kinds("# To: cast |x| (1982)"), [(0, 21, Comment)]);
    }

    #[test]
    fn keyword_line() {
        assert_eq!(kinds("ACTORS"), [(0, 6, Keyword)]);
        assert_eq!(kinds("MISC-CREW"), [(0, 9, Keyword)]);
        assert!(kinds("NOT-A-KEYWORD").is_empty());
        assert!(kinds("ACTORSX").is_empty());
    }

    #[test]
    fn credit_line() {
        assert_eq!(
            kinds("Evans, Peter (II)|Blade Runner (1982)||Rick Deckard"),
            [
                (13, 17, Numeral),
                (17, 18, Delimiter),
                (31, 37, Year),
                (37, 38, Delimiter),
                (38, 39, Delimiter),
            ]
        );
    }

    #[test]
    fn year_with_numeral_is_one_span() {
        assert_eq!(kinds("Hamlet (1990/I)"), [(7, 15, Year)]);
        assert_eq!(kinds("Untitled (????)"), [(9, 15, Year)]);
    }

    #[test]
    fn linked_title_swallows_year() {
        assert_eq!(kinds("_Blade Runner (1982)_ (qv)"), [(0, 21, Title), (22, 26, Link)]);
    }

    #[test]
    fn tag_line() {
        assert_eq!(kinds("NM: Ford, Harrison (qv)"), [(0, 3, Tag), (19, 23, Link)]);
    }

    #[test]
    fn offsets_are_chars() {
        assert_eq!(kinds("Gómez|x"), [(5, 6, Delimiter)]);
    }

    #[test]
    fn highlight_every_line() {
        let all = highlight("ACTORS\nFord, Harrison|x\n# note");
        assert_eq!(all.len(), 3);
        assert_eq!(all[2][0].kind, Comment);
    }
}
