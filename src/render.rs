//! Terminal rendering of highlighted text.

use n_catalog::highlight::{self, HighlightKind};

const RESET: &str = "\x1b[0m";

/// SGR sequence for a highlight kind.
const fn sgr(kind: HighlightKind) -> &'static str {
    match kind {
        HighlightKind::Comment => "\x1b[2;3m",
        HighlightKind::Keyword => "\x1b[1;35m",
        HighlightKind::Tag => "\x1b[1;36m",
        HighlightKind::Delimiter => "\x1b[2m",
        HighlightKind::Year => "\x1b[33m",
        HighlightKind::Numeral => "\x1b[32m",
        HighlightKind::Link => "\x1b[34m",
        HighlightKind::Title => "\x1b[4m",
    }
}

/// Render `text` with ANSI colors, one line at a time.
#[must_use]
pub fn ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for line in text.lines() {
        let chars: Vec<char> = line.chars().collect();
        let mut col = 0;
        for span in highlight::highlight_line(line) {
            out.extend(&chars[col..span.start]);
            out.push_str(sgr(span.kind));
            out.extend(&chars[span.start..span.end]);
            out.push_str(RESET);
            col = span.end;
        }
        out.extend(&chars[col..]);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_lines_pass_through() {
        assert_eq!(ansi("just prose\n"), "just prose\n");
    }

    #[test]
    fn spans_are_wrapped() {
        assert_eq!(ansi("a|b"), "a\x1b[2m|\x1b[0mb\n");
        assert_eq!(ansi("ACTORS"), "\x1b[1;35mACTORS\x1b[0m\n");
    }
}
