//! Field location: which field the cursor is in, and where it starts and
//! ends.
//!
//! A record line is split into fields by `|`. A tag line (`NM: ...`) is a
//! single field: everything after the four-char prefix, pipes included.
//! Fields are numbered from 1 and spans are char offsets `[start, end)`.
//!
//! Names are located slightly more generously (see [`locate_name`]): `": "`
//! also starts a name, so `"Director: Ridley Scott"` yields `Ridley Scott`.

use std::sync::LazyLock;

use regex::Regex;

/// Field separator on record lines.
pub const DELIMITER: char = '|';

/// Length of a tag prefix such as `"NM: "`.
pub const TAG_PREFIX_LEN: usize = 4;

static TAG_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{2}: ").unwrap());

// Comment/marker characters may precede the tag on name lines.
static NAME_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[#@]*[A-Z][A-Z0-9-]*: ").unwrap());

/// True when `line` starts with a two-letter tag and `": "`.
#[must_use]
pub fn is_tag_line(line: &str) -> bool {
    TAG_LINE.is_match(line)
}

/// Number of fields on `line`: pipes plus one, or one for a tag line.
#[must_use]
pub fn field_count(line: &str) -> usize {
    if is_tag_line(line) {
        1
    } else {
        line.chars().filter(|&c| c == DELIMITER).count() + 1
    }
}

// ---------------------------------------------------------------------------
// FieldSpan
// ---------------------------------------------------------------------------

/// A field located on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpan {
    /// 1-indexed field number.
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl FieldSpan {
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// The field's text on `line`.
    #[must_use]
    pub fn text(self, line: &str) -> String {
        line.chars().skip(self.start).take(self.len()).collect()
    }
}

/// Locate the field containing char offset `offset`.
///
/// Offsets past the end of the line are clamped. A cursor sitting on a `|`
/// belongs to the field that the `|` closes.
#[must_use]
pub fn locate(line: &str, offset: usize) -> FieldSpan {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();

    if is_tag_line(line) {
        return FieldSpan {
            index: 1,
            start: TAG_PREFIX_LEN,
            end: len,
        };
    }

    let offset = offset.min(len);
    let start = chars[..offset]
        .iter()
        .rposition(|&c| c == DELIMITER)
        .map_or(0, |i| i + 1);
    let end = chars[offset..]
        .iter()
        .position(|&c| c == DELIMITER)
        .map_or(len, |i| offset + i);
    let index = chars[..start].iter().filter(|&&c| c == DELIMITER).count() + 1;

    FieldSpan { index, start, end }
}

/// Spans of every field on `line`, in order.
#[must_use]
pub fn fields(line: &str) -> Vec<FieldSpan> {
    let len = line.chars().count();
    if is_tag_line(line) {
        return vec![FieldSpan {
            index: 1,
            start: TAG_PREFIX_LEN,
            end: len,
        }];
    }

    let mut spans = Vec::new();
    let mut start = 0;
    for (i, c) in line.chars().enumerate() {
        if c == DELIMITER {
            spans.push(FieldSpan {
                index: spans.len() + 1,
                start,
                end: i,
            });
            start = i + 1;
        }
    }
    spans.push(FieldSpan {
        index: spans.len() + 1,
        start,
        end: len,
    });
    spans
}

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

/// Locate the name around `offset` as a trimmed span `(start, end)`.
///
/// A name starts after the last `|` or `": "` before the cursor (or after a
/// leading tag prefix such as `"@NM: "`) and ends at the next `|` or the end
/// of the line. A cursor still inside a `"Label: "` gets the name after the
/// label. Surrounding spaces are excluded.
#[must_use]
pub fn locate_name(line: &str, offset: usize) -> (usize, usize) {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();
    let offset = offset.min(len);

    let tag_end = NAME_TAG
        .find(line)
        .map_or(0, |m| line[..m.end()].chars().count());

    let after_pipe = chars[..offset]
        .iter()
        .rposition(|&c| c == DELIMITER)
        .map_or(0, |i| i + 1);
    let after_colon = chars[..offset]
        .windows(2)
        .rposition(|w| w == [':', ' '])
        .map_or(0, |i| i + 2);

    let field_end = chars[offset..]
        .iter()
        .position(|&c| c == DELIMITER)
        .map_or(len, |i| offset + i);
    let mut start = tag_end.max(after_pipe).max(after_colon).min(len);

    // A cursor on or before a `label: ` names what follows the label.
    if let Some(i) = chars[start..field_end.max(start)]
        .windows(2)
        .position(|w| w == [':', ' '])
    {
        start += i + 2;
    }
    let mut end = field_end.max(start);

    while start < end && chars[start] == ' ' {
        start += 1;
    }
    while end > start && chars[end - 1] == ' ' {
        end -= 1;
    }
    (start, end)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
