//! Help text for keywords.
//!
//! [`render_help`] is the single entry point: it resolves the descriptor's
//! [`HelpContent`] (fixed prose, or text generated from other reference data
//! by [`generate`]) and lays out syntax, example, and routing details under
//! it. The online guide is only linked, never fetched.

use std::fmt::Write;

use crate::error::CatalogError;
use crate::keyword::{self, HelpContent, KeywordDescriptor, KeywordId};

/// Guide location used when the configuration does not name one.
pub const DEFAULT_GUIDE_URL: &str = "https://help.submit.example/guide/";

/// Genre names accepted in `GENRES` records.
pub const GENRES: &[&str] = &[
    "Action", "Adult", "Adventure", "Animation", "Biography", "Comedy", "Crime", "Documentary",
    "Drama", "Family", "Fantasy", "Film-Noir", "Game-Show", "History", "Horror", "Music",
    "Musical", "Mystery", "News", "Reality-TV", "Romance", "Sci-Fi", "Short", "Sport",
    "Talk-Show", "Thriller", "War", "Western",
];

/// Tags of biography lines, with their meaning.
pub const BIOGRAPHY_TAGS: &[(&str, &str)] = &[
    ("NM", "name, as listed in credits"),
    ("RN", "real or birth name"),
    ("NK", "nickname"),
    ("DB", "date and place of birth"),
    ("DD", "date and place of death"),
    ("HT", "height"),
    ("BG", "biography paragraph"),
    ("BY", "author of the biography"),
    ("SP", "spouse"),
    ("TM", "trademark"),
    ("TR", "trivia item"),
    ("QU", "personal quote"),
    ("OW", "other works"),
    ("SA", "salary"),
];

/// Prefixes of `TECHNICAL` values.
pub const TECHNICAL_PREFIXES: &[(&str, &str)] = &[
    ("CAM", "camera and lenses"),
    ("MET", "film length in metres"),
    ("OFM", "original film format"),
    ("PFM", "printed film format"),
    ("RAT", "aspect ratio"),
    ("PCS", "cinematographic process"),
    ("LAB", "laboratory"),
];

/// Settings that affect rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpOptions {
    /// Base URL of the online guide; the keyword's guide path is appended.
    pub guide_url: String,
}

impl Default for HelpOptions {
    fn default() -> Self {
        Self {
            guide_url: DEFAULT_GUIDE_URL.to_string(),
        }
    }
}

/// Text for a [`HelpContent::Generated`] description.
///
/// # Errors
///
/// [`CatalogError::NoGeneratedHelp`] for a keyword without a generator.
pub fn generate(id: KeywordId) -> Result<String, CatalogError> {
    let mut out = String::new();
    match id.as_str() {
        "GENRES" => {
            out.push_str("One genre per record. Valid genres:\n");
            for chunk in GENRES.chunks(6) {
                let _ = writeln!(out, "  {}", chunk.join(", "));
            }
        }
        "BIOGRAPHY" => {
            out.push_str("One fact per line, each introduced by a tag:\n");
            for (tag, meaning) in BIOGRAPHY_TAGS {
                let _ = writeln!(out, "  {tag}: {meaning}");
            }
        }
        "TECHNICAL" => {
            out.push_str("Each value starts with a prefix and a colon:\n");
            for (prefix, meaning) in TECHNICAL_PREFIXES {
                let _ = writeln!(out, "  {prefix}: {meaning}");
            }
        }
        _ => return Err(CatalogError::NoGeneratedHelp(id.to_string())),
    }
    Ok(out)
}

/// Resolve a description to text.
///
/// # Errors
///
/// As [`generate`].
pub fn describe(content: HelpContent) -> Result<String, CatalogError> {
    match content {
        HelpContent::Literal(text) => Ok(format!("{text}\n")),
        HelpContent::Generated(id) => generate(id),
    }
}

/// Full help page for one keyword.
///
/// # Errors
///
/// As [`describe`].
pub fn render(desc: &KeywordDescriptor, options: &HelpOptions) -> Result<String, CatalogError> {
    let mut out = String::new();
    let _ = writeln!(out, "{}", desc.name());
    let _ = writeln!(out, "{}", "=".repeat(desc.name().len()));
    out.push('\n');
    out.push_str(&describe(desc.description)?);
    out.push('\n');
    let _ = writeln!(out, "Syntax:     {}", desc.syntax);
    let _ = writeln!(out, "Example:    {}", desc.example);
    if let Some(attributes) = desc.attributes {
        let _ = writeln!(out, "Attributes: {attributes}");
    }
    if let Some(replace) = desc.replace {
        let _ = writeln!(out, "Correction: {replace}");
    }
    let _ = writeln!(out, "Mailbox:    {}", desc.mailbox);
    let _ = writeln!(out, "Guide:      {}", guide_url(desc, options));
    Ok(out)
}

/// Look up `keyword` and render its help page.
///
/// # Errors
///
/// [`CatalogError::UnknownKeyword`] when the keyword is not in the catalog.
pub fn render_help(keyword: &str, options: &HelpOptions) -> Result<String, CatalogError> {
    let desc = keyword::lookup(keyword).ok_or_else(|| CatalogError::UnknownKeyword(keyword.to_string()))?;
    log::debug!("rendering help for {}", desc.name());
    render(desc, options)
}

/// One line per keyword: name, mailbox, syntax.
#[must_use]
pub fn render_index() -> String {
    let width = keyword::all().iter().map(|k| k.name().len()).max().unwrap_or(0);
    let mut out = String::new();
    for k in keyword::all() {
        let _ = writeln!(out, "{:<width$}  {:<6}  {}", k.name(), k.mailbox, k.syntax);
    }
    out
}

fn guide_url(desc: &KeywordDescriptor, options: &HelpOptions) -> String {
    let base = options.guide_url.trim_end_matches('/');
    format!("{base}/{}", desc.guide)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn literal_help_page() {
        let page = render_help("directors", &HelpOptions::default()).unwrap();
        assert_eq!(
            page,
            "DIRECTORS\n\
             =========\n\
             \n\
             Directors. Second-unit and assistant directors belong under MISC-CREW.\n\
             \n\
             Syntax:     Surname, Given (N)|Title (Year)|Attributes\n\
             Example:    Scott, Ridley|Blade Runner (1982)|\n\
             Attributes: (uncredited) | (voice) | (as Credited Name) | (archive footage)\n\
             Correction: Surname, Given (N)|Title (Year)|old value|new value\n\
             Mailbox:    crew\n\
             Guide:      https://help.submit.example/guide/credits\n"
        );
    }

    #[test]
    fn generated_help_lists_genres() {
        let page = render_help("GENRES", &HelpOptions::default()).unwrap();
        assert!(page.contains("Valid genres:"));
        assert!(page.contains("Sci-Fi"));
        assert!(!page.contains("Attributes:"));
    }

    #[test]
    fn generated_help_lists_biography_tags() {
        let text = generate(KeywordId("BIOGRAPHY")).unwrap();
        assert!(text.contains("  NM: name, as listed in credits\n"));
        assert_eq!(text.lines().count(), BIOGRAPHY_TAGS.len() + 1);
    }

    #[test]
    fn every_keyword_renders() {
        for k in keyword::all() {
            assert!(render(k, &HelpOptions::default()).is_ok(), "{}", k.name());
        }
    }

    #[test]
    fn unknown_keyword() {
        assert_eq!(
            render_help("SPOILERS", &HelpOptions::default()),
            Err(CatalogError::UnknownKeyword("SPOILERS".into()))
        );
        assert_eq!(
            generate(KeywordId("ACTORS")),
            Err(CatalogError::NoGeneratedHelp("ACTORS".into()))
        );
    }

    #[test]
    fn guide_url_joins_once() {
        let options = HelpOptions {
            guide_url: "http://localhost/guide///".into(),
        };
        let page = render_help("TRIVIA", &options).unwrap();
        assert!(page.ends_with("Guide:      http://localhost/guide/trivia\n"));
    }

    #[test]
    fn index_has_one_line_per_keyword() {
        let index = render_index();
        assert_eq!(index.lines().count(), keyword::all().len());
        assert!(index.lines().any(|l| l.starts_with("ACTORS ")));
    }
}
