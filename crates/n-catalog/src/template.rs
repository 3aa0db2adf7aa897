//! Submission templates.
//!
//! A template is plain text with `${name}` placeholders; `$$` is a literal
//! dollar sign and any other `$` is kept as is. Placeholders are filled from
//! a [`TemplateContext`] built from a keyword descriptor and the submitter's
//! details. Users may replace the built-in template per keyword.
//!
//! | Placeholder     | Value                                   |
//! |-----------------|-----------------------------------------|
//! | `${keyword}`    | keyword name                            |
//! | `${mailbox}`    | mailbox that processes the keyword      |
//! | `${syntax}`     | record syntax                           |
//! | `${example}`    | example record                          |
//! | `${attributes}` | attribute syntax, or empty              |
//! | `${replace}`    | correction syntax, or empty             |
//! | `${user}`       | submitter name                          |
//! | `${email}`      | submitter e-mail                        |
//! | `${signature}`  | submitter signature, or empty           |

use std::collections::HashMap;

use crate::error::CatalogError;
use crate::keyword::KeywordDescriptor;

/// Template used when the user has not configured one for the keyword.
pub const DEFAULT_TEMPLATE: &str = "\
# To: ${mailbox}
# From: ${user} <${email}>
# Subject: ${keyword} submission
#
# Syntax:  ${syntax}
# Example: ${example}
#
${keyword}
${syntax}
${signature}";

/// The person a submission is from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submitter {
    pub name: String,
    pub email: String,
    pub signature: String,
}

// ---------------------------------------------------------------------------
// Template
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    /// Placeholder name and its char offset in the source.
    Var(String, usize),
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template source.
    ///
    /// # Errors
    ///
    /// [`CatalogError::UnterminatedPlaceholder`] for a `${` without `}`.
    pub fn parse(source: &str) -> Result<Self, CatalogError> {
        let chars: Vec<char> = source.chars().collect();
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut i = 0;

        while i < chars.len() {
            match (chars[i], chars.get(i + 1)) {
                ('$', Some('$')) => {
                    text.push('$');
                    i += 2;
                }
                ('$', Some('{')) => {
                    let close = chars[i + 2..]
                        .iter()
                        .position(|&c| c == '}')
                        .ok_or(CatalogError::UnterminatedPlaceholder { offset: i })?;
                    if !text.is_empty() {
                        segments.push(Segment::Text(std::mem::take(&mut text)));
                    }
                    let name: String = chars[i + 2..i + 2 + close].iter().collect();
                    segments.push(Segment::Var(name.trim().to_string(), i));
                    i += close + 3;
                }
                (c, _) => {
                    text.push(c);
                    i += 1;
                }
            }
        }
        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }
        Ok(Self { segments })
    }

    /// Placeholder names in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Var(name, _) => Some(name.as_str()),
            Segment::Text(_) => None,
        })
    }

    /// Fill every placeholder from `context`.
    ///
    /// # Errors
    ///
    /// [`CatalogError::UnknownPlaceholder`] for a name the context lacks.
    pub fn expand(&self, context: &TemplateContext) -> Result<String, CatalogError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Var(name, offset) => {
                    let value = context.get(name).ok_or_else(|| CatalogError::UnknownPlaceholder {
                        name: name.clone(),
                        offset: *offset,
                    })?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// Values for placeholders.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    vars: HashMap<&'static str, String>,
}

impl TemplateContext {
    /// Everything a template may refer to for `desc`, submitted by `from`.
    #[must_use]
    pub fn new(desc: &KeywordDescriptor, from: &Submitter) -> Self {
        let vars = HashMap::from([
            ("keyword", desc.name().to_string()),
            ("mailbox", desc.mailbox.to_string()),
            ("syntax", desc.syntax.to_string()),
            ("example", desc.example.to_string()),
            ("attributes", desc.attributes.unwrap_or_default().to_string()),
            ("replace", desc.replace.unwrap_or_default().to_string()),
            ("user", from.name.clone()),
            ("email", from.email.clone()),
            ("signature", from.signature.clone()),
        ]);
        Self { vars }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }
}

/// Expand the template for `desc`, preferring a user override keyed by
/// keyword name (any case).
///
/// # Errors
///
/// Parse or expansion errors of the chosen template.
pub fn generate(
    desc: &KeywordDescriptor,
    from: &Submitter,
    overrides: &HashMap<String, String>,
) -> Result<String, CatalogError> {
    let source = overrides
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(desc.name()))
        .map_or(DEFAULT_TEMPLATE, |(_, v)| v.as_str());
    let mut text = Template::parse(source)?.expand(&TemplateContext::new(desc, from))?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    log::debug!("generated {} template ({} lines)", desc.name(), text.lines().count());
    Ok(text)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
