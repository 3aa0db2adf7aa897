//! The keyword catalog: one descriptor per record type.
//!
//! Each record type in a submission file is introduced by its keyword on a
//! line of its own, followed by record lines in that keyword's syntax. The
//! descriptors here are reference data only: they feed help text, templates,
//! and highlighting, and never change after start-up.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Stable identifier of a keyword: its upper-case name.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct KeywordId(pub &'static str);

impl KeywordId {
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for KeywordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Where a keyword's description comes from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HelpContent {
    /// Fixed prose.
    Literal(&'static str),
    /// Built on demand from other reference data; see
    /// [`generate`](crate::help::generate).
    Generated(KeywordId),
}

/// Everything known about one record type.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct KeywordDescriptor {
    pub id: KeywordId,
    /// Path of the keyword's page in the online submission guide.
    pub guide: &'static str,
    /// Formal syntax of one record line.
    pub syntax: &'static str,
    pub example: &'static str,
    /// Mailbox that processes this record type.
    pub mailbox: &'static str,
    pub description: HelpContent,
    /// Syntax of the optional attribute part, if the record has one.
    pub attributes: Option<&'static str>,
    /// Syntax for correcting an existing entry, if corrections are accepted.
    pub replace: Option<&'static str>,
}

impl KeywordDescriptor {
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.id.0
    }
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

const fn credit(
    name: &'static str,
    mailbox: &'static str,
    syntax: &'static str,
    example: &'static str,
    description: &'static str,
) -> KeywordDescriptor {
    KeywordDescriptor {
        id: KeywordId(name),
        guide: "credits",
        syntax,
        example,
        mailbox,
        description: HelpContent::Literal(description),
        attributes: Some("(uncredited) | (voice) | (as Credited Name) | (archive footage)"),
        replace: Some("Surname, Given (N)|Title (Year)|old value|new value"),
    }
}

const CREW_SYNTAX: &str = "Surname, Given (N)|Title (Year)|Attributes";
const CAST_SYNTAX: &str = "Surname, Given (N)|Title (Year)|Attributes|Character";

static KEYWORDS: [KeywordDescriptor; 26] = [
    credit(
        "ACTORS",
        "cast",
        CAST_SYNTAX,
        "Ford, Harrison|Blade Runner (1982)||Rick Deckard",
        "Male cast members and the characters they play.",
    ),
    credit(
        "ACTRESSES",
        "cast",
        CAST_SYNTAX,
        "Young, Sean|Blade Runner (1982)||Rachael",
        "Female cast members and the characters they play.",
    ),
    credit(
        "DIRECTORS",
        "crew",
        CREW_SYNTAX,
        "Scott, Ridley|Blade Runner (1982)|",
        "Directors. Second-unit and assistant directors belong under MISC-CREW.",
    ),
    credit(
        "WRITERS",
        "crew",
        "Surname, Given (N)|Title (Year)|Attributes|Writing credit",
        "Dick, Philip K.|Blade Runner (1982)||novel",
        "Writers, with the writing credit exactly as on screen.",
    ),
    credit(
        "PRODUCERS",
        "crew",
        "Surname, Given (N)|Title (Year)|Attributes|Producer role",
        "Deeley, Michael|Blade Runner (1982)||producer",
        "Producers, with the producer role as credited.",
    ),
    credit(
        "COMPOSERS",
        "crew",
        CREW_SYNTAX,
        "Vangelis|Blade Runner (1982)|",
        "Composers of original music.",
    ),
    credit(
        "CINEMATOGRAPHERS",
        "crew",
        CREW_SYNTAX,
        "Cronenweth, Jordan|Blade Runner (1982)|",
        "Directors of photography.",
    ),
    credit(
        "EDITORS",
        "crew",
        CREW_SYNTAX,
        "Clark, Marsha|Blade Runner (1982)|",
        "Film editors.",
    ),
    credit(
        "COSTUME-DESIGNERS",
        "crew",
        CREW_SYNTAX,
        "Kaplan, Michael|Blade Runner (1982)|",
        "Costume designers.",
    ),
    credit(
        "PRODUCTION-DESIGNERS",
        "crew",
        CREW_SYNTAX,
        "Paull, Lawrence G.|Blade Runner (1982)|",
        "Production designers.",
    ),
    credit(
        "MISC-CREW",
        "crew",
        "Surname, Given (N)|Title (Year)|Attributes|Job",
        "Dryer, David|Blade Runner (1982)||special photographic effects supervisor",
        "Every other crew member, with the job as credited.",
    ),
    KeywordDescriptor {
        id: KeywordId("TITLE"),
        guide: "titles",
        syntax: "Title (Year)",
        example: "Blade Runner (1982)",
        mailbox: "titles",
        description: HelpContent::Literal(
            "A new title. Use the original-language title and the year of first release.",
        ),
        attributes: Some("(TV) | (V) | (VG)"),
        replace: Some("Title (Year)|Corrected Title (Year)"),
    },
    KeywordDescriptor {
        id: KeywordId("AKA-TITLES"),
        guide: "aka",
        syntax: "Title (Year)|Alternative title|Country",
        example: "Blade Runner (1982)|Der Blade Runner|West Germany",
        mailbox: "titles",
        description: HelpContent::Literal("Alternative titles, one per country or language."),
        attributes: Some("(working title) | (video title) | (literal title)"),
        replace: None,
    },
    KeywordDescriptor {
        id: KeywordId("RELEASE-DATES"),
        guide: "release",
        syntax: "Title (Year)|Country|DD Month YYYY|Attributes",
        example: "Blade Runner (1982)|USA|25 June 1982|",
        mailbox: "data",
        description: HelpContent::Literal("First public release per country."),
        attributes: Some("(premiere) | (festival) | (limited)"),
        replace: Some("Title (Year)|Country|old date|new date"),
    },
    KeywordDescriptor {
        id: KeywordId("RUNNING-TIMES"),
        guide: "running",
        syntax: "Title (Year)|Minutes|Country",
        example: "Blade Runner (1982)|117|USA",
        mailbox: "data",
        description: HelpContent::Literal("Running time in whole minutes."),
        attributes: Some("(director's cut) | (TV version)"),
        replace: Some("Title (Year)|old minutes|new minutes"),
    },
    KeywordDescriptor {
        id: KeywordId("GENRES"),
        guide: "genres",
        syntax: "Title (Year)|Genre",
        example: "Blade Runner (1982)|Sci-Fi",
        mailbox: "data",
        description: HelpContent::Generated(KeywordId("GENRES")),
        attributes: None,
        replace: None,
    },
    KeywordDescriptor {
        id: KeywordId("LANGUAGES"),
        guide: "languages",
        syntax: "Title (Year)|Language",
        example: "Blade Runner (1982)|English",
        mailbox: "data",
        description: HelpContent::Literal("Spoken languages, most prominent first."),
        attributes: None,
        replace: None,
    },
    KeywordDescriptor {
        id: KeywordId("COUNTRIES"),
        guide: "countries",
        syntax: "Title (Year)|Country",
        example: "Blade Runner (1982)|USA",
        mailbox: "data",
        description: HelpContent::Literal("Countries of production."),
        attributes: None,
        replace: None,
    },
    KeywordDescriptor {
        id: KeywordId("LOCATIONS"),
        guide: "locations",
        syntax: "Title (Year)|Place, Region, Country|Attributes",
        example: "Blade Runner (1982)|Bradbury Building, Los Angeles, California, USA|",
        mailbox: "data",
        description: HelpContent::Literal("Filming locations, most specific place first."),
        attributes: Some("(scene description)"),
        replace: None,
    },
    KeywordDescriptor {
        id: KeywordId("TECHNICAL"),
        guide: "technical",
        syntax: "Title (Year)|PFX:Value",
        example: "Blade Runner (1982)|RAT:2.39 : 1",
        mailbox: "data",
        description: HelpContent::Generated(KeywordId("TECHNICAL")),
        attributes: None,
        replace: Some("Title (Year)|PFX:old value|PFX:new value"),
    },
    KeywordDescriptor {
        id: KeywordId("KEYWORDS"),
        guide: "keywords",
        syntax: "Title (Year)|keyword",
        example: "Blade Runner (1982)|replicant",
        mailbox: "data",
        description: HelpContent::Literal("Plot keywords: lower case, words joined by hyphens."),
        attributes: None,
        replace: None,
    },
    KeywordDescriptor {
        id: KeywordId("TRIVIA"),
        guide: "trivia",
        syntax: "Title (Year)|Text",
        example: "Blade Runner (1982)|Philip K. Dick (qv) died before the film was released.",
        mailbox: "text",
        description: HelpContent::Literal(
            "One item of trivia per record. Link people and titles with (qv).",
        ),
        attributes: None,
        replace: Some("Title (Year)|old text|new text"),
    },
    KeywordDescriptor {
        id: KeywordId("GOOFS"),
        guide: "goofs",
        syntax: "Title (Year)|Category|Text",
        example: "Blade Runner (1982)|CONT|Deckard's shirt changes between shots.",
        mailbox: "text",
        description: HelpContent::Literal("Mistakes, one per record, with a category code."),
        attributes: None,
        replace: Some("Title (Year)|old text|new text"),
    },
    KeywordDescriptor {
        id: KeywordId("QUOTES"),
        guide: "quotes",
        syntax: "Title (Year)|Character: Line",
        example: "Blade Runner (1982)|Roy Batty: Time to die.",
        mailbox: "text",
        description: HelpContent::Literal("Memorable dialogue, one exchange per record."),
        attributes: None,
        replace: None,
    },
    KeywordDescriptor {
        id: KeywordId("PLOT"),
        guide: "plot",
        syntax: "Title (Year)|Summary|Author",
        example: "Blade Runner (1982)|A blade runner must pursue four replicants.|Anonymous",
        mailbox: "text",
        description: HelpContent::Literal("Plot summary in your own words, with spoilers marked."),
        attributes: None,
        replace: Some("Title (Year)|old summary|new summary"),
    },
    KeywordDescriptor {
        id: KeywordId("BIOGRAPHY"),
        guide: "biography",
        syntax: "XX: Value",
        example: "NM: Ford, Harrison",
        mailbox: "bios",
        description: HelpContent::Generated(KeywordId("BIOGRAPHY")),
        attributes: None,
        replace: None,
    },
];

static INDEX: LazyLock<HashMap<&'static str, &'static KeywordDescriptor>> =
    LazyLock::new(|| KEYWORDS.iter().map(|k| (k.name(), k)).collect());

/// Every descriptor, in catalog order.
#[must_use]
pub fn all() -> &'static [KeywordDescriptor] {
    &KEYWORDS
}

/// Look up a keyword by name, ignoring case.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static KeywordDescriptor> {
    INDEX.get(name.to_ascii_uppercase().as_str()).copied()
}

/// Look up by exact id.
#[must_use]
pub fn get(id: KeywordId) -> Option<&'static KeywordDescriptor> {
    INDEX.get(id.0).copied()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
