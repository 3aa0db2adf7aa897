//! Command-line interface.

use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};
use n_editor::{Position, Side};
use n_field::{FieldCommand, LinkKind, Step};

#[derive(Parser, Debug)]
#[command(
    name = "n-submit",
    about = "Edit, explain and generate structured submission files",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Load configuration from a specific file
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (repeat for more detail)
    #[arg(short = 'v', action = ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// A file and a cursor in it.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct At {
    /// Submission file to edit
    pub file: PathBuf,

    /// Cursor line, 1-indexed
    #[arg(short = 'l', long, default_value_t = 1)]
    pub line: usize,

    /// Cursor column, 1-indexed
    #[arg(short = 'C', long, default_value_t = 1)]
    pub column: usize,

    /// Print the edited file instead of saving it
    #[arg(long)]
    pub stdout: bool,
}

impl At {
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::from_one_based(self.line, self.column)
    }
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Copy the cursor's field from the previous (or next) line
    CopyField {
        #[command(flatten)]
        at: At,
        /// Copy from the next line instead of the previous one
        #[arg(long)]
        next: bool,
    },

    /// Rewrite "Given Surname" as "Surname, Given"
    SwapName {
        #[command(flatten)]
        at: At,
        /// Number of given names (default from config)
        #[arg(short = 'g', long)]
        given: Option<usize>,
    },

    /// Step the roman numeral suffix of a name up or down
    #[command(group(ArgGroup::new("step").required(true).args(["up", "down"])))]
    Numeral {
        #[command(flatten)]
        at: At,
        #[arg(long)]
        up: bool,
        #[arg(long)]
        down: bool,
    },

    /// Add (qv) link markup to the field under the cursor
    Link {
        #[command(flatten)]
        at: At,
        /// Mark the field up as a title rather than a name
        #[arg(long)]
        title: bool,
    },

    /// Show the help page of a keyword
    Help { keyword: String },

    /// List every keyword with its mailbox and syntax
    Keywords,

    /// Generate a submission skeleton for a keyword
    Template {
        keyword: String,
        /// Write to FILE instead of stdout
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Overwrite FILE if it exists
        #[arg(long, requires = "output")]
        force: bool,
    },

    /// Print a file with syntax highlighting
    Highlight {
        file: PathBuf,
        /// Emit colors even when stdout is not a terminal
        #[arg(long)]
        color: bool,
    },
}

impl CliCommand {
    /// The field edit and its cursor, for the editing subcommands.
    #[must_use]
    pub fn field_command(&self, default_given: usize) -> Option<(&At, FieldCommand)> {
        Some(match self {
            Self::CopyField { at, next } => {
                let side = if *next { Side::Next } else { Side::Previous };
                (at, FieldCommand::CopyField(side))
            }
            Self::SwapName { at, given } => (at, FieldCommand::SwapName(given.unwrap_or(default_given))),
            Self::Numeral { at, down, .. } => {
                let step = if *down { Step::Down } else { Step::Up };
                (at, FieldCommand::Numeral(step))
            }
            Self::Link { at, title } => {
                let kind = if *title { LinkKind::Title } else { LinkKind::Name };
                (at, FieldCommand::Link(kind))
            }
            Self::Help { .. } | Self::Keywords | Self::Template { .. } | Self::Highlight { .. } => {
                return None;
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("n-submit").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn copy_field_defaults_to_previous() {
        let cli = parse(&["copy-field", "sub.txt", "-l", "3", "-C", "40"]);
        let (at, command) = cli.command.field_command(1).unwrap();
        assert_eq!(command, FieldCommand::CopyField(Side::Previous));
        assert_eq!(at.position(), Position::new(2, 39));
        assert!(!at.stdout);
    }

    #[test]
    fn swap_name_uses_config_default() {
        let cli = parse(&["swap-name", "sub.txt"]);
        assert_eq!(cli.command.field_command(2).unwrap().1, FieldCommand::SwapName(2));
        let cli = parse(&["swap-name", "sub.txt", "--given", "3"]);
        assert_eq!(cli.command.field_command(2).unwrap().1, FieldCommand::SwapName(3));
    }

    #[test]
    fn numeral_needs_exactly_one_direction() {
        let cli = parse(&["numeral", "sub.txt", "--down"]);
        assert_eq!(cli.command.field_command(1).unwrap().1, FieldCommand::Numeral(Step::Down));
        assert!(Cli::try_parse_from(["n-submit", "numeral", "sub.txt"]).is_err());
        assert!(Cli::try_parse_from(["n-submit", "numeral", "sub.txt", "--up", "--down"]).is_err());
    }

    #[test]
    fn help_is_a_keyword_command() {
        let cli = parse(&["help", "ACTORS"]);
        assert!(matches!(cli.command, CliCommand::Help { ref keyword } if keyword == "ACTORS"));
        assert!(cli.command.field_command(1).is_none());
    }

    #[test]
    fn force_requires_output() {
        assert!(Cli::try_parse_from(["n-submit", "template", "ACTORS", "--force"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["keywords", "-vv", "--config", "c.toml"]);
        assert_eq!(cli.verbosity, 2);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    }
}
