// SPDX-License-Identifier: MIT
//
// n-submit: field-level editing, help and templates for structured
// submission files.
//
// This is the binary that wires the crates together:
//
//   n-editor  → buffer, positions, the TextSurface a command edits through
//   n-field   → copy-field, swap-name, numeral and link commands
//   n-catalog → keyword table, help pages, templates, highlighting
//
// An editing subcommand flows as:
//
//   file → Buffer → BufferSurface(cursor) → FieldCommand → status message
//                                                        → save / stdout
//
// A refused edit prints its status message, exits non-zero, and leaves
// the file alone.

mod cli;
mod config;
mod render;

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::LevelFilter;

use n_catalog::{help, keyword, template};
use n_editor::{Buffer, BufferSurface, TextSurface};
use n_field::{CommandResult, FieldCommand};

use crate::cli::{At, Cli, CliCommand};
use crate::config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("n-submit: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?;

    if let Some((at, command)) = cli.command.field_command(config.names.given) {
        return edit(at, command);
    }

    let mut stdout = io::stdout().lock();
    match &cli.command {
        CliCommand::Help { keyword } => {
            let page = help::render_help(keyword, &config.help_options())?;
            stdout.write_all(page.as_bytes())?;
        }
        CliCommand::Keywords => {
            stdout.write_all(help::render_index().as_bytes())?;
        }
        CliCommand::Template {
            keyword: name,
            output,
            force,
        } => {
            let desc = keyword::lookup(name)
                .ok_or_else(|| n_catalog::CatalogError::UnknownKeyword(name.clone()))?;
            let text = template::generate(desc, &config.submitter(), &config.templates)?;
            match output {
                Some(path) => {
                    if path.exists() && !force {
                        bail!("{} exists (use --force to overwrite)", path.display());
                    }
                    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
                    log::info!("wrote {} template to {}", desc.name(), path.display());
                }
                None => stdout.write_all(text.as_bytes())?,
            }
        }
        CliCommand::Highlight { file, color } => {
            let text = fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
            if *color || stdout.is_terminal() {
                stdout.write_all(render::ansi(&text).as_bytes())?;
            } else {
                stdout.write_all(text.as_bytes())?;
            }
        }
        CliCommand::CopyField { .. }
        | CliCommand::SwapName { .. }
        | CliCommand::Numeral { .. }
        | CliCommand::Link { .. } => unreachable!("editing commands return early"),
    }
    Ok(ExitCode::SUCCESS)
}

/// Run one field command on `at.file` with the cursor at `at`.
fn edit(at: &At, command: FieldCommand) -> Result<ExitCode> {
    let buffer = Buffer::from_file(&at.file).with_context(|| format!("failed to read {}", at.file.display()))?;
    let position = at.position();
    if !buffer.contains(position) {
        eprintln!("Cursor {position} is outside {}", at.file.display());
        return Ok(ExitCode::FAILURE);
    }
    let mut surface = BufferSurface::new(buffer, position);
    log::info!("{} at {} in {}", command.name(), surface.cursor(), at.file.display());

    match n_field::execute(&mut surface, command) {
        CommandResult::Ok(message) => {
            if let Some(message) = message {
                eprintln!("{message}");
            }
            log::info!("cursor now at {}", surface.cursor());
            let mut buffer = surface.into_buffer();
            if at.stdout {
                io::stdout().lock().write_all(buffer.contents().as_bytes())?;
            } else {
                buffer.save().with_context(|| format!("failed to write {}", at.file.display()))?;
            }
            Ok(ExitCode::SUCCESS)
        }
        CommandResult::Err(message) => {
            eprintln!("{message}");
            Ok(ExitCode::FAILURE)
        }
    }
}
