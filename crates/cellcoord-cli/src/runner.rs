use std::{
    io::{self, Write},
    process::ExitCode,
};

use cellcoord_core::{Coordinate, components, decode};

use crate::{Command, IndexStyle};

/// Result of a command whose output was written successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Outcome {
    /// Every input was accepted.
    Success,
    /// At least one input was rejected.
    Invalid,
}

impl Outcome {
    /// Returns the process exit code for this outcome.
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Invalid => ExitCode::FAILURE,
        }
    }

    fn reject_if(failed: bool) -> Self {
        if failed { Outcome::Invalid } else { Outcome::Success }
    }
}

/// Runs `command`, writing results to `out` and rejected inputs to `err`.
///
/// # Errors
///
/// Returns an error if writing to `out` or `err` fails.
pub fn run<O, E>(command: &Command, out: &mut O, err: &mut E) -> io::Result<Outcome>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    match command {
        Command::Parse { style, notations } => run_parse(*style, notations, out, err),
        Command::Format { indices } => run_format(indices, out, err),
        Command::Validate { quiet, notations } => run_validate(*quiet, notations, out),
        Command::Components { notations } => run_components(notations, out, err),
    }
}

fn run_parse<O, E>(
    style: IndexStyle,
    notations: &[String],
    out: &mut O,
    err: &mut E,
) -> io::Result<Outcome>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let mut failed = false;
    for text in notations {
        match decode(text) {
            Ok(indices) => {
                let joined = indices
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(style.separator());
                match style {
                    IndexStyle::Plain => writeln!(out, "{joined}")?,
                    IndexStyle::Tuple => writeln!(out, "({joined})")?,
                }
            }
            Err(e) => {
                log::debug!("parse rejected {text:?}: {e:?}");
                writeln!(err, "{text}: {e}")?;
                failed = true;
            }
        }
    }
    Ok(Outcome::reject_if(failed))
}

fn run_format<O, E>(indices: &[String], out: &mut O, err: &mut E) -> io::Result<Outcome>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    match Coordinate::from_tokens(indices) {
        Ok(coord) => {
            writeln!(out, "{coord}")?;
            Ok(Outcome::Success)
        }
        Err(e) => {
            log::debug!("format rejected {indices:?}: {e:?}");
            writeln!(err, "error: {e}")?;
            Ok(Outcome::Invalid)
        }
    }
}

fn run_validate<O>(quiet: bool, notations: &[String], out: &mut O) -> io::Result<Outcome>
where
    O: Write + ?Sized,
{
    let mut failed = false;
    for text in notations {
        let result = Coordinate::validate(text);
        failed |= result.is_err();
        if quiet {
            continue;
        }
        match result {
            Ok(()) => writeln!(out, "{text}: valid")?,
            Err(e) => writeln!(out, "{text}: {e}")?,
        }
    }
    Ok(Outcome::reject_if(failed))
}

fn run_components<O, E>(notations: &[String], out: &mut O, err: &mut E) -> io::Result<Outcome>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let mut failed = false;
    for text in notations {
        match components(text) {
            Ok(parts) => {
                writeln!(out, "{text}")?;
                for part in &parts {
                    writeln!(out, "  {}\t{}\t{}", part.text, part.kind, part.index)?;
                }
            }
            Err(e) => {
                writeln!(err, "{text}: {e}")?;
                failed = true;
            }
        }
    }
    Ok(Outcome::reject_if(failed))
}

impl IndexStyle {
    fn separator(self) -> &'static str {
        match self {
            IndexStyle::Plain => " ",
            IndexStyle::Tuple => ", ",
        }
    }
}
