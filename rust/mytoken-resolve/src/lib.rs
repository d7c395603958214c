//! Command line front end for `mytoken-capability`.
//!
//! Resolves the capabilities given on the command line (or on stdin) and
//! prints either the JSON request fields the mytoken server expects, or the
//! resolved capabilities one per line.

use std::io::{BufRead, Write};

use mytoken_capability::{
    Capabilities, Capability, CapabilityError, CapabilityRequest, danger_level, description_for,
};

mod cli;
pub use cli::*;

/// Errors surfaced by [`run`].
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// A capability was rejected in strict mode, or encoding failed.
    #[error(transparent)]
    Capability(#[from] CapabilityError),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolve the capabilities selected by `cli` and write the result to
/// `output`. Capabilities are read from `input` when none were passed as
/// arguments.
pub fn run(
    cli: &ResolveCli,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<(), ResolveError> {
    let requested = if cli.capabilities.is_empty() {
        read_capabilities(input)?
    } else {
        cli.capabilities.clone()
    };

    if cli.strict {
        for identifier in requested.iter().chain(&cli.subtoken) {
            identifier.parse::<Capability>()?;
        }
    }

    tracing::debug!(
        requested = requested.len(),
        subtoken = cli.subtoken.len(),
        "Resolving capabilities"
    );
    let request = CapabilityRequest::new(&requested, &cli.subtoken);

    match cli.format {
        Format::Json => writeln!(output, "{}", request.to_json()?)?,
        Format::Lines => {
            write_lines(&mut output, &request.capabilities, cli.describe)?;
            if !request.subtoken_capabilities.is_empty() {
                writeln!(output)?;
                write_lines(&mut output, &request.subtoken_capabilities, cli.describe)?;
            }
        }
    }

    Ok(())
}

/// Non-empty lines of `input`, trimmed. Lines starting with `#` are skipped.
fn read_capabilities(input: impl BufRead) -> Result<Vec<String>, std::io::Error> {
    let mut capabilities = Vec::new();
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        capabilities.push(line.to_owned());
    }
    Ok(capabilities)
}

fn write_lines(
    output: &mut impl Write,
    capabilities: &Capabilities,
    describe: bool,
) -> Result<(), std::io::Error> {
    for capability in capabilities {
        if !describe {
            writeln!(output, "{capability}")?;
            continue;
        }
        match (danger_level(capability), description_for(capability)) {
            (Some(level), Some(description)) => {
                writeln!(output, "{capability}\t{level}\t{description}")?
            }
            _ => writeln!(output, "{capability}\tunknown")?,
        }
    }
    Ok(())
}
