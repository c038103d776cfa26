#![deny(missing_docs)]

//! # File Transformer
//!
//! Reads one generated type-definition file, prefixes the provenance marker,
//! runs the rule table over the whole text and writes the result back in place.
//!
//! There is no locking and no backup. The marker is prepended on every run,
//! so processing a file twice leaves two marker lines.

use crate::error::{AppError, AppResult};
use crate::rules::RuleTable;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Provenance line prepended to every processed file.
pub const MARKER: &str = "/* post-processed by ./scripts/process-types.py */\n";

/// Result of a [`process`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The file was rewritten.
    Done,
    /// Nothing exists at the path; no write was performed.
    MissingFile,
}

/// Prepends [`MARKER`] to `content` and applies every rule of `table` in order.
///
/// Writes one `Replacing` line per rule to `progress`. The marker is part of
/// the text the rules run over.
pub fn transform<W: Write>(
    content: &str,
    table: &RuleTable,
    progress: &mut W,
) -> AppResult<String> {
    let mut text = format!("{}{}", MARKER, content);
    for rule in table {
        writeln!(progress, "Replacing {}", rule)?;
        text = rule.apply(&text);
    }
    Ok(text)
}

/// Processes the file at `path` in place.
///
/// Progress lines are written to `progress`. A missing file yields
/// [`Outcome::MissingFile`]; read and write failures are errors.
pub fn process<W: Write>(
    path: &Path,
    table: &RuleTable,
    progress: &mut W,
) -> AppResult<Outcome> {
    writeln!(progress, "Processing {}", path.display())?;

    if !path.exists() {
        writeln!(progress, "File {} does not exist", path.display())?;
        return Ok(Outcome::MissingFile);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| AppError::General(format!("Failed to read file {:?}: {}", path, e)))?;

    let text = transform(&content, table, progress)?;

    fs::write(path, text)
        .map_err(|e| AppError::General(format!("Failed to write file {:?}: {}", path, e)))?;

    Ok(Outcome::Done)
}
