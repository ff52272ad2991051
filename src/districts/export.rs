//! Writing the district table to disk and reading it back

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tracing::{info, warn};

use super::error::{GeneratorError, Result};
use super::params::{Formatting, WritePolicy};
use super::types::{DistrictRecord, DistrictTable};

/// A table read back from a generated file, keyed by id
pub type LoadedTable = BTreeMap<String, DistrictRecord>;

/// What happened to the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written { bytes: usize },
    /// The file already existed and the policy left it alone
    Skipped,
}

/// Render the table as JSON text
pub fn render(table: &DistrictTable, formatting: Formatting) -> Result<String> {
    let text = match formatting {
        Formatting::Compact => serde_json::to_string(table)?,
        Formatting::PrettySorted => {
            // serde_json's default map is ordered, so every level comes out sorted
            let value = serde_json::to_value(table)?;
            let mut text = serde_json::to_string_pretty(&value)?;
            text.push('\n');
            text
        }
    };
    Ok(text)
}

/// Render and write the table according to `policy`.
///
/// The text is fully rendered before the file is opened. Under
/// `CreateIfAbsent` the existence check and the create are a single
/// `create_new` open.
pub fn write_table(
    table: &DistrictTable,
    path: &Path,
    policy: WritePolicy,
    formatting: Formatting,
) -> Result<WriteOutcome> {
    let text = render(table, formatting)?;

    match policy {
        WritePolicy::Overwrite => {
            fs::write(path, &text).map_err(|e| GeneratorError::io(path, e))?;
        }
        WritePolicy::CreateIfAbsent => {
            let file = OpenOptions::new().write(true).create_new(true).open(path);
            let file = match file {
                Ok(file) => file,
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    warn!(path = %path.display(), "output exists, leaving it untouched");
                    return Ok(WriteOutcome::Skipped);
                }
                Err(e) => return Err(GeneratorError::io(path, e)),
            };
            fill_new_file(path, file, |out| {
                out.write_all(text.as_bytes())?;
                out.flush()
            })?;
        }
    }

    info!(path = %path.display(), bytes = text.len(), "wrote district table");
    Ok(WriteOutcome::Written { bytes: text.len() })
}

/// Run `fill` on a file this run just created. If it fails the file is
/// removed, so a later create-if-absent run does not mistake the partial
/// output for a finished table.
fn fill_new_file<F>(path: &Path, mut file: File, fill: F) -> Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let filled = fill(&mut file);
    drop(file);
    if let Err(e) = filled {
        if let Err(cleanup) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %cleanup, "could not remove partial output");
        }
        return Err(GeneratorError::io(path, e));
    }
    Ok(())
}

/// Load a generated table file
pub fn read_table(path: &Path) -> Result<LoadedTable> {
    let text = fs::read_to_string(path).map_err(|e| GeneratorError::io(path, e))?;
    Ok(serde_json::from_str(&text)?)
}
