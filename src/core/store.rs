//! Filesystem operations on the credential store: read, delete, initialise.

use crate::constants;
use crate::util::fs as store_fs;
use anyhow::{Context, Result};
use tracing::debug;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Missing,
    Aborted,
    Deleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    AlreadyExists,
    Created,
}

/// Read the store as UTF-8. Returns `None` when the file does not exist.
pub fn read(path: &Path) -> Result<Option<String>> {
    debug!("Reading from {}", path.display());
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("read credential store {}", path.display()))?;
    Ok(Some(content))
}

/// Delete the store, asking on `input`/`out` first unless `force` is set.
pub fn delete<R, W>(path: &Path, force: bool, input: &mut R, out: &mut W) -> Result<DeleteOutcome>
where
    R: BufRead,
    W: Write,
{
    if !path.exists() {
        return Ok(DeleteOutcome::Missing);
    }

    if !force {
        let prompt = format!(" Are you sure you want to delete '{}'? [y/N] ", path.display());
        if !confirm(&prompt, input, out)? {
            return Ok(DeleteOutcome::Aborted);
        }
    }

    debug!("Deleting file…");
    fs::remove_file(path).with_context(|| format!("remove {}", path.display()))?;
    Ok(DeleteOutcome::Deleted)
}

/// Show `prompt` and read one line. Only `y` or `Y` confirms; end of input declines.
pub fn confirm<R, W>(prompt: &str, input: &mut R, out: &mut W) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{}", prompt).context("write prompt")?;
    out.flush().context("flush prompt")?;

    let mut answer = String::new();
    if input.read_line(&mut answer).context("read confirmation")? == 0 {
        writeln!(out).context("write prompt")?;
        return Ok(false);
    }
    let answer = answer.trim_end_matches(['\n', '\r']);
    Ok(answer.eq_ignore_ascii_case("y"))
}

/// Create an empty store holding only a placeholder comment.
pub fn init(path: &Path) -> Result<InitOutcome> {
    if path.exists() {
        return Ok(InitOutcome::AlreadyExists);
    }
    if let Some(parent) = path.parent() {
        store_fs::ensure_dir(parent)?;
    }
    let created = store_fs::create_new(
        path,
        constants::EMPTY_STORE_CONTENT.as_bytes(),
        constants::STORE_FILE_MODE,
    )?;
    Ok(if created {
        InitOutcome::Created
    } else {
        InitOutcome::AlreadyExists
    })
}
