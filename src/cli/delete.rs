use crate::core::store::{self, DeleteOutcome};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::Path;

pub fn run<R, W>(path: &Path, force: bool, input: &mut R, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    match store::delete(path, force, input, out)? {
        DeleteOutcome::Missing => writeln!(
            out,
            "File '{}' does not exist, nothing to delete.",
            path.display()
        )?,
        DeleteOutcome::Aborted => writeln!(out, "Aborted.")?,
        DeleteOutcome::Deleted => writeln!(out, "File deleted.")?,
    }
    Ok(())
}
