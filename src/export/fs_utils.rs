// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Answers accepted as consent to replace an existing export.
fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Ask on `output` whether `path` may be replaced and read the answer from
/// `input`. An empty line or end of input counts as "no".
pub fn confirm_overwrite<R: BufRead, W: Write>(
    path: &Path,
    input: &mut R,
    output: &mut W,
) -> AppResult<bool> {
    write!(
        output,
        "The file '{}' already exists. Overwrite? [y/N]: ",
        path.display()
    )?;
    output.flush()?;

    let mut answer = String::new();
    let read = input.read_line(&mut answer)?;
    let accepted = read > 0 && is_yes(&answer);
    log::debug!("overwrite of {} answered {:?}", path.display(), answer.trim());
    Ok(accepted)
}

/// Make sure an export may write `path`: new files and `--force` pass
/// straight through, an existing file needs confirmation on the terminal.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    let stdin = io::stdin();
    if confirm_overwrite(path, &mut stdin.lock(), &mut io::stdout())? {
        info(format!("Overwriting {}", path.display()));
        Ok(())
    } else {
        Err(AppError::ExportCancelled(path.display().to_string()))
    }
}
