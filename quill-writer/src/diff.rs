//! Staleness diff support for `quill diff`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use quill_renderer::{TemplateEngine, TemplateVars};

use crate::error::{io_err, WriteError};

/// Unified diff between on-disk output and what a build would write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Render what `build` would write and compare it to current on-disk content.
///
/// No files are written. Returns `None` when the output is already up to
/// date; a missing output file compares as empty.
pub fn diff_output(
    search_root: &Path,
    template_path: &str,
    vars: &TemplateVars,
    output_path: &Path,
) -> Result<Option<FileDiff>, WriteError> {
    let engine = TemplateEngine::new(search_root)?;
    let rendered = engine.render(template_path, vars)?;
    let existing = read_existing_or_empty(output_path)?;
    if existing == rendered {
        return Ok(None);
    }

    let old_header = format!("a/{}", output_path.display());
    let new_header = format!("b/{}", output_path.display());
    let unified = TextDiff::from_lines(&existing, &rendered)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string();

    Ok(Some(FileDiff {
        path: output_path.to_path_buf(),
        unified_diff: unified,
    }))
}

fn read_existing_or_empty(path: &Path) -> Result<String, WriteError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(io_err(path, err)),
    }
}
