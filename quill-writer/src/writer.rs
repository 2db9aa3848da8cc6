//! Output writing and the render-to-file pipeline.
//!
//! ## `write_rendered` — commit protocol
//!
//! 1. Render content (already done by caller).
//! 2. Compare with current on-disk content → skip if identical.
//! 3. Ensure the output's parent directory exists.
//! 4. Write to `<path>.quill.tmp`.
//! 5. Rename to final path (atomic on POSIX).
//!
//! Rendered text is committed byte-for-byte; a template with no variable
//! references ends up on disk identical to its literal content.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use quill_renderer::{TemplateEngine, TemplateVars};

use crate::error::{io_err, WriteError};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped — rendered content is already on disk.
    Unchanged { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    /// The output path this result refers to.
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path }
            | WriteResult::Unchanged { path }
            | WriteResult::WouldWrite { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// write_rendered
// ---------------------------------------------------------------------------

/// Write rendered content to `path`, overwriting prior content.
///
/// Unchanged content is detected by comparing with the current file and
/// skipped, preserving the output's mtime. Returns [`WriteResult`]
/// indicating whether the file was written or skipped.
pub fn write_rendered(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult, WriteError> {
    let tmp = PathBuf::from(format!("{}.quill.tmp", path.display()));
    write_rendered_with_tmp(path, content, dry_run, &tmp)
}

fn write_rendered_with_tmp(
    path: &Path,
    content: &str,
    dry_run: bool,
    tmp: &Path,
) -> Result<WriteResult, WriteError> {
    // Step 2: compare with what is already on disk.
    if let Some(existing) = read_existing(path)? {
        if existing == content {
            tracing::debug!("unchanged: {}", path.display());
            return Ok(WriteResult::Unchanged {
                path: path.to_path_buf(),
            });
        }
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    // Step 3: ensure parent directories exist. A bare filename has an empty
    // parent, which means the current directory — nothing to create.
    for parent in [path.parent(), tmp.parent()].into_iter().flatten() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
    }

    // Step 4: write to .tmp.
    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    // Step 5: atomic rename to final path.
    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

fn read_existing(path: &Path) -> Result<Option<String>, WriteError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(io_err(path, err)),
    }
}

// ---------------------------------------------------------------------------
// render_to_file
// ---------------------------------------------------------------------------

/// Render `template_path` under `search_root` and commit it to `output_path`.
///
/// This is the canonical build pipeline: engine construction, template
/// lookup, render, write — in that order, so every render error surfaces
/// before the output path is touched.
pub fn render_to_file(
    search_root: &Path,
    template_path: &str,
    vars: &TemplateVars,
    output_path: &Path,
    dry_run: bool,
) -> Result<WriteResult, WriteError> {
    let engine = TemplateEngine::new(search_root)?;
    let rendered = engine.render(template_path, vars)?;
    write_rendered(output_path, &rendered, dry_run)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
