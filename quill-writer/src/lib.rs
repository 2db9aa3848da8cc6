//! # quill-writer
//!
//! Output-file writer and build orchestration.
//!
//! Call [`render_to_file`] to render a template and commit it to its output
//! path, or [`diff_output`] to compare what a build would write against the
//! current on-disk content without writing anything.

pub mod diff;
pub mod error;
pub mod writer;

pub use diff::{diff_output, FileDiff};
pub use error::WriteError;
pub use writer::{render_to_file, write_rendered, WriteResult};
