//! # quill-renderer
//!
//! Tera-based template engine that renders Jinja2-style template files from a
//! filesystem search root under a strict-undefined policy: referencing a
//! variable absent from the supplied mapping is a hard error, never an empty
//! substitution.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use quill_renderer::{TemplateEngine, TemplateVars};
//!
//! fn build_readme(root: &Path) {
//!     if let Ok(engine) = TemplateEngine::new(root) {
//!         match engine.render("docs/README.md.j2", &TemplateVars::new()) {
//!             Ok(text) => println!("{} bytes", text.len()),
//!             Err(e) => eprintln!("{e}"),
//!         }
//!     }
//! }
//! ```

pub mod engine;
pub mod error;
pub mod vars;

pub use engine::TemplateEngine;
pub use error::{RenderError, VarsError};
pub use vars::TemplateVars;
