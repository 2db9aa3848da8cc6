//! Error types for quill-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from template discovery and rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The requested template was not found under the search root.
    #[error("template not found: {name}")]
    TemplateNotFound { name: String },

    /// A template referenced a variable absent from the supplied mapping.
    #[error("undefined variable `{variable}` while rendering '{template}'")]
    UndefinedVariable { variable: String, template: String },

    /// A template failed to parse.
    #[error("template syntax error: {source}")]
    Syntax {
        #[source]
        source: tera::Error,
    },

    /// Any other failure inside the template engine.
    #[error("template engine error: {0}")]
    Engine(tera::Error),

    /// Filesystem error while scanning the search root.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from assembling the variable context.
#[derive(Debug, Error)]
pub enum VarsError {
    /// Variables file could not be read.
    #[error("cannot read variables file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Variables file held invalid JSON.
    #[error("invalid JSON in variables file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Variables file parsed, but the top-level value was not an object.
    #[error("variables file {path} must hold a JSON object, found {found}")]
    NotAnObject { path: PathBuf, found: &'static str },

    /// A `--var` assignment was missing its name or `=` separator.
    #[error("malformed variable assignment '{assignment}'; expected NAME=VALUE")]
    MalformedAssignment { assignment: String },
}
