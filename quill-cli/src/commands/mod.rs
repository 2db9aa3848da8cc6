//! CLI subcommand implementations.

pub mod build;
pub mod diff;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use quill_renderer::TemplateVars;

/// Default template path, matching the canonical README build.
pub const DEFAULT_TEMPLATE: &str = "docs/README.md.j2";
/// Default output path.
pub const DEFAULT_OUTPUT: &str = "README.md";

/// Template, output and variable selection shared by `build` and `diff`.
#[derive(Args, Debug, Clone)]
pub struct Selection {
    /// Template path, relative to the search root.
    #[arg(long, default_value = DEFAULT_TEMPLATE)]
    pub template: String,

    /// Output file to write.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Search root that template paths resolve against.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Variable assignment NAME=VALUE (repeatable; overrides --vars-file).
    #[arg(long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,

    /// JSON file holding an object of template variables.
    #[arg(long, value_name = "PATH")]
    pub vars_file: Option<PathBuf>,
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            template: DEFAULT_TEMPLATE.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            root: PathBuf::from("."),
            vars: Vec::new(),
            vars_file: None,
        }
    }
}

impl Selection {
    /// Assemble the variable context: vars file first, then `--var`
    /// assignments overriding name-by-name.
    pub fn template_vars(&self) -> Result<TemplateVars> {
        let mut vars = match &self.vars_file {
            Some(path) => TemplateVars::from_json_file(path)
                .with_context(|| format!("failed to load variables from {}", path.display()))?,
            None => TemplateVars::new(),
        };
        for assignment in &self.vars {
            let (name, value) = TemplateVars::parse_assignment(assignment)?;
            vars.set(name, value);
        }
        Ok(vars)
    }
}
