//! `quill build` — render the template and write the output file.

use anyhow::{Context, Result};
use clap::Args;

use quill_writer::{render_to_file, WriteResult};

use super::Selection;

/// Arguments for `quill build`.
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    #[command(flatten)]
    pub selection: Selection,

    /// Show what would be written without touching the output file.
    #[arg(long)]
    pub dry_run: bool,
}

impl BuildArgs {
    pub fn run(self) -> Result<()> {
        let vars = self.selection.template_vars()?;
        let result = render_to_file(
            &self.selection.root,
            &self.selection.template,
            &vars,
            &self.selection.output,
            self.dry_run,
        )
        .with_context(|| format!("build failed for '{}'", self.selection.template))?;

        print_result(&result, self.dry_run);
        Ok(())
    }
}

fn print_result(result: &WriteResult, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    match result {
        WriteResult::Written { path } => println!("{prefix}✎  {}", path.display()),
        WriteResult::WouldWrite { path } => println!("{prefix}~  {}", path.display()),
        WriteResult::Unchanged { path } => println!("{prefix}·  {} (unchanged)", path.display()),
    }
}
