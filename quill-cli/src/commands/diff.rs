//! `quill diff` — show a unified diff of what `build` would write.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use quill_writer::diff_output;

use super::Selection;

/// Arguments for `quill diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    #[command(flatten)]
    pub selection: Selection,

    /// Exit with status 1 when the output is stale (CI gate).
    #[arg(long)]
    pub check: bool,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let vars = self.selection.template_vars()?;
        let diff = diff_output(
            &self.selection.root,
            &self.selection.template,
            &vars,
            &self.selection.output,
        )
        .with_context(|| format!("diff failed for '{}'", self.selection.template))?;

        let Some(diff) = diff else {
            if !self.check {
                println!(
                    "{} {} is up to date.",
                    "✓".green(),
                    self.selection.output.display()
                );
            }
            return Ok(());
        };

        print!("{}", diff.unified_diff);
        if !diff.unified_diff.ends_with('\n') {
            println!();
        }

        if self.check {
            std::process::exit(1);
        }
        Ok(())
    }
}
