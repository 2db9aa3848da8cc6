//! Quill — strict template-to-file documentation generator.
//!
//! # Usage
//!
//! ```text
//! quill                                      # docs/README.md.j2 -> README.md
//! quill build [--template <path>] [--output <path>] [--root <dir>]
//!             [--var NAME=VALUE ...] [--vars-file <path>] [--dry-run]
//! quill diff  [--template <path>] [--output <path>] [--root <dir>]
//!             [--var NAME=VALUE ...] [--vars-file <path>] [--check]
//! ```
//!
//! Bare `quill` renders `docs/README.md.j2` with an empty variable context
//! into `README.md`, overwriting prior content. Any reference to an unbound
//! variable is a hard error.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{build::BuildArgs, diff::DiffArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "quill",
    version,
    about = "Render Jinja2-style templates into generated documentation files",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the template and write the output file.
    Build(BuildArgs),

    /// Show a unified diff of what `build` would write.
    Diff(DiffArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Build(args)) => args.run(),
        Some(Commands::Diff(args)) => args.run(),
        // Bare `quill` is the canonical README build.
        None => BuildArgs::default().run(),
    }
}
