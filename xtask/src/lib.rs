//! Workspace maintenance commands (`cargo xtask`).
//!
//! The crate is a small CLI layer over typed command families. Today it carries the catalog data
//! pipeline: deriving optimized image URLs for the metadata file and restoring image file names.

pub mod cli;
pub mod commands;
pub mod runtime;

use crate::cli::TopLevelCommand;
use crate::commands::images::RenameImagesCommand;
use crate::commands::metadata::ProcessMetadataCommand;
use crate::runtime::context::CommandContext;
use crate::runtime::error::XtaskResult;

/// Shared command contract for top-level xtask command families.
///
/// [`XtaskCommand::parse`] is a pure translation from raw arguments into typed options; side
/// effects belong in [`XtaskCommand::run`].
pub trait XtaskCommand {
    /// Typed options produced by CLI parsing for the command family.
    type Options;

    /// Parse command-line arguments into typed options.
    fn parse(args: &[String]) -> XtaskResult<Self::Options>;

    /// Execute the command family using the shared runtime context.
    fn run(ctx: &CommandContext, options: Self::Options) -> XtaskResult<()>;
}

/// Executes the `xtask` binary using the current process arguments.
pub fn execute_from_env() -> XtaskResult<()> {
    let parsed = cli::parse(std::env::args().skip(1).collect())?;
    let ctx = CommandContext::new()?;

    match parsed {
        TopLevelCommand::ProcessMetadata(args) => {
            ProcessMetadataCommand::run(&ctx, ProcessMetadataCommand::parse(&args)?)
        }
        TopLevelCommand::RenameImages(args) => {
            RenameImagesCommand::run(&ctx, RenameImagesCommand::parse(&args)?)
        }
        TopLevelCommand::Help => {
            cli::print_usage();
            Ok(())
        }
    }
}

/// Converts an xtask result into a process exit code, printing failures to stderr.
pub fn exit_code(result: XtaskResult<()>) -> std::process::ExitCode {
    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::ExitCode::from(1)
        }
    }
}
