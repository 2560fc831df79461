//! Top-level CLI parsing and help output.

use crate::runtime::error::{XtaskError, XtaskResult};

/// Top-level `xtask` command families.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TopLevelCommand {
    ProcessMetadata(Vec<String>),
    RenameImages(Vec<String>),
    Help,
}

/// Parse raw command-line arguments into a top-level command selection.
pub fn parse(args: Vec<String>) -> XtaskResult<TopLevelCommand> {
    let Some(cmd) = args.first().cloned() else {
        return Ok(TopLevelCommand::Help);
    };

    let rest = args[1..].to_vec();
    match cmd.as_str() {
        "process-metadata" => Ok(TopLevelCommand::ProcessMetadata(rest)),
        "rename-images" => Ok(TopLevelCommand::RenameImages(rest)),
        "help" | "--help" | "-h" => Ok(TopLevelCommand::Help),
        other => Err(XtaskError::validation(format!("unknown xtask command: {other}"))
            .with_hint("run `cargo xtask help` for the command list")),
    }
}

/// Print the canonical top-level usage text.
pub fn print_usage() {
    eprintln!(
        "Usage: cargo xtask <command> [args]\n\
         \n\
         Commands:\n\
           process-metadata <in> <out>        Add optimized grid/preview image URLs to a metadata file\n\
           rename-images <metadata> <dir>     Copy encoded image files to the names the metadata expects\n\
           help                               Show this message\n"
    );
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn empty_args_show_help() {
        assert_eq!(parse(Vec::new()), Ok(TopLevelCommand::Help));
    }

    #[test]
    fn subcommand_keeps_remaining_args() {
        assert_eq!(
            parse(args(&["process-metadata", "in.json", "out.json"])),
            Ok(TopLevelCommand::ProcessMetadata(args(&["in.json", "out.json"])))
        );
    }

    #[test]
    fn unknown_command_is_a_validation_error() {
        let err = parse(args(&["deploy"])).expect_err("unknown command");
        assert_eq!(err.category, crate::runtime::error::XtaskErrorCategory::Validation);
        assert!(err.to_string().starts_with("unknown xtask command: deploy"));
    }
}
