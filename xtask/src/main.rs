//! Binary entrypoint for `cargo xtask`.

fn main() -> std::process::ExitCode {
    xtask::exit_code(xtask::execute_from_env())
}
