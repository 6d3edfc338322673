//! Skill-Ops binary entry point.
//!
//! All command-level errors are caught here, printed as a single line, and
//! mapped to exit code 1. No stack traces surface to the user.

fn main() {
    if let Err(err) = skill_ops::cli::run() {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}
