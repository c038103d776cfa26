#![deny(missing_docs)]

//! # Process Types CLI
//!
//! Post-processes a generated TypeScript type-definition file in place.
//!
//! Usage: `process-types <PATH>`
//!
//! Exit status is 0 when the file was rewritten and 1 when it does not exist
//! or could not be read or written.

use clap::Parser;
use process_types_core::{build_rule_table, process, AppResult, Outcome};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Post-process generated TypeScript types")]
struct Cli {
    /// Path to the generated type-definition file (rewritten in place).
    path: PathBuf,
}

fn run(cli: &Cli) -> AppResult<Outcome> {
    let rules = build_rule_table();
    let stdout = io::stdout();
    let mut progress = stdout.lock();
    process(&cli.path, &rules, &mut progress)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::MissingFile) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_path_is_required() {
        assert!(Cli::try_parse_from(["process-types"]).is_err());
    }

    #[test]
    fn test_single_positional() {
        let cli = Cli::try_parse_from(["process-types", "src/lib/api/types/data-contracts.ts"])
            .unwrap();
        assert_eq!(cli.path, PathBuf::from("src/lib/api/types/data-contracts.ts"));
        assert!(Cli::try_parse_from(["process-types", "a.ts", "b.ts"]).is_err());
    }
}
