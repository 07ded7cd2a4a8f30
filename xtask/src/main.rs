//! # xtask - workspace automation
//!
//! See [`HELP_TEXT`] for the list of commands.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use xshell::{Shell, cmd};

/// Help text printed by `cargo run -p xtask -- help`.
pub const HELP_TEXT: &str = r#"xtask

Usage:
  cargo run -p xtask -- <command>

Commands:
  help         Show this message
  fmt          Run rustfmt
  fmt-check    Check formatting (CI)
  clippy       Run clippy (workspace)
  test         Run tests, doctests included (workspace)
  ci           Run fmt-check + clippy + test
  sample       Run merchant-guide on the extended fixture and print the answers
"#;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let cmd = args.next().unwrap_or_else(|| "help".to_string());

    let sh = Shell::new()?;
    sh.change_dir(project_root()?);

    match cmd.as_str() {
        "help" | "-h" | "--help" => help(),
        "fmt" => Ok(cmd!(sh, "cargo fmt --all").run()?),
        "fmt-check" => Ok(cmd!(sh, "cargo fmt --all -- --check").run()?),
        "clippy" => Ok(cmd!(sh, "cargo clippy --workspace --all-targets -- -D warnings").run()?),
        "test" => Ok(cmd!(sh, "cargo test --workspace").run()?),
        "ci" => {
            cmd!(sh, "cargo fmt --all -- --check").run()?;
            cmd!(sh, "cargo clippy --workspace --all-targets -- -D warnings").run()?;
            cmd!(sh, "cargo test --workspace").run()?;
            Ok(())
        }
        "sample" => sample(&sh),
        other => bail!("Unknown command: {other}\n\nRun: cargo run -p xtask -- help"),
    }
}

fn help() -> Result<()> {
    println!("{HELP_TEXT}");
    Ok(())
}

/// Runs the CLI on `extended.txt`, answers to stdout, rejected lines to
/// `target/sample-errors.txt`.
fn sample(sh: &Shell) -> Result<()> {
    let input = "tools/merchant-guide/tests/fixtures/extended.txt";
    let errors = "target/sample-errors.txt";
    cmd!(sh, "cargo run -q -p merchant-guide -- -i {input} -e {errors} --stdout").run()?;
    println!();
    let rejected = sh.read_file(errors).with_context(|| format!("failed to read {errors}"))?;
    eprintln!("--- rejected lines ---\n{rejected}");
    Ok(())
}

/// Workspace root (parent of this crate's manifest directory).
fn project_root() -> Result<PathBuf> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.parent().map(PathBuf::from).context("xtask must live inside the workspace")
}
