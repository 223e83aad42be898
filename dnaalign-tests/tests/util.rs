use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use clap::Parser;
use dnaalign::align;

/// Runs the aligner with the given whitespace-separated arguments.
///
/// Arguments starting with `repo:` are resolved relative to the repository root,
/// since the working directory of the tests is this crate.
pub fn run_in_repo_root(args: &str) -> Result<()> {
    let args = args
        .split_whitespace()
        .map(|arg| match arg.strip_prefix("repo:") {
            Some(path) => repo_root().join(path).to_string_lossy().into_owned(),
            None => arg.to_string(),
        })
        .collect::<Vec<_>>();

    let cli = align::Cli::try_parse_from(args)?;
    align::cli(cli)
}

pub fn repo_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap_or_else(|| panic!("No parent directory"))
}

/// A path for output files of the test with the given name.
pub fn output_file(name: &str) -> PathBuf {
    Path::new(env!("CARGO_TARGET_TMPDIR")).join(format!("{name}.toml"))
}

/// Reads the alignment written by the aligner.
pub fn read_output(path: &Path) -> Result<toml::Table> {
    let output = std::fs::read_to_string(path)?;
    toml::from_str(&output).map_err(|error| anyhow!("Output is not valid toml: {error}"))
}
