//! Command-line interface for writing a range of test cases
//!
//! `gen <FIRST> <LAST>` writes `<FIRST>.in` through `<LAST>.in`, one case per
//! index, using the recipe from `--config` (a 10-node tree by default).

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::config::GeneratorConfig;
use crate::random::seed_from_args;
use crate::testcase::{generate_range, CaseWriter, TestRange};
use crate::Result;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "gen", about = "Write randomized test cases for indices FIRST..=LAST.")]
pub struct Cli {
    /// First test index.
    pub first: u32,

    /// Last test index, inclusive.
    pub last: u32,

    /// JSON file describing the test-case recipe.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory the case files are written to.
    #[arg(long = "out-dir", default_value = ".")]
    pub out_dir: PathBuf,

    /// Base seed; overrides the config file.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Outcome of a `gen` run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Base seed the cases were drawn from.
    pub seed: u64,
    /// Written files, in index order.
    pub files: Vec<PathBuf>,
}

/// Execute `cli`. `raw_args` is the full command line, used to derive a seed
/// when neither `--seed` nor the config supplies one.
///
/// # Errors
/// Returns [`GenError`](crate::GenError) when the range or config is invalid,
/// or a case cannot be generated or written.
pub fn run_cli<S: AsRef<str>>(cli: &Cli, raw_args: &[S]) -> Result<RunSummary> {
    let range = TestRange::new(cli.first, cli.last)?;
    let config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    let seed = cli
        .seed
        .or(config.seed)
        .unwrap_or_else(|| seed_from_args(raw_args));
    tracing::info!(
        first = range.first(),
        last = range.last(),
        seed,
        out_dir = %cli.out_dir.display(),
        "generating test cases"
    );

    let writer = CaseWriter::new(&cli.out_dir, config.extension.as_str());
    let files = generate_range(&config, range, &writer, seed)?;

    Ok(RunSummary { seed, files })
}

/// Whether a clap parse failure is a real usage error, as opposed to
/// `--help` or `--version` output.
pub fn is_usage_error(err: &clap::Error) -> bool {
    err.use_stderr()
}

/// Write one line per generated file to `writer`.
pub fn render_summary<W: Write>(summary: &RunSummary, writer: &mut W) -> io::Result<()> {
    for path in &summary.files {
        writeln!(writer, "{}", path.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from(["gen", "1", "5", "--seed", "9", "--out-dir", "cases"])
            .unwrap();
        assert_eq!((cli.first, cli.last), (1, 5));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.out_dir, PathBuf::from("cases"));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_requires_both_indices() {
        assert!(Cli::try_parse_from(["gen", "1"]).is_err());
        assert!(Cli::try_parse_from(["gen", "a", "2"]).is_err());
    }

    #[test]
    fn test_usage_errors_are_failures() {
        let missing = Cli::try_parse_from(["gen", "1"]).unwrap_err();
        assert!(is_usage_error(&missing));
        let unknown = Cli::try_parse_from(["gen", "1", "2", "--bogus"]).unwrap_err();
        assert!(is_usage_error(&unknown));

        let help = Cli::try_parse_from(["gen", "--help"]).unwrap_err();
        assert!(!is_usage_error(&help));
    }

    #[test]
    fn test_render_summary() {
        let summary = RunSummary {
            seed: 0,
            files: vec![PathBuf::from("1.in"), PathBuf::from("2.in")],
        };
        let mut out = Vec::new();
        render_summary(&summary, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1.in\n2.in\n");
    }
}
