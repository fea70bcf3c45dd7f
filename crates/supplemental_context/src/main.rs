use anyhow::Result;
use clap::{value_parser, Arg, Command};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use supplemental_context::{
    format_ranked, gather_supplemental_context, ContextRequest, DEFAULT_LIMIT,
};

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    // RUST_LOG, when set, wins over --verbose.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let matches = Command::new("supplemental_context")
        .version("0.1.0")
        .about("Lists the files most related to a focal source file")
        .arg(
            Arg::new("focal_file")
                .help("The file the context is gathered for")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .help("Directory to search for candidates (defaults to the focal file's directory)"),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .num_args(1)
                .help("Language id to use instead of guessing from the extension"),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .num_args(1)
                .value_parser(value_parser!(usize))
                .default_value("5")
                .help("Maximum number of files to print"),
        )
        .arg(
            Arg::new("include_tests")
                .long("include-tests")
                .help("Keep test files among the candidates")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let mut request = ContextRequest::new(
        matches
            .get_one::<PathBuf>("focal_file")
            .cloned()
            .unwrap_or_default(),
    );
    request.root = matches.get_one::<PathBuf>("root").cloned();
    request.language = matches.get_one::<String>("language").cloned();
    request.limit = matches
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(DEFAULT_LIMIT);
    request.include_tests = matches.get_flag("include_tests");

    let ranked = gather_supplemental_context(&request)?;
    if ranked.is_empty() {
        eprintln!("No supplemental context found for {}", request.focal_file.display());
        return Ok(());
    }
    for candidate in &ranked {
        println!("{}", format_ranked(candidate));
    }
    Ok(())
}
