//! CLI entry point for the checkerboard tile map solver

use std::process::ExitCode;

use clap::Parser;
use floortiles::algorithm::observer::OutcomeKind;
use floortiles::io::cli::{Cli, TileMapRunner};

// Allow print for the requested text rendering of the solved map
#[allow(clippy::print_stdout)]
fn main() -> floortiles::Result<ExitCode> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let print = cli.print;
    let report = TileMapRunner::new(cli).run()?;

    if print && let Some(solution) = &report.solution {
        println!("{solution}");
    }

    Ok(match report.outcome {
        OutcomeKind::Solved => ExitCode::SUCCESS,
        OutcomeKind::NoSolution => ExitCode::from(1),
        OutcomeKind::Cancelled => ExitCode::from(2),
    })
}
