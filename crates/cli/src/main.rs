use clap::Parser;
use mlscaffold_cli::args::Args;
use mlscaffold_cli::config::Config;
use mlscaffold_cli::error::Result;
use mlscaffold_cli::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let op_args = args.command.op_args();
    let _guard = logging::init(&op_args.log_dir(), op_args.quiet)?;

    let config = Config::from(&args.command);
    let report = mlscaffold_engine::run(&config)?;
    presentation::print_report(&report, op_args.format);
    Ok(())
}
