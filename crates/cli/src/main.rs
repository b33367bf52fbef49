use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use tessel::cli::{Cli, Command};

mod cmd_scan;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let verbose = matches!(&cli.command, Command::Scan(args) if args.verbose);
    init_tracing(verbose);

    match cli.command {
        Command::Scan(args) => match cmd_scan::run(&args, cli.config.as_deref()) {
            Ok(code) => code.into(),
            Err(err) => {
                eprintln!("tessel: {err:#}");
                tessel::exit::ExitCode::Error.into()
            }
        },
        Command::Completions(args) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "tessel",
                &mut std::io::stdout(),
            );
            ExitCode::SUCCESS
        }
    }
}

/// Route diagnostics to stderr, filtered by TESSEL_LOG; `--verbose` turns
/// on debug-level output when the variable is unset.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "tessel=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("TESSEL_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
