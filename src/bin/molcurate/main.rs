use std::process::ExitCode;

use env_logger::Env;
use log::LevelFilter;

mod cli;
mod commands;
mod config;
mod display;
mod util;

fn main() -> ExitCode {
    let cli = cli::parse();
    let ctx = display::Context::detect().with_quiet(cli.output.quiet);

    init_logging(cli.output.verbose, cli.output.quiet, ctx.interactive);

    if ctx.interactive {
        display::print_banner();
    }

    match commands::run(cli, ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Interactive runs default to `warn`, others to `info`. `RUST_LOG` wins over both.
fn init_logging(verbose: u8, quiet: bool, interactive: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Warn,
        (false, 0) if interactive => LevelFilter::Warn,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_millis();
    if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}
