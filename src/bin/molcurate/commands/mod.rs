mod build;

use build::run_build;

use anyhow::Result;

use crate::cli::Cli;
use crate::display::Context;

pub fn run(cli: Cli, ctx: Context) -> Result<()> {
    run_build(&cli, ctx)
}
