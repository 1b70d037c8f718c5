use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let overrides = cli.overrides();
    let Cli {
        config,
        json,
        command,
        ..
    } = cli;

    let ctx = AppContext::bootstrap(config, overrides, json)?;

    match command {
        Command::Profile => commands::profile::run(&ctx),
        Command::Features => commands::features::run(&ctx),
    }
}
