mod cmd;
mod config;
mod context;
mod prompt;

use clap::Parser;
use cmd::{Cli, Command};
use context::{ContextResult, FileStore};
use log::debug;
use owo_colors::OwoColorize;
use std::{
    io::{self, Write},
    process::ExitCode,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    debug!(
        "CLI args: command={:?}, context={:?}, kubeconfig={:?}",
        cli.command, cli.context, cli.kubeconfig
    );

    let result = run(cli);
    let color = prompt::color_enabled(io::stderr());
    ExitCode::from(finish(result, color, &mut io::stderr().lock()))
}

fn run(cli: Cli) -> ContextResult<()> {
    let store = FileStore::resolve(cli.kubeconfig)?;

    match cli.command {
        Some(Command::Ls) => cmd::list::handle(&store),
        Some(Command::Current) => cmd::current::handle(&store),
        None => cmd::switch::handle(&store, cli.context),
    }
}

/// Reports a failed command on `err` and gives the process exit status.
fn finish<W: Write>(result: ContextResult<()>, color: bool, err: &mut W) -> u8 {
    let Err(error) = result else {
        return 0;
    };

    let _ = if color {
        writeln!(err, "{} {error}", "error:".red())
    } else {
        writeln!(err, "error: {error}")
    };

    1
}
