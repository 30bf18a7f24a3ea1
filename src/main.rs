#![allow(clippy::cargo_common_metadata)]
use gatocli::{cli, config::Config, core::coin, setup_logging};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments; a failure is reported after the banner
    let parsed = cli::parse_args();
    let arg0 = std::env::args_os().next();

    // A logging setup failure is reported but not fatal
    let debug = parsed.as_ref().is_ok_and(|args| args.debug);
    if let Err(e) = setup_logging(debug) {
        eprintln!("warning: {e:#}");
    }

    let config = match &parsed {
        Ok(args) => Config::from_args(args, arg0.as_deref()),
        Err(_) => Config::for_program(arg0.as_deref()),
    };
    let mut rng = coin::clock_seeded_rng();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let console = cli::Console::new(&mut out, &mut err);

    let invocation = parsed.map(|args| args.command_args());
    ExitCode::from(cli::run(&config, invocation, console, &mut rng))
}
