//! Command table and handlers
//!
//! Every command is one row in [`COMMANDS`]. The dispatcher looks the first
//! token up in that table and the usage text is rendered from it.

use crate::{
    cli::Console,
    config::Config,
    core::{arithmetic, banner, coin, greeting, text},
    error::{CliError, Result},
    utils::{PositiveInt, parse_positive_int},
};
use rand::RngCore;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Everything a handler may touch during one invocation
pub struct Context<'a> {
    pub config: &'a Config,
    pub console: Console<'a>,
    pub rng: &'a mut dyn RngCore,
}

/// Handler for one command; receives the arguments after the command name
pub type Handler = fn(&mut Context<'_>, &[String]) -> Result<()>;

/// One row of the command table
#[derive(Debug)]
pub struct CommandSpec {
    /// Accepted spellings, canonical name first
    pub names: &'static [&'static str],
    pub synopsis: &'static str,
    pub description: &'static str,
    pub handler: Handler,
}

impl CommandSpec {
    pub fn name(&self) -> &'static str {
        self.names[0]
    }
}

/// All commands, in usage order
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        names: &["greet"],
        synopsis: "greet [name]",
        description: "Print a friendly greeting (default: there)",
        handler: greet,
    },
    CommandSpec {
        names: &["repeat"],
        synopsis: "repeat <count>",
        description: "Print a numbered notification multiple times",
        handler: repeat,
    },
    CommandSpec {
        names: &["--help", "-h"],
        synopsis: "--help, -h",
        description: "Show this help message",
        handler: help,
    },
    CommandSpec {
        names: &["--version", "-v"],
        synopsis: "--version, -v",
        description: "Show version information",
        handler: version,
    },
    CommandSpec {
        names: &["banner"],
        synopsis: "banner [file]",
        description: "Print the contents of a banner file (default: banner.txt)",
        handler: print_banner,
    },
    CommandSpec {
        names: &["hello"],
        synopsis: "hello <count>",
        description: "Repeat hello multiple times",
        handler: hello,
    },
    CommandSpec {
        names: &["add"],
        synopsis: "add <num1> <num2>",
        description: "Add two positive integers",
        handler: add,
    },
    CommandSpec {
        names: &["echo"],
        synopsis: "echo <word...>",
        description: "Print the words separated by spaces",
        handler: echo,
    },
    CommandSpec {
        names: &["coinflip"],
        synopsis: "coinflip [times]",
        description: "Flip a coin one or more times (default: 1)",
        handler: coinflip,
    },
    CommandSpec {
        names: &["count"],
        synopsis: "count <sentence> <character>",
        description: "Count how often a character appears in a sentence",
        handler: count,
    },
];

/// Look up a command by any of its names (case-sensitive)
pub fn find_command(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.names.contains(&name))
}

/// Usage text for `program`
pub fn usage(program: &str) -> String {
    let width = COMMANDS
        .iter()
        .map(|spec| spec.synopsis.len())
        .max()
        .unwrap_or(0)
        + 2;

    let mut text = format!("Usage: {program} [--debug] <command> [options]\nCommands:\n");
    for spec in COMMANDS {
        text.push_str(&format!("  {:<width$}{}\n", spec.synopsis, spec.description));
    }
    text.push_str("Options:\n");
    text.push_str(&format!(
        "  {:<width$}{}\n",
        "--debug", "Enable debug logging (must come before the command)"
    ));
    text
}

/// Print the startup banner, dispatch the parsed command tokens and report
/// any failure
///
/// An argument parsing failure still gets the banner and is reported like any
/// other error. Returns the process exit status.
pub fn run<'a>(
    config: &'a Config,
    invocation: Result<Vec<String>>,
    console: Console<'a>,
    rng: &'a mut dyn RngCore,
) -> u8 {
    let mut ctx = Context {
        config,
        console,
        rng,
    };

    let outcome = ctx
        .console
        .line(banner::STARTUP_BANNER)
        .map_err(CliError::from)
        .and_then(|()| invocation)
        .and_then(|argv| execute_command(&mut ctx, &argv));

    let status = match outcome {
        Ok(()) => 0,
        Err(err) => report(&mut ctx, &err),
    };

    if let Err(e) = ctx.console.flush() {
        debug!("Failed to flush output: {}", e);
    }
    status
}

/// Dispatch `argv` to its handler; an empty `argv` prints usage
#[instrument(skip(ctx))]
pub fn execute_command(ctx: &mut Context<'_>, argv: &[String]) -> Result<()> {
    let Some((name, rest)) = argv.split_first() else {
        debug!("No command given");
        return write_usage(ctx);
    };

    let spec = find_command(name).ok_or_else(|| CliError::unknown_command(name.as_str()))?;
    debug!(command = spec.name(), args = rest.len(), "Dispatching");
    (spec.handler)(ctx, rest)
}

fn report(ctx: &mut Context<'_>, err: &CliError) -> u8 {
    debug!(error = ?err, "Command failed");
    if let Err(e) = ctx.console.diagnostic(format!("error: {err}")) {
        debug!("Failed to write diagnostic: {}", e);
    }
    if err.shows_usage() {
        if let Err(e) = write_usage(ctx) {
            debug!("Failed to write usage: {}", e);
        }
    }
    err.exit_code()
}

fn write_usage(ctx: &mut Context<'_>) -> Result<()> {
    ctx.console.raw(usage(&ctx.config.program))?;
    Ok(())
}

/// Parse the required repetition count shared by `repeat` and `hello`
fn required_count(command: &'static str, args: &[String]) -> Result<PositiveInt> {
    let raw = args
        .first()
        .ok_or_else(|| CliError::missing_argument(command, "a repetition count"))?;
    parse_positive_int(raw).map_err(|e| CliError::invalid_integer("repetition count", raw.as_str(), e))
}

fn help(ctx: &mut Context<'_>, _args: &[String]) -> Result<()> {
    write_usage(ctx)
}

fn version(ctx: &mut Context<'_>, _args: &[String]) -> Result<()> {
    let line = format!(
        "{} version {}",
        ctx.config.program,
        env!("CARGO_PKG_VERSION")
    );
    ctx.console.line(line)?;
    Ok(())
}

#[instrument(skip(ctx))]
fn greet(ctx: &mut Context<'_>, args: &[String]) -> Result<()> {
    let config = ctx.config;
    let name = args
        .first()
        .map(String::as_str)
        .unwrap_or(&config.default_greet_name);
    ctx.console.line(greeting::greeting(name))?;
    Ok(())
}

#[instrument(skip(ctx))]
fn repeat(ctx: &mut Context<'_>, args: &[String]) -> Result<()> {
    let count = required_count("repeat", args)?;
    for line in greeting::notifications(count) {
        ctx.console.line(line)?;
    }
    Ok(())
}

#[instrument(skip(ctx))]
fn hello(ctx: &mut Context<'_>, args: &[String]) -> Result<()> {
    let count = required_count("hello", args)?;
    for line in greeting::hellos(count) {
        ctx.console.line(line)?;
    }
    Ok(())
}

#[instrument(skip(ctx))]
fn add(ctx: &mut Context<'_>, args: &[String]) -> Result<()> {
    let [a, b, ..] = args else {
        return Err(CliError::missing_argument("add", "two numbers"));
    };

    let a = parse_positive_int(a).map_err(|e| CliError::invalid_integer("operand", a.as_str(), e))?;
    let b = parse_positive_int(b).map_err(|e| CliError::invalid_integer("operand", b.as_str(), e))?;

    let sum = arithmetic::add(a, b);
    debug!(%a, %b, sum, "Added operands");
    ctx.console
        .line(format!("The result of the operation was: {sum}"))?;
    Ok(())
}

/// A missing or unreadable file is reported on stderr but does not fail the
/// command.
#[instrument(skip(ctx))]
fn print_banner(ctx: &mut Context<'_>, args: &[String]) -> Result<()> {
    let path = args
        .first()
        .map(PathBuf::from)
        .unwrap_or_else(|| ctx.config.default_banner_path.clone());

    match banner::load_banner(&path) {
        Ok(contents) => ctx.console.bytes(&contents)?,
        Err(e) => {
            debug!("Banner not printed: {}", e);
            ctx.console.diagnostic(format!("error: {e}"))?;
        }
    }
    Ok(())
}

#[instrument(skip(ctx))]
fn echo(ctx: &mut Context<'_>, args: &[String]) -> Result<()> {
    if args.is_empty() {
        return Err(CliError::missing_argument("echo", "at least one word"));
    }
    ctx.console.line(text::join_words(args))?;
    Ok(())
}

/// Invalid or non-positive counts fall back to a single flip.
#[instrument(skip(ctx))]
fn coinflip(ctx: &mut Context<'_>, args: &[String]) -> Result<()> {
    let times = match args.first() {
        None => 1,
        Some(raw) => match parse_positive_int(raw) {
            Ok(n) => n.as_usize(),
            Err(e) => {
                debug!("Ignoring flip count '{}' ({}), flipping once", raw, e);
                1
            }
        },
    };

    for face in coin::flips(&mut *ctx.rng, times) {
        ctx.console.line(face.to_string())?;
    }
    Ok(())
}

#[instrument(skip(ctx))]
fn count(ctx: &mut Context<'_>, args: &[String]) -> Result<()> {
    let [sentence, character, ..] = args else {
        return Err(CliError::missing_argument(
            "count",
            "a sentence and a character",
        ));
    };

    let needle = character
        .chars()
        .next()
        .ok_or_else(|| CliError::invalid_argument("count", "character must not be empty"))?;

    ctx.console
        .line(text::count_char(sentence, needle).to_string())?;
    Ok(())
}
