use std::{fs, io::Write, path::PathBuf, process::ExitCode};

use chapa::{
    Interpreter, Settings,
    error::{Error, Failure},
    parse, scan,
};
use clap::Parser;
use colored::Colorize;

/// Exit status when no script was given.
const EXIT_USAGE: u8 = 64;
/// Exit status for source that does not scan or parse.
const EXIT_DATA_ERROR: u8 = 65;
/// Exit status for a program that failed while running.
const EXIT_RUNTIME_ERROR: u8 = 70;
/// Exit status when the script cannot be read.
const EXIT_IO_ERROR: u8 = 74;

/// chapa runs scripts written with Marathi keywords: `he aahe`, `chapa`,
/// `jar`, `nahitar`, `joparyant`, `paryant`, `karya` and `parat`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the script to run.
    #[arg(required_unless_present = "eval", conflicts_with = "eval")]
    script: Option<PathBuf>,

    /// Runs the given source text instead of a file.
    #[arg(short, long, value_name = "SOURCE")]
    eval: Option<String>,

    /// Maximum number of nested function calls.
    #[arg(long, default_value_t = chapa::DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// Prints the token stream, one token per line, instead of running.
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,

    /// Prints the program in canonical form instead of running it.
    #[arg(long)]
    ast: bool,

    /// Raises the log level; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();

    let source = match (&args.eval, &args.script) {
        (Some(source), _) => source.clone(),
        (None, Some(path)) => match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("{} Failed to read the script '{}': {e}",
                          "error:".red().bold(),
                          path.display());
                return ExitCode::from(EXIT_IO_ERROR);
            },
        },
        (None, None) => {
            eprintln!("{} Nothing to run; pass a script or --eval.", "error:".red().bold());
            return ExitCode::from(EXIT_USAGE);
        },
    };

    match execute(&source, &args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        },
        Err(failure) => {
            print!("{}", failure.output);
            if let Err(e) = std::io::stdout().flush() {
                log::warn!("failed to flush stdout: {e}");
            }
            eprintln!("{} {}", "error:".red().bold(), failure.error.to_string().bold());

            match failure.error {
                Error::Lex(_) | Error::Syntax(_) => ExitCode::from(EXIT_DATA_ERROR),
                Error::Eval(_) => ExitCode::from(EXIT_RUNTIME_ERROR),
            }
        },
    }
}

/// Runs the pipeline as far as the flags ask for and returns what should be
/// printed.
fn execute(source: &str, args: &Args) -> Result<String, Failure> {
    let tokens = scan(source).map_err(Failure::new)?;
    if args.tokens {
        return Ok(tokens.iter()
                        .map(|(token, line)| format!("{line:>4}  {token}\n"))
                        .collect());
    }

    let program = parse(&tokens).map_err(Failure::new)?;
    if args.ast {
        return Ok(program.to_string());
    }

    let settings = Settings { max_call_depth: args.max_call_depth };
    Interpreter::with_settings(settings).execute(&program)
}
