use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use pastel_calc::{calculator::Calculator, evaluate, util::num::buffer_text};
use tracing_subscriber::EnvFilter;

/// pastel-calc evaluates arithmetic expressions with `+ - * /` and
/// parentheses.
///
/// Without an expression it reads lines from standard input and feeds them to
/// a calculator whose result carries over into the next line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the argument as a file holding one expression per line.
    #[arg(short, long)]
    file: bool,

    /// Log verbosity, as a tracing filter directive such as `debug` or
    /// `pastel_calc=trace`.
    #[arg(long, default_value = "warn")]
    log_level: String,

    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|e| {
        eprintln!("Invalid log level '{}': {e}. Falling back to 'warn'.", args.log_level);
        EnvFilter::new("warn")
    });
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    match args.contents {
        Some(path) if args.file => run_file(&path),
        Some(expression) => run_once(&expression),
        None => run_interactive(),
    }
}

fn run_once(expression: &str) -> ExitCode {
    match evaluate(expression) {
        Ok(value) => {
            println!("{}", buffer_text(value));
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn run_file(path: &str) -> ExitCode {
    let Ok(script) = fs::read_to_string(path) else {
        eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
        return ExitCode::FAILURE;
    };

    let mut status = ExitCode::SUCCESS;
    for line in script.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match evaluate(line) {
            Ok(value) => println!("{line} = {}", buffer_text(value)),
            Err(e) => {
                println!("{line}: {e}");
                status = ExitCode::FAILURE;
            },
        }
    }
    status
}

fn run_interactive() -> ExitCode {
    let mut calculator = Calculator::new();

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            },
        };
        let mut keys: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        if keys.is_empty() {
            continue;
        }
        if !keys.ends_with(['=', 'C', '⌫']) {
            keys.push('=');
        }
        match calculator.type_str(&keys) {
            Ok(screen) => println!("{screen}"),
            Err(e) => eprintln!("{e}"),
        }
    }

    ExitCode::SUCCESS
}
