use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context as _;
use clap::Parser;
use intcalc::{Context, DivisionMode, EvaluationFailure, evaluate_with, parse};
use tracing_subscriber::EnvFilter;

/// intcalc evaluates integer arithmetic expressions built from `+ - * /` and
/// parentheses.
///
/// Without an expression or a file, intcalc starts an interactive prompt that
/// evaluates one line at a time until end of input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates every non-blank line of the given file.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// How `/` rounds inexact quotients.
    #[arg(short, long, value_enum, default_value_t = DivisionMode::Floor)]
    division: DivisionMode,

    /// Prints the parenthesised syntax tree instead of evaluating it.
    #[arg(long)]
    ast: bool,

    /// The prompt shown by the interactive mode.
    #[arg(long, default_value = "calc> ")]
    prompt: String,

    /// A single expression to evaluate.
    expression: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();
    let context = Context::with_division(args.division);

    if let Some(path) = &args.file {
        let script = fs::read_to_string(path).with_context(|| {
                         format!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                 path.display())
                     })?;
        return Ok(run_script(&script, &context, args.ast));
    }

    if let Some(expression) = &args.expression {
        return match run_line(expression, &context, args.ast) {
            Ok(output) => {
                println!("{output}");
                Ok(ExitCode::SUCCESS)
            },
            Err(e) => {
                eprintln!("{}", e.render(expression));
                Ok(ExitCode::FAILURE)
            },
        };
    }

    repl(&args.prompt, &context, args.ast)?;
    Ok(ExitCode::SUCCESS)
}

/// Evaluates (or parses, with `ast`) one line of input.
fn run_line(source: &str, context: &Context, ast: bool) -> Result<String, EvaluationFailure> {
    if ast {
        Ok(parse(source)?.to_string())
    } else {
        Ok(evaluate_with(source, context)?.to_string())
    }
}

/// Evaluates every non-blank line of `script`, reporting failures with their
/// line number. All lines are processed even after a failure.
fn run_script(script: &str, context: &Context, ast: bool) -> ExitCode {
    let mut failed = false;

    for (index, line) in script.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match run_line(line, context, ast) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                failed = true;
                eprintln!("Line {}: {e}", index + 1);
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Reads lines from standard input until end of input.
///
/// Blank lines are skipped. Errors are reported and the loop continues.
fn repl(prompt: &str, context: &Context, ast: bool) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        line.clear();
        if input.read_line(&mut line).context("failed to read from stdin")? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }

        let source = line.trim_end_matches(['\n', '\r']);
        if source.trim().is_empty() {
            continue;
        }

        match run_line(source, context, ast) {
            Ok(output) => writeln!(stdout, "{output}")?,
            Err(e) => eprintln!("{}", e.render(source)),
        }
    }
}
