use std::{fs, io};

use clap::Parser;
use simplisp::run_lines;

/// simplisp evaluates a file of prefix arithmetic statements, one per line,
/// printing each result in a form that is itself valid input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the file containing one statement per line.
    input: String,

    /// Require the statement wrapper identifier to equal this word
    /// (e.g. `simplify`). Without it, any alphabetic identifier is accepted.
    #[arg(short, long)]
    keyword: Option<String>,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.input).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  &args.input);
        std::process::exit(1);
    });

    let stdout = io::stdout();
    let stderr = io::stderr();

    if let Err(e) = run_lines(&source,
                              args.keyword.as_deref(),
                              &mut stdout.lock(),
                              &mut stderr.lock())
    {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
