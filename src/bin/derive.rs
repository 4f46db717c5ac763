//! Prompts for a string and tries to derive it, leftmost first and then rightmost.
//!
//! Usage:
//!   cargo run --bin `derive`
//!   cargo run --bin `derive` -- "S -> AB; A -> a | aA; B -> b" S
//!
//! Without arguments the grammar is `S -> aSb | ab` with start symbol `S`.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use derivation::{DerivationEngine, Grammar};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const DEFAULT_GRAMMAR: &str = "S -> aSb | ab";
const DEFAULT_START: &str = "S";

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let grammar_text = args.next().unwrap_or_else(|| DEFAULT_GRAMMAR.to_string());
    let start = args.next().unwrap_or_else(|| DEFAULT_START.to_string());

    let grammar: Grammar = match grammar_text.parse() {
        Ok(grammar) => grammar,
        Err(e) => {
            eprintln!("Failed to read grammar: {e}");
            return ExitCode::FAILURE;
        }
    };
    let engine = DerivationEngine::new(grammar, start);

    print!("Enter a string to parse: ");
    if let Err(e) = io::stdout().flush() {
        eprintln!("Failed to write prompt: {e}");
        return ExitCode::FAILURE;
    }

    let mut input = String::new();
    if let Err(e) = io::stdin().lock().read_line(&mut input) {
        eprintln!("Failed to read input: {e}");
        return ExitCode::FAILURE;
    }
    let target = input.split_whitespace().next().unwrap_or_default();

    let (leftmost, rightmost) = engine.derive_both(target);
    println!("\n{leftmost}");
    println!("\n{rightmost}");

    ExitCode::SUCCESS
}
