use clap::Parser;
use rafmat::{evaluate_statement, Variables};
use rustyline::error::ReadlineError;

/// rafmat is a line-oriented calculator, with variables, comparisons and a few
/// math functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prompt displayed before each statement of an interactive session.
    #[arg(long, default_value = "rafmat: ")]
    prompt: String,

    /// Evaluate this statement and exit, instead of starting an interactive
    /// session. Can be repeated, statements share their variables.
    #[arg(short, long, value_name = "STATEMENT")]
    eval: Vec<String>,
}

/// Statements that end an interactive session
const EXIT_COMMANDS: [&str; 2] = ["EXIT", "q"];

fn main() {
    let args = Args::parse();

    if args.eval.is_empty() {
        run_repl(&args.prompt);
    } else if !run_statements(&args.eval) {
        std::process::exit(1);
    }
}

/// Evaluate `statements` in order, returning `false` if any of them failed
fn run_statements(statements: &[String]) -> bool {
    let mut variables = Variables::new();
    let mut success = true;
    for statement in statements {
        success &= run_statement(statement, &mut variables);
    }
    success
}

fn run_statement(statement: &str, variables: &mut Variables) -> bool {
    match evaluate_statement(statement, variables) {
        Ok(Some(value)) => {
            println!("{}", value);
            true
        }
        Ok(None) => true,
        Err(err) => {
            eprintln!("{}", err);
            false
        }
    }
}

fn run_repl(prompt: &str) {
    let mut rl = rustyline::Editor::<()>::new();
    let mut variables = Variables::new();
    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let statement = line.trim();
                if statement.is_empty() {
                    continue;
                }
                if EXIT_COMMANDS.contains(&statement) {
                    break;
                }
                rl.add_history_entry(statement);
                run_statement(statement, &mut variables);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }
}
