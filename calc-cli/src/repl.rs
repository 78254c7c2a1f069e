// REPL implementation using editline

use crate::console;
use calc_core::Calculator;
use editline::{LineEditor, terminals::StdioTerminal};
use std::io::Write;

const PROMPT: &str = "Write your expression: ";
const EXIT_COMMANDS: [&str; 5] = ["stop", "end", "finish", "done", "q"];

pub fn is_exit_command(line: &str) -> bool {
    EXIT_COMMANDS
        .iter()
        .any(|command| line.eq_ignore_ascii_case(command))
}

pub fn run_repl(calculator: &Calculator) -> Result<(), Box<dyn std::error::Error>> {
    println!("calc v{}", env!("CARGO_PKG_VERSION"));
    println!("Operators: + - * / // % ** and parentheses");
    println!("Type `q` or press Ctrl-D to exit");
    println!();

    let mut editor = LineEditor::new(1024, 50);
    let mut terminal = StdioTerminal::new();

    loop {
        print!("{}", PROMPT);
        std::io::stdout().flush()?;

        match editor.read_line(&mut terminal) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if is_exit_command(trimmed) {
                    break;
                }
                console::report(calculator, trimmed);
            }
            Err(editline::Error::Eof) => {
                // EOF (Ctrl-D)
                println!();
                break;
            }
            Err(editline::Error::Interrupted) => {
                // Ctrl-C - drop the line and prompt again
                println!("^C");
                continue;
            }
            Err(e) => {
                eprintln!("Input error: {}", e);
                break;
            }
        }
    }

    Ok(())
}
