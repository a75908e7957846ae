// Tapewind: time-travel Brainfuck interpreter core, minimal CLI host

mod history;
mod input;
mod interpreter;
mod program;

use std::fs;
use std::path::Path;

use input::QueuedInput;
use interpreter::engine::Interpreter;
use interpreter::errors::RuntimeError;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("tapewind");
        eprintln!("Error: No input file provided");
        eprintln!();
        eprintln!("Usage: {} <file.b> [input]", program_name);
        eprintln!();
        eprintln!("Examples:");
        eprintln!(
            "  {} demos/squares.b          # Print square numbers up to 10000",
            program_name
        );
        eprintln!(
            "  {} echo.b 'hi\\n'            # Run with escaped input",
            program_name
        );
        eprintln!();
        eprintln!("Input escapes: \\n \\r \\t \\\\ and decimal \\DDD (1-3 digits).");
        std::process::exit(1);
    }

    let source_file = &args[1];

    if !Path::new(source_file).exists() {
        eprintln!("Error: File '{}' not found", source_file);
        std::process::exit(1);
    }

    let source = fs::read_to_string(source_file)?;

    let queue = QueuedInput::new();
    if let Some(raw) = args.get(2) {
        queue.push_raw(raw);
    }

    let mut interpreter = match Interpreter::new(&source, Box::new(queue), None) {
        Ok(interpreter) => interpreter,
        Err(e) => {
            eprintln!("Syntax error: {}", e);
            std::process::exit(1);
        }
    };

    match interpreter.run() {
        Ok(output) => {
            print!("{}", output);
            eprintln!();
            eprintln!(
                "Executed {} instructions.",
                interpreter.instruction_count()
            );
        }
        Err(e @ RuntimeError::NoInput) => {
            print!("{}", interpreter.output());
            eprintln!();
            eprintln!(
                "Stopped after {} instructions: {}",
                interpreter.instruction_count(),
                e
            );
            std::process::exit(1);
        }
        Err(e) => {
            print!("{}", interpreter.output());
            eprintln!();
            eprintln!("Runtime error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
