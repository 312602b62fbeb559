//! The interpreter's command-line entry point.
//!
//! With no arguments, starts the evaluator REPL on stdin/stdout. With a
//! mode argument (`lexer`/`lex`, `parser`/`ast`, `help`), starts the
//! matching REPL or prints usage. `run <file>` parses and evaluates a
//! whole file in one shot, reporting parse errors as `ariadne` span
//! reports; `--vm` routes execution through the bytecode compiler and VM
//! instead of the tree-walking evaluator.

use std::fs;
use std::io::{self, BufReader};
use std::process::ExitCode;

use clap::Parser as ClapParser;

use wisp::bytecode::Compiler;
use wisp::bytecode::Vm;
use wisp::environment::Environment;
use wisp::evaluator::eval_program;
use wisp::parser::Parser;
use wisp::repl::{self, Mode};

mod diagnostics;

/// Command-line interface for the interpreter.
#[derive(ClapParser)]
#[command(name = "wisp")]
#[command(about = "A small dynamically-typed scripting language", long_about = None)]
struct Cli {
    /// `lexer`/`lex`, `parser`/`ast`, `help`, or `run`.
    mode: Option<String>,

    /// Source file to execute, used only with `run`.
    file: Option<String>,

    /// Execute `run`'s file through the bytecode VM instead of the
    /// tree-walking evaluator.
    #[arg(long)]
    vm: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.mode.as_deref() {
        None => {
            run_repl(Mode::Evaluator);
            ExitCode::SUCCESS
        }
        Some("help") => {
            print_usage();
            ExitCode::SUCCESS
        }
        Some("run") => match cli.file {
            Some(file) => run_file(&file, cli.vm),
            None => {
                eprintln!("run: missing file argument");
                ExitCode::FAILURE
            }
        },
        Some(other) => match Mode::from_arg(other) {
            Some(mode) => {
                run_repl(mode);
                ExitCode::SUCCESS
            }
            None => {
                println!("{other}: unknown command");
                ExitCode::FAILURE
            }
        },
    }
}

fn run_repl(mode: Mode) {
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::start(mode, BufReader::new(stdin.lock()), stdout.lock())
        .expect("writing to stdout should not fail");
}

fn print_usage() {
    println!("Usage: wisp [lexer|lex | parser|ast | help | run <file> [--vm]]");
    println!("With no arguments, starts the evaluator REPL.");
}

fn run_file(file: &str, use_vm: bool) -> ExitCode {
    let source = match fs::read_to_string(file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: could not read {file}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut parser = Parser::new(&source);
    let program = parser.parse_program();
    if !parser.errors.is_empty() {
        diagnostics::report_parse_errors(file, &source, &parser.errors);
        return ExitCode::FAILURE;
    }

    if use_vm {
        let mut compiler = Compiler::new();
        if let Err(err) = compiler.compile(&program) {
            diagnostics::report_plain("Compilation failed", err);
            return ExitCode::FAILURE;
        }
        let mut vm = Vm::new(compiler.instructions().clone(), compiler.constants().to_vec());
        if let Err(err) = vm.run() {
            diagnostics::report_plain("Executing bytecode failed", err);
            return ExitCode::FAILURE;
        }
        if let Some(value) = vm.last_popped_stack_elem() {
            println!("{}", value.inspect());
        }
        return ExitCode::SUCCESS;
    }

    let env = Environment::new();
    let result = eval_program(&program, &env);
    if result.is_error() {
        diagnostics::report_plain("Evaluation failed", result.inspect());
        return ExitCode::FAILURE;
    }
    println!("{}", result.inspect());
    ExitCode::SUCCESS
}
