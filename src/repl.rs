//! The interactive REPL: three modes sharing one read-a-line loop and
//! prompt, differing only in what they do with each line.
//!
//! Wire format: prompt `>> `; parse errors print one per line, tab-prefixed,
//! and the loop continues; evaluate/compile/run errors print a labeled
//! message and the loop continues; success prints the final value's
//! `Inspect()` form.

use std::io::{self, BufRead, Write};

use crate::bytecode::{Compiler, Vm};
use crate::environment::{Env, Environment};
use crate::evaluator::eval_program;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::token::TokenKind;

const PROMPT: &str = ">> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Evaluator,
    VmBacked,
    Lexer,
    Parser,
}

impl Mode {
    /// Resolves a command-line mode argument per the external interface:
    /// `lexer`/`lex`, `parser`/`ast`, or anything else falls through to the
    /// caller as unrecognized.
    pub fn from_arg(arg: &str) -> Option<Mode> {
        match arg {
            "lexer" | "lex" => Some(Mode::Lexer),
            "parser" | "ast" => Some(Mode::Parser),
            _ => None,
        }
    }
}

/// Runs the REPL in the given mode, reading from `input` and writing
/// prompts/output to `output` until `input` is exhausted (EOF).
pub fn start(mode: Mode, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let env = Environment::new();
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        match mode {
            Mode::Lexer => run_lexer_line(&line, &mut output)?,
            Mode::Parser => run_parser_line(&line, &mut output)?,
            Mode::Evaluator => run_evaluator_line(&line, &env, &mut output)?,
            Mode::VmBacked => run_vm_line(&line, &mut output)?,
        }
    }
}

fn run_lexer_line(line: &str, output: &mut impl Write) -> io::Result<()> {
    let mut lexer = Lexer::new(line);
    loop {
        let token = lexer.next_token();
        let is_eof = token.kind == TokenKind::Eof;
        writeln!(output, "{token:?}")?;
        if is_eof {
            break;
        }
    }
    Ok(())
}

fn run_parser_line(line: &str, output: &mut impl Write) -> io::Result<()> {
    let mut parser = Parser::new(line);
    let program = parser.parse_program();
    if !parser.errors.is_empty() {
        print_parse_errors(&parser.errors, output)?;
        return Ok(());
    }
    writeln!(output, "{program}")
}

fn run_evaluator_line(line: &str, env: &Env, output: &mut impl Write) -> io::Result<()> {
    let mut parser = Parser::new(line);
    let program = parser.parse_program();
    if !parser.errors.is_empty() {
        print_parse_errors(&parser.errors, output)?;
        return Ok(());
    }

    let result = eval_program(&program, env);
    writeln!(output, "{}", result.inspect())
}

fn run_vm_line(line: &str, output: &mut impl Write) -> io::Result<()> {
    let mut parser = Parser::new(line);
    let program = parser.parse_program();
    if !parser.errors.is_empty() {
        print_parse_errors(&parser.errors, output)?;
        return Ok(());
    }

    let mut compiler = Compiler::new();
    if let Err(err) = compiler.compile(&program) {
        return writeln!(output, "Compilation failed:\n {err}");
    }

    let mut vm = Vm::new(compiler.instructions().clone(), compiler.constants().to_vec());
    if let Err(err) = vm.run() {
        return writeln!(output, "Executing bytecode failed:\n {err}");
    }

    match vm.last_popped_stack_elem() {
        Some(value) => writeln!(output, "{}", value.inspect()),
        None => Ok(()),
    }
}

fn print_parse_errors(errors: &[crate::parser::ParseError], output: &mut impl Write) -> io::Result<()> {
    for error in errors {
        writeln!(output, "\t{}", error.message)?;
    }
    Ok(())
}
