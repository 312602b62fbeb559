//! End-to-end tests for the compile + VM execution path.

use wisp::bytecode::{disassemble, make, CompileError, Compiler, Opcode, Vm};
use wisp::parser::Parser;
use wisp::value::Value;

fn compile(input: &str) -> Compiler {
    let mut parser = Parser::new(input);
    let program = parser.parse_program();
    assert!(parser.errors.is_empty(), "parse errors: {:?}", parser.errors);
    let mut compiler = Compiler::new();
    compiler.compile(&program).expect("compile should succeed");
    compiler
}

#[test]
fn one_plus_two_runs_to_three_on_the_vm() {
    let compiler = compile("1 + 2");
    let mut vm = Vm::new(compiler.instructions().clone(), compiler.constants().to_vec());
    vm.run().expect("vm run should succeed");
    assert!(matches!(vm.last_popped_stack_elem(), Some(Value::Integer(3))));
}

#[test]
fn unsupported_operator_is_a_compile_error() {
    let mut parser = Parser::new("1 * 2");
    let program = parser.parse_program();
    let mut compiler = Compiler::new();
    let err: CompileError = compiler.compile(&program).unwrap_err();
    assert_eq!(err.message, "unknown operator *");
}

#[test]
fn make_constant_roundtrips_to_the_reference_bytes() {
    let instruction = make(Opcode::Constant, &[65534]);
    assert_eq!(instruction, vec![Opcode::Constant.byte(), 0xFF, 0xFE]);
}

#[test]
fn disassembly_renders_one_instruction_per_line() {
    let compiler = compile("1 + 2");
    let text = disassemble(compiler.instructions());
    assert_eq!(text, "0000 OpConstant 0\n0003 OpConstant 1\n0006 OpAdd\n");
}
