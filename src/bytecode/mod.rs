//! Bytecode compiler and stack VM: an alternate execution path alongside
//! the tree-walking [`crate::evaluator`], sharing the same [`crate::ast`]
//! front end and [`crate::value::Value`] runtime representation.
//!
//! Only integer addition is implemented; anything else is a compile error
//! from [`compiler::Compiler::compile`].

pub mod code;
pub mod compiler;
pub mod vm;

pub use code::{disassemble, make, Instructions, Opcode};
pub use compiler::{CompileError, Compiler};
pub use vm::{Vm, VmError};
