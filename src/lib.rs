//! A small dynamically-typed scripting language: lexer, Pratt parser, AST,
//! tree-walking evaluator, and an incremental bytecode compiler/VM.
//!
//! # Modules
//!
//! - [`token`] - token kinds and source location tracking
//! - [`lexer`] - lexical analysis (tokenization)
//! - [`ast`] - abstract syntax tree definitions
//! - [`parser`] - recursive descent, Pratt-precedence parser
//! - [`value`] - the runtime value model
//! - [`environment`] - lexical scope chain
//! - [`evaluator`] - tree-walking evaluator over the AST
//! - [`bytecode`] - compiler and stack VM (integer addition only, see its
//!   module docs)
//! - [`repl`] - the three REPL modes (evaluator, lexer, parser) described
//!   in the external interfaces
//!
//! # Example
//!
//! ```
//! use wisp::environment::Environment;
//! use wisp::evaluator::eval_program;
//! use wisp::parser::Parser;
//!
//! let mut parser = Parser::new("let x = 5; x + 1");
//! let program = parser.parse_program();
//! assert!(parser.errors.is_empty());
//!
//! let env = Environment::new();
//! assert_eq!(eval_program(&program, &env).inspect(), "6");
//! ```

pub mod ast;
pub mod bytecode;
pub mod environment;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod token;
pub mod value;
