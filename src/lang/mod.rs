/*!
# Language Module

This module provides classification of VC3600 assembly source lines,
the symbol table, and the source line supplier.

*/

#[macro_use]
mod error;
mod inst;
mod opcode;
mod source;
mod symbol;

pub use error::Error;
pub use error::ErrorCode;
pub use inst::classify;
pub use inst::Inst;
pub use inst::Kind;
pub use opcode::Directive;
pub use opcode::Opcode;
pub use source::Source;
pub use symbol::SymbolTable;

/// Words of VC3600 memory.
pub const MEMSZ: usize = 10000;

/// Largest value a memory word can hold: six decimal digits.
pub const MAX_WORD: Word = 999_999;

/// Location recorded for a label defined more than once.
pub const SENTINEL: Word = -999;

/// A VC3600 memory word. Negative values only ever appear in the
/// accumulator and in the multiply-defined sentinel.
pub type Word = i64;
