//! # VC3600
//!
//! A two-pass assembler and emulator for the VC3600, a decimal machine
//! with a single accumulator and 10,000 words of memory.
//!
//! Assembly source is one statement per line:
//! ```text
//! [label] opcode [operand] [;comment]
//! ```
//!
//! Pass 1 resolves every label to a location. Pass 2 encodes each
//! statement into a six-digit decimal word, prints the translation
//! table, and loads the emulator memory. If no errors were reported,
//! the emulator runs the program.

pub mod lang;
pub mod mach;
pub mod term;
