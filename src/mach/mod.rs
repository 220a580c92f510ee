/*!
## Machine Module

This module is the two-pass assembler driver and the VC3600 emulator.

*/

pub type Address = usize;

mod assemble;
mod encode;
mod listing;
mod runtime;

pub use assemble::assemble;
pub use assemble::Assembly;
pub use encode::encode;
pub use encode::Encoded;
pub use listing::Listing;
pub use runtime::Emulator;
pub use runtime::Event;
