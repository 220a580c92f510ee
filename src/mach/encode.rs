use crate::error;
use crate::lang::{Directive, Error, Inst, Kind, Opcode, SymbolTable, Word, MAX_WORD, MEMSZ, SENTINEL};

/// Encoding of one statement at one location. `word` is present when
/// the line asks for a memory write; placeholder contents like
/// `05????` never do. Any collected error still blocks the run later,
/// but only some of them spoil the word itself.
#[derive(Debug, Default)]
pub struct Encoded {
    pub contents: Option<String>,
    pub word: Option<Word>,
    pub errors: Vec<Error>,
}

pub fn encode(inst: &Inst, loc: Word, symbols: &SymbolTable) -> Encoded {
    match inst.kind() {
        Kind::Comment | Kind::End => Encoded::default(),
        Kind::Invalid => Encoded {
            contents: None,
            word: None,
            errors: vec![error!(IllegalInstruction)],
        },
        Kind::Machine(opcode) => encode_machine(inst, opcode, symbols),
        Kind::Directive(directive) => encode_directive(inst, directive, loc),
    }
}

fn encode_machine(inst: &Inst, opcode: Opcode, symbols: &SymbolTable) -> Encoded {
    let mut encoded = Encoded::default();
    let mut address: Option<Word> = None;

    if opcode == Opcode::Halt {
        // Halt ignores its operand; the address field is always zero.
        address = Some(0);
    } else if inst.operand_value().is_some() {
        encoded.errors.push(error!(OperandMustBeSymbolic));
    } else {
        let operand = inst.operand().unwrap_or("");
        match symbols.lookup(operand) {
            None => encoded.errors.push(error!(UndefinedLabel)),
            Some(SENTINEL) => encoded.errors.push(error!(MultiplyDefinedLabel)),
            Some(loc) if loc >= MEMSZ as Word => {
                encoded.errors.push(error!(AddressTooLarge));
            }
            Some(loc) => address = Some(loc),
        }
    }

    if inst.has_extra_operand() {
        encoded.errors.push(error!(ExtraOperand));
    }

    match address {
        Some(address) => {
            encoded.contents = Some(format!("{:02}{:04}", opcode.code(), address));
            encoded.word = Some(opcode.code() * 10000 + address);
        }
        None => encoded.contents = Some(format!("{:02}????", opcode.code())),
    }
    encoded
}

fn encode_directive(inst: &Inst, directive: Directive, loc: Word) -> Encoded {
    let mut encoded = Encoded::default();
    match directive {
        // ds and org only move the location counter.
        Directive::Ds | Directive::Org => {
            match inst.operand_value() {
                None => encoded.errors.push(error!(OperandMustBeNumeric)),
                Some(value) if value >= MEMSZ as Word => {
                    encoded.errors.push(error!(AddressTooLarge));
                }
                Some(_) => {}
            }
            if inst.next_location(loc) >= MEMSZ as Word {
                encoded.errors.push(error!(AddressTooLarge));
            }
        }
        Directive::Dc => match inst.operand_value() {
            None => {
                encoded.errors.push(error!(OperandMustBeNumeric));
                encoded.contents = Some("??????".to_string());
            }
            Some(value) if value > MAX_WORD => {
                encoded.errors.push(error!(ValueTooLarge));
                encoded.contents = Some(value.to_string());
            }
            Some(value) => {
                encoded.contents = Some(format!("{:06}", value));
                encoded.word = Some(value);
            }
        },
    }
    if inst.has_extra_operand() {
        encoded.errors.push(error!(ExtraOperand));
    }
    encoded
}
