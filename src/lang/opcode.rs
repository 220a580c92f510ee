use super::Word;

/// ## Machine language instruction set
///
/// Every machine instruction occupies one memory word encoded as
/// `OOAAAA`: a two-digit opcode followed by a four-digit address.
/// Arithmetic operates between the accumulator and a memory word.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Opcode {
    /// acc = acc + memory[addr]
    Add = 1,
    /// acc = acc - memory[addr]
    Sub = 2,
    /// acc = acc * memory[addr]
    Mult = 3,
    /// acc = acc / memory[addr]
    Div = 4,
    /// acc = memory[addr]
    Load = 5,
    /// memory[addr] = acc
    Store = 6,
    /// memory[addr] = console input
    Read = 7,
    /// console output = memory[addr]
    Write = 8,
    /// Unconditional branch to addr.
    B = 9,
    /// Branch to addr if acc < 0.
    Bm = 10,
    /// Branch to addr if acc == 0.
    Bz = 11,
    /// Branch to addr if acc > 0.
    Bp = 12,
    /// Stop execution. The address field is ignored.
    Halt = 13,
}

impl Opcode {
    pub fn code(self) -> Word {
        self as Word
    }

    pub fn from_code(code: Word) -> Option<Opcode> {
        use Opcode::*;
        match code {
            1 => Some(Add),
            2 => Some(Sub),
            3 => Some(Mult),
            4 => Some(Div),
            5 => Some(Load),
            6 => Some(Store),
            7 => Some(Read),
            8 => Some(Write),
            9 => Some(B),
            10 => Some(Bm),
            11 => Some(Bz),
            12 => Some(Bp),
            13 => Some(Halt),
            _ => None,
        }
    }

    pub fn from_mnemonic(s: &str) -> Option<Opcode> {
        use Opcode::*;
        match s.to_ascii_lowercase().as_str() {
            "add" => Some(Add),
            "sub" => Some(Sub),
            "mult" => Some(Mult),
            "div" => Some(Div),
            "load" => Some(Load),
            "store" => Some(Store),
            "read" => Some(Read),
            "write" => Some(Write),
            "b" => Some(B),
            "bm" => Some(Bm),
            "bz" => Some(Bz),
            "bp" => Some(Bp),
            "halt" => Some(Halt),
            _ => None,
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Add => write!(f, "ADD"),
            Sub => write!(f, "SUB"),
            Mult => write!(f, "MULT"),
            Div => write!(f, "DIV"),
            Load => write!(f, "LOAD"),
            Store => write!(f, "STORE"),
            Read => write!(f, "READ"),
            Write => write!(f, "WRITE"),
            B => write!(f, "B"),
            Bm => write!(f, "BM"),
            Bz => write!(f, "BZ"),
            Bp => write!(f, "BP"),
            Halt => write!(f, "HALT"),
        }
    }
}

/// Assembler directives occupy no opcode. `dc` stores a constant,
/// `ds` reserves storage, and `org` moves the location counter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Directive {
    Dc,
    Ds,
    Org,
}

impl Directive {
    pub fn from_mnemonic(s: &str) -> Option<Directive> {
        use Directive::*;
        match s.to_ascii_lowercase().as_str() {
            "dc" => Some(Dc),
            "ds" => Some(Ds),
            "org" => Some(Org),
            _ => None,
        }
    }
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Directive::*;
        match self {
            Dc => write!(f, "DC"),
            Ds => write!(f, "DS"),
            Org => write!(f, "ORG"),
        }
    }
}
