use super::Address;
use crate::error;
use crate::lang::{Error, Opcode, Word, MAX_WORD, MEMSZ};

/// ## VC3600 emulator
///
/// A fixed memory of [`MEMSZ`] words, one accumulator, and a program
/// counter. Slots are `Option<Word>` so a stored zero is distinct from
/// a word that was never written; assembly-time loads are write-once.
///
/// Execution is an event pump. The caller hands `execute` a cycle
/// budget and reacts to the returned [`Event`], which keeps console
/// input and output out of the machine and bounds runaway programs.
pub struct Emulator {
    memory: Vec<Option<Word>>,
    accumulator: Word,
    pc: Address,
    pending_read: Option<Address>,
}

#[derive(Debug, PartialEq)]
pub enum Event {
    /// The program halted or ran off the end of memory.
    Stopped,
    /// The cycle budget ran out; call `execute` again to continue.
    Running,
    /// A `write` instruction produced a value for the console.
    Print(Word),
    /// A `read` instruction wants a value; supply it with `input`.
    Input,
    /// A fatal runtime error. The machine will not run further.
    Error(Error),
}

impl Default for Emulator {
    fn default() -> Emulator {
        Emulator {
            memory: vec![None; MEMSZ],
            accumulator: 0,
            pc: 0,
            pending_read: None,
        }
    }
}

impl Emulator {
    pub fn new() -> Emulator {
        Emulator::default()
    }

    /// Write-once load used by pass 2 of the assembler.
    pub fn load(&mut self, loc: Word, value: Word) -> Result<(), Error> {
        if loc < 0 || loc >= MEMSZ as Word {
            return Err(error!(AddressTooLarge));
        }
        if value > MAX_WORD {
            return Err(error!(ValueTooLarge));
        }
        let slot = &mut self.memory[loc as Address];
        if slot.is_some() {
            return Err(error!(DuplicateMemoryWrite));
        }
        *slot = Some(value);
        Ok(())
    }

    pub fn peek(&self, loc: Address) -> Option<Word> {
        self.memory.get(loc).copied().flatten()
    }

    pub fn accumulator(&self) -> Word {
        self.accumulator
    }

    /// Run up to `cycles` fetches. A word over 9999 with a known
    /// opcode in its two high digits dispatches as an instruction;
    /// everything else is inert data. That heuristic is inherited
    /// from the VC3600: a large `dc` constant in the instruction
    /// stream will be executed.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            if self.pc >= MEMSZ {
                return Event::Stopped;
            }
            let word = match self.memory[self.pc] {
                Some(word) if word > 9999 => word,
                _ => {
                    self.pc += 1;
                    continue;
                }
            };
            let opcode = match Opcode::from_code(word / 10000) {
                Some(opcode) => opcode,
                None => {
                    self.pc += 1;
                    continue;
                }
            };
            let address = (word % 10000) as Address;
            match self.step(opcode, address) {
                Step::Next => self.pc += 1,
                Step::Branch(target) => self.pc = target,
                Step::Event(event) => return event,
            }
        }
        Event::Running
    }

    /// Answer a pending [`Event::Input`].
    pub fn input(&mut self, value: Word) -> Result<(), Error> {
        let address = match self.pending_read.take() {
            Some(address) => address,
            None => return Err(error!(InternalError; "NO READ PENDING")),
        };
        if value.abs() > MAX_WORD {
            self.pending_read = Some(address);
            return Err(error!(ValueTooLarge));
        }
        self.memory[address] = Some(value);
        Ok(())
    }

    fn step(&mut self, opcode: Opcode, address: Address) -> Step {
        use Opcode::*;
        match opcode {
            Add => return self.arith(self.accumulator.checked_add(self.read(address))),
            Sub => return self.arith(self.accumulator.checked_sub(self.read(address))),
            Mult => return self.arith(self.accumulator.checked_mul(self.read(address))),
            Div => {
                let divisor = self.read(address);
                if divisor == 0 {
                    return self.fail(error!(DivisionByZero));
                }
                return self.arith(self.accumulator.checked_div(divisor));
            }
            Load => self.accumulator = self.read(address),
            Store => {
                if self.accumulator > MAX_WORD {
                    return self.fail(error!(StoreOverflow));
                }
                self.memory[address] = Some(self.accumulator);
            }
            Read => {
                self.pending_read = Some(address);
                self.pc += 1;
                return Step::Event(Event::Input);
            }
            Write => {
                self.pc += 1;
                return Step::Event(Event::Print(self.read(address)));
            }
            B => return Step::Branch(address),
            Bm => {
                if self.accumulator < 0 {
                    return Step::Branch(address);
                }
            }
            Bz => {
                if self.accumulator == 0 {
                    return Step::Branch(address);
                }
            }
            Bp => {
                if self.accumulator > 0 {
                    return Step::Branch(address);
                }
            }
            Halt => {
                self.pc = MEMSZ;
                return Step::Event(Event::Stopped);
            }
        }
        Step::Next
    }

    /// An unset word reads as zero, as it did on the original machine.
    fn read(&self, address: Address) -> Word {
        self.memory[address].unwrap_or(0)
    }

    /// Overflowing the accumulator is fatal, like dividing by zero.
    fn arith(&mut self, result: Option<Word>) -> Step {
        match result {
            Some(acc) => {
                self.accumulator = acc;
                Step::Next
            }
            None => self.fail(error!(ValueTooLarge; "ACCUMULATOR OVERFLOW")),
        }
    }

    fn fail(&mut self, error: Error) -> Step {
        self.pc = MEMSZ;
        Step::Event(Event::Error(error))
    }
}

enum Step {
    Next,
    Branch(Address),
    Event(Event),
}
