use super::{encode, Emulator, Listing};
use crate::error;
use crate::lang::{classify, Error, Kind, Source, SymbolTable, Word};

/// Assemble a source program in two passes. Pass 1 resolves labels,
/// pass 2 encodes each line into the listing and loads the emulator
/// memory. All diagnostics end up in the listing; nothing is global.
pub fn assemble(source: Source) -> Assembly {
    let mut driver = Driver {
        source,
        symbols: SymbolTable::new(),
        emulator: Emulator::new(),
        listing: Listing::default(),
    };
    driver.pass_one();
    driver.pass_two();
    Assembly {
        symbols: driver.symbols,
        listing: driver.listing,
        emulator: driver.emulator,
    }
}

/// The result of both passes. The emulator is only handed out when no
/// line drew a diagnostic.
pub struct Assembly {
    pub symbols: SymbolTable,
    pub listing: Listing,
    emulator: Emulator,
}

impl Assembly {
    pub fn has_errors(&self) -> bool {
        self.listing.has_errors()
    }

    pub fn into_emulator(self) -> Result<Emulator, Error> {
        if self.has_errors() {
            return Err(error!(InternalError; "CANNOT RUN PROGRAM WITH ERRORS"));
        }
        Ok(self.emulator)
    }
}

struct Driver {
    source: Source,
    symbols: SymbolTable,
    emulator: Emulator,
    listing: Listing,
}

impl Driver {
    /// Establish the location of every label. A missing end statement
    /// is tolerated here; pass 2 reports it.
    fn pass_one(&mut self) {
        let mut loc: Word = 0;
        loop {
            let inst = match self.source.next_line() {
                Some(line) => classify(line),
                None => return,
            };
            match inst.kind() {
                Kind::End => return,
                Kind::Machine(_) | Kind::Directive(_) => {}
                Kind::Comment | Kind::Invalid => continue,
            }
            if let Some(label) = inst.label() {
                self.symbols.insert(label, loc);
            }
            loc = inst.next_location(loc);
        }
    }

    /// Encode every line, echo the translation, and load memory.
    fn pass_two(&mut self) {
        self.source.rewind();
        let mut loc: Word = 0;
        let mut line_number = 0;
        loop {
            line_number += 1;
            let inst = match self.source.next_line() {
                Some(line) => classify(line),
                None => {
                    self.listing
                        .push_error(error!(MissingEndStatement, line_number));
                    return;
                }
            };

            if inst.kind() == Kind::End {
                self.listing.push(None, None, inst.statement(), vec![]);
                if self.source.next_line().is_some() {
                    self.listing
                        .push_error(error!(EndStatementNotLast, line_number));
                }
                return;
            }

            let mut encoded = encode(&inst, loc, &self.symbols);
            if let Some(word) = encoded.word {
                if let Err(error) = self.emulator.load(loc, word) {
                    encoded.errors.push(error);
                }
            }
            let errors = encoded
                .errors
                .iter()
                .map(|e| e.in_line(line_number))
                .collect();
            let location = match inst.kind() {
                Kind::Comment => None,
                _ => Some(loc as super::Address),
            };
            self.listing
                .push(location, encoded.contents, inst.statement(), errors);

            match inst.kind() {
                Kind::Machine(_) | Kind::Directive(_) => loc = inst.next_location(loc),
                _ => {}
            }
        }
    }
}
