extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::Source;
use crate::mach::{assemble, Emulator, Event};
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub fn main(filename: &str) {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    let source = match Source::load(filename) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Source file could not be opened, assembler terminated.");
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };

    let assembly = assemble(source);
    print!("{}", assembly.symbols);
    print_listing(&assembly);

    if assembly.has_errors() {
        println!("{}", Style::new().bold().paint("Cannot run program if it has errors."));
        std::process::exit(1);
    }

    let emulator = match assembly.into_emulator() {
        Ok(emulator) => emulator,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };

    println!("Results from the emulating program:");
    println!();
    if let Err(error) = run(emulator, interrupted) {
        eprintln!("{}", error);
        std::process::exit(1);
    }
    println!();
    println!("End of emulation.");
}

fn print_listing(assembly: &crate::mach::Assembly) {
    // Lines print plain; their diagnostics print bold beneath them.
    for text in assembly.listing.to_string().lines() {
        if text.starts_with("ERROR:") {
            println!("{}", Style::new().bold().paint(text));
        } else {
            println!("{}", text);
        }
    }
}

fn run(mut emulator: Emulator, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let input = Interface::new("vc3600")?;
    input.set_prompt("? ")?;
    loop {
        if interrupted.load(Ordering::SeqCst) {
            println!("Interrupted.");
            return Ok(());
        }
        match emulator.execute(5000) {
            Event::Stopped => return Ok(()),
            Event::Running => {}
            Event::Print(value) => println!("{}", value),
            Event::Input => loop {
                let string = match input.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => return Ok(()),
                };
                let accepted = string
                    .trim()
                    .parse::<i64>()
                    .ok()
                    .and_then(|value| emulator.input(value).ok())
                    .is_some();
                if accepted {
                    break;
                }
            },
            Event::Error(error) => {
                println!("{}", Style::new().bold().paint(error.to_string()));
                return Ok(());
            }
        }
    }
}
