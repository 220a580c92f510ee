//! # VC3600
//!
//! Command line assembler and emulator for the VC3600.

fn main() {
    let mut args = std::env::args().skip(1);
    let filename = match (args.next(), args.next()) {
        (Some(filename), None) => filename,
        _ => {
            eprintln!("Usage: vc3600 <FileName>");
            std::process::exit(1);
        }
    };
    vc3600::term::main(&filename);
}
