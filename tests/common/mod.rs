use vc3600::lang::Source;
use vc3600::mach::{assemble, Assembly, Emulator, Event};

pub fn assemble_str(text: &str) -> Assembly {
    assemble(Source::from(text))
}

pub fn emulator(text: &str) -> Emulator {
    assemble_str(text)
        .into_emulator()
        .expect("program assembled with errors")
}

// A full sweep to the end of memory costs MEMSZ cycles, so the
// default budget comfortably covers two of them.
pub fn exec(emulator: &mut Emulator, inputs: &[i64]) -> String {
    exec_n(emulator, 25000, inputs)
}

pub fn exec_n(emulator: &mut Emulator, cycles: usize, inputs: &[i64]) -> String {
    let mut s = String::new();
    let mut inputs = inputs.iter();
    let mut prev_running = false;
    loop {
        let event = emulator.execute(cycles);
        match &event {
            Event::Stopped => break,
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(value) => {
                s.push_str(&format!("{}\n", value));
            }
            Event::Input => {
                let value = inputs.next().expect("program wanted more input");
                emulator.input(*value).expect("input rejected");
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
                break;
            }
        }
        prev_running = matches!(event, Event::Running);
    }
    s
}
