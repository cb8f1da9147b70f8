#![allow(dead_code)]
use basic::mach::{Event, Runtime};

pub fn runtime(source: &str) -> Runtime {
    let mut r = Runtime::new();
    r.load(source.as_bytes()).unwrap();
    r
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

/// Output of the run, any error on its own line, and a marker when
/// the program was still going after `steps` instructions.
pub fn exec_n(runtime: &mut Runtime, steps: u64) -> String {
    let mut s = String::new();
    if let Err(error) = runtime.start() {
        s.push_str(&format!("{}\n", error));
        return s;
    }
    let limit = runtime.steps() + steps;
    loop {
        if runtime.steps() >= limit && runtime.is_running() && !runtime.at_end() {
            s.push_str(&format!("\n{} steps exceeded.\n", steps));
            break;
        }
        match runtime.execute(1) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(ps) => s.push_str(&ps),
            Event::Error(error) => s.push_str(&format!("{}\n", error)),
        }
    }
    s
}
