extern crate heron;

use heron::run;
use heron::scalar_io::StreamIo;
use std::io::{self, Write};
use std::process;

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut scalar_io = StreamIo::new(stdin.lock(), stdout.lock());
    if let Err(e) = run::run(&mut scalar_io) {
        let _ = writeln!(io::stderr(), "error: {}", e);
        process::exit(1);
    }
}
