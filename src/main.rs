use std::io::{self, Write};
use std::process;

use log::error;
use sndfile_symbols::Error;

fn main() {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let argv = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    match sndfile_symbols::run(argv, &mut out) {
        Ok(()) => {}
        Err(Error::Usage(usage)) => {
            let _ = write!(out, "{}", usage);
            let _ = out.flush();
            process::exit(1);
        }
        Err(err) => {
            error!("failed to write symbols file: {}", err);
            process::exit(1);
        }
    }
}
