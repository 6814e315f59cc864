use clap::Parser;
use office_sheet_sampler::cli::{self, WriteArgs};
use std::io;

fn main() {
    let args = WriteArgs::parse();
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    // Failures are reported on stdout; the exit status stays 0.
    if let Err(e) = cli::run_write(&args, &mut handle) {
        cli::report_error(&e, &mut handle);
    }
}
