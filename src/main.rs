//! `max-heap`: runs the heap command protocol from standard input
//!
//! Logging goes to standard error and is controlled by `RUST_LOG`
//! (default `warn`).

use std::io::{self, BufWriter};
use std::process::ExitCode;

use linked_max_heap::command;
use linked_max_heap::{Heap, MaxHeap};
use log::error;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut heap: MaxHeap<i64> = MaxHeap::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    match command::run(&mut heap, stdin.lock(), BufWriter::new(stdout.lock())) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
