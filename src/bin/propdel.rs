//! Runs the call-after-delete fixture.
//!
//! Usage:
//!   propdel                     # prints Hello, then fails on the second call
//!   RUST_LOG=debug propdel      # same, with the record operations logged to stderr

use propdel::runner::plugin::types::EvalContext;
use propdel::runner::scenario;
use std::process;

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    let mut ctx = EvalContext::new();
    match scenario::run(&mut ctx) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
