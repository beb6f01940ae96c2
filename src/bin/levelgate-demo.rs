#![deny(unsafe_code)]

//! Demo host for the `logging` facade.
//!
//! Runs the facade's usage walkthrough for one value so the effect of the
//! build-time logging flags can be observed from the command line.

#[path = "demo.rs"]
mod demo;

use std::{env, io, process::ExitCode};

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    demo::run_with(env::args_os(), &mut stdout, &mut stderr)
}
