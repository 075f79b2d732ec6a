//! The template method demo.
//!
//! Run with: cargo run --bin template_method [config.toml]

use shape_dispatch::{logging, DemoConfig};
use std::env;
use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

fn run() -> Result<(), Box<dyn Error>> {
    let config = match env::args().nth(1) {
        Some(path) => DemoConfig::from_file(path)?,
        None => DemoConfig::default(),
    };
    let gallery = config.gallery()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    gallery.render(&mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
