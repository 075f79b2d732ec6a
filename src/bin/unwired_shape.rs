//! Skips the wiring step on purpose and shows the draw failing fast instead
//! of falling back to the base's "nothing" output.
//!
//! Run with: cargo run --bin unwired_shape

use colored::Colorize;
use shape_dispatch::embedded::{Embeds, Shape, ShapeBase};
use shape_dispatch::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    let shape = ShapeBase::unwired();
    println!("wired: {}", shape.shape_abstract().is_wired());

    let mut out: Vec<u8> = Vec::new();
    match shape.draw(&mut out) {
        Ok(()) => {
            println!("{} {}", "unexpected output:".red(), String::from_utf8_lossy(&out));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {}", "draw failed:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
