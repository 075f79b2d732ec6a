//! # Emulating Class Inheritance with Composition and Traits
//!
//! This crate walks through the "template method" pattern from classic
//! class-based languages and shows three ways to get the same behaviour out
//! of Rust:
//!
//! ## Strategy 1: Embedded self-reference (`embedded`)
//! - Embedding modelled as composition with explicit forwarding
//! - A `Weak<dyn Shape>` slot acting as a hand-patched vtable
//! - Every constructor re-points the slot at the newest outer value
//! - Forgetting to wire the slot fails fast with `DrawError::Unwired`
//!
//! ## Strategy 2: Capability passed explicitly (`explicit`)
//! - The template receives `this: &dyn ExplicitShape` as an argument
//! - No stored self-reference, so nothing can be left unwired
//!
//! ## Strategy 3: Default trait methods (`native`)
//! - The template is a default method on the trait
//! - Overrides are plain trait impls, "super" is a named free function
//!
//! All three render the canonical gallery identically:
//!
//! ```text
//! draw nothing-fill nothing
//! Circle-fill nothing
//! Rectangle-Red
//! Circle-Blue-TextAnnotation
//! ```
//!
//! Run the demo with: `cargo run --bin template_method`

use std::io::Write;

pub mod config;
pub mod embedded;
pub mod error;
pub mod explicit;
pub mod gallery;
pub mod logging;
pub mod native;

pub use config::DemoConfig;
pub use error::{ConfigError, DrawError};
pub use gallery::{compare_strategies, Gallery, ShapeKind, Strategy, StrategyReport};

pub const SEPARATOR: &str = "-";
pub const TEXT_ANNOTATION: &str = "-TextAnnotation";

pub const DEFAULT_BOUNDARY: &str = "draw nothing";
pub const DEFAULT_FILL: &str = "fill nothing";
pub const CIRCLE_BOUNDARY: &str = "Circle";
pub const RECTANGLE_BOUNDARY: &str = "Rectangle";
pub const RED_FILL: &str = "Red";
pub const BLUE_FILL: &str = "Blue";

/// Writes a single token to the sink.
pub(crate) fn emit(out: &mut dyn Write, token: &str) -> Result<(), DrawError> {
    out.write_all(token.as_bytes())?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::DrawError;
    use std::io::{self, Write};

    /// Runs a drawing closure against an in-memory sink and returns what it wrote.
    pub fn render<F>(draw: F) -> String
    where
        F: FnOnce(&mut dyn Write) -> Result<(), DrawError>,
    {
        let mut buffer: Vec<u8> = Vec::new();
        draw(&mut buffer).expect("drawing into a Vec never fails");
        String::from_utf8(buffer).expect("tokens are ASCII")
    }

    /// A sink that refuses every write, like a closed pipe.
    pub struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
