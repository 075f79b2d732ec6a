//! Strategy 3: Default trait methods
//!
//! Rust's own answer to the template method: put the template on the trait
//! as a default method. Every impl gets its own monomorphized copy, so the
//! primitives it calls are always the implementor's. No slot, no wiring.

use crate::{emit, DrawError};
use crate::{
    BLUE_FILL, CIRCLE_BOUNDARY, DEFAULT_BOUNDARY, DEFAULT_FILL, RECTANGLE_BOUNDARY, RED_FILL,
    SEPARATOR, TEXT_ANNOTATION,
};
use std::io::Write;

pub trait Shape {
    fn draw_boundary(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        emit(out, DEFAULT_BOUNDARY)
    }

    fn fill_color(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        emit(out, DEFAULT_FILL)
    }

    fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        template_draw(self, out)
    }
}

/// The shared template. Overrides of `draw` call this by name when they
/// want the default behaviour before extending it.
pub fn template_draw<S: Shape + ?Sized>(shape: &S, out: &mut dyn Write) -> Result<(), DrawError> {
    shape.draw_boundary(out)?;
    emit(out, SEPARATOR)?;
    shape.fill_color(out)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ShapeBase;

impl Shape for ShapeBase {}

#[derive(Debug, Default, Clone, Copy)]
pub struct Circle;

impl Shape for Circle {
    fn draw_boundary(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        emit(out, CIRCLE_BOUNDARY)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RedRectangle;

impl Shape for RedRectangle {
    fn draw_boundary(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        emit(out, RECTANGLE_BOUNDARY)
    }

    fn fill_color(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        emit(out, RED_FILL)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BlueCircleWithText {
    circle: Circle,
}

impl Shape for BlueCircleWithText {
    fn draw_boundary(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        self.circle.draw_boundary(out)
    }

    fn fill_color(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        emit(out, BLUE_FILL)
    }

    fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        // Circle's draw is the default template; run it against self so the
        // Blue fill is seen. `self.circle.draw(out)` would only see Circle.
        template_draw(self, out)?;
        emit(out, TEXT_ANNOTATION)
    }
}
