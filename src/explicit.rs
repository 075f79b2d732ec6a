//! Strategy 2: Capability passed explicitly
//!
//! Instead of storing a self-reference, the template takes the value to
//! dispatch through as an argument. Callers hand the outermost shape to
//! `draw`, and every layer passes it down untouched.

use crate::{emit, DrawError};
use crate::{
    BLUE_FILL, CIRCLE_BOUNDARY, DEFAULT_BOUNDARY, DEFAULT_FILL, RECTANGLE_BOUNDARY, RED_FILL,
    SEPARATOR, TEXT_ANNOTATION,
};
use std::io::Write;

pub trait ExplicitShape {
    fn draw_boundary(&self, out: &mut dyn Write) -> Result<(), DrawError>;
    fn fill_color(&self, out: &mut dyn Write) -> Result<(), DrawError>;

    /// `this` decides which primitives run.
    fn draw(&self, this: &dyn ExplicitShape, out: &mut dyn Write) -> Result<(), DrawError>;
}

/// Draws `shape` using itself as the capability.
pub fn draw_self(shape: &dyn ExplicitShape, out: &mut dyn Write) -> Result<(), DrawError> {
    shape.draw(shape, out)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ShapeBase;

impl ExplicitShape for ShapeBase {
    fn draw_boundary(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        emit(out, DEFAULT_BOUNDARY)
    }

    fn fill_color(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        emit(out, DEFAULT_FILL)
    }

    fn draw(&self, this: &dyn ExplicitShape, out: &mut dyn Write) -> Result<(), DrawError> {
        this.draw_boundary(out)?;
        emit(out, SEPARATOR)?;
        this.fill_color(out)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Circle {
    base: ShapeBase,
}

impl ExplicitShape for Circle {
    fn draw_boundary(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        emit(out, CIRCLE_BOUNDARY)
    }

    fn fill_color(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        self.base.fill_color(out)
    }

    fn draw(&self, this: &dyn ExplicitShape, out: &mut dyn Write) -> Result<(), DrawError> {
        self.base.draw(this, out)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RedRectangle {
    base: ShapeBase,
}

impl ExplicitShape for RedRectangle {
    fn draw_boundary(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        emit(out, RECTANGLE_BOUNDARY)
    }

    fn fill_color(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        emit(out, RED_FILL)
    }

    fn draw(&self, this: &dyn ExplicitShape, out: &mut dyn Write) -> Result<(), DrawError> {
        self.base.draw(this, out)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BlueCircleWithText {
    circle: Circle,
}

impl ExplicitShape for BlueCircleWithText {
    fn draw_boundary(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        self.circle.draw_boundary(out)
    }

    fn fill_color(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        emit(out, BLUE_FILL)
    }

    fn draw(&self, this: &dyn ExplicitShape, out: &mut dyn Write) -> Result<(), DrawError> {
        self.circle.draw(this, out)?;
        emit(out, TEXT_ANNOTATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{render, ClosedSink};

    #[test]
    fn test_each_variant_draws_its_tokens() {
        assert_eq!(render(|out| draw_self(&ShapeBase, out)), "draw nothing-fill nothing");
        assert_eq!(render(|out| draw_self(&Circle::default(), out)), "Circle-fill nothing");
        assert_eq!(render(|out| draw_self(&RedRectangle::default(), out)), "Rectangle-Red");
        assert_eq!(
            render(|out| draw_self(&BlueCircleWithText::default(), out)),
            "Circle-Blue-TextAnnotation"
        );
    }

    #[test]
    fn test_capability_argument_picks_the_primitives() {
        // the base template, driven by a rectangle
        let output = render(|out| ShapeBase.draw(&RedRectangle::default(), out));
        assert_eq!(output, "Rectangle-Red");
    }

    #[test]
    fn test_passing_inner_value_loses_overrides() {
        let shape = BlueCircleWithText::default();
        let output = render(|out| shape.draw(&shape.circle, out));
        assert_eq!(output, "Circle-fill nothing-TextAnnotation");
    }

    #[test]
    fn test_draw_is_idempotent() {
        let shape = BlueCircleWithText::default();
        assert_eq!(
            render(|out| draw_self(&shape, out)),
            render(|out| draw_self(&shape, out))
        );
    }

    #[test]
    fn test_boxed_shape_matches_concrete_call() {
        let concrete = Circle::default();
        let boxed: Box<dyn ExplicitShape> = Box::new(concrete);
        assert_eq!(
            render(|out| concrete.draw(&concrete, out)),
            render(|out| draw_self(boxed.as_ref(), out))
        );
    }

    #[test]
    fn test_closed_sink_surfaces_io_error() {
        let err = draw_self(&RedRectangle::default(), &mut ClosedSink).unwrap_err();
        assert!(matches!(err, DrawError::Io(_)));
    }
}
