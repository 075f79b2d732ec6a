//! Strategy 1: Embedded self-reference
//!
//! Each "class" is a struct that owns its predecessor (`Circle` owns a
//! `ShapeBase`, `BlueCircleWithText` owns a `Circle`). The innermost
//! `ShapeAbstract` carries a slot typed by the capability trait. Constructors
//! point that slot at the outermost value, so the template `draw` defined on
//! the base reaches the most-derived overrides.

use crate::{emit, DrawError};
use crate::{
    BLUE_FILL, CIRCLE_BOUNDARY, DEFAULT_BOUNDARY, DEFAULT_FILL, RECTANGLE_BOUNDARY, RED_FILL,
    SEPARATOR, TEXT_ANNOTATION,
};
use std::cell::RefCell;
use std::io::Write;
use std::rc::{Rc, Weak};
use tracing::{debug, trace, warn};

// =============================================================================
// Capability descriptor
// =============================================================================

pub trait Shape {
    fn draw_boundary(&self, out: &mut dyn Write) -> Result<(), DrawError>;
    fn fill_color(&self, out: &mut dyn Write) -> Result<(), DrawError>;
    fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError>;
}

/// Gives access to the vtable slot buried at the bottom of a composition chain.
///
/// Implementors forward to whatever they embed, the same way a promoted
/// field would be reached through an embedded struct.
pub trait Embeds {
    fn shape_abstract(&self) -> &ShapeAbstract;

    fn point_vtable_at(&self, target: Weak<dyn Shape>, name: &'static str) {
        self.shape_abstract().point_at(target, name);
    }
}

// =============================================================================
// Abstract base: the vtable slot and the template method
// =============================================================================

struct VtableEntry {
    target: Weak<dyn Shape>,
    name: &'static str,
}

pub struct ShapeAbstract {
    owner: &'static str,
    vtable: RefCell<Option<VtableEntry>>,
}

impl ShapeAbstract {
    pub fn new(owner: &'static str) -> Self {
        Self {
            owner,
            vtable: RefCell::new(None),
        }
    }

    /// Overwrites the slot; the newest constructor in the chain wins.
    pub fn point_at(&self, target: Weak<dyn Shape>, name: &'static str) {
        debug!(owner = self.owner, target = name, "wiring vtable slot");
        *self.vtable.borrow_mut() = Some(VtableEntry { target, name });
    }

    pub fn is_wired(&self) -> bool {
        self.vtable.borrow().is_some()
    }

    /// Name of the type the slot currently dispatches to.
    pub fn points_to(&self) -> Option<&'static str> {
        self.vtable.borrow().as_ref().map(|entry| entry.name)
    }

    fn resolve(&self) -> Result<Rc<dyn Shape>, DrawError> {
        let vtable = self.vtable.borrow();
        let Some(entry) = vtable.as_ref() else {
            warn!(owner = self.owner, "dispatch through an unwired slot");
            return Err(DrawError::unwired(self.owner));
        };
        match entry.target.upgrade() {
            Some(target) => {
                trace!(owner = self.owner, target = entry.name, "dispatch");
                Ok(target)
            }
            None => {
                warn!(owner = self.owner, target = entry.name, "dispatch through a dangling slot");
                Err(DrawError::dangling(entry.name))
            }
        }
    }
}

impl Shape for ShapeAbstract {
    // "abstract": only reachable through whatever the slot points at
    fn draw_boundary(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        self.resolve()?.draw_boundary(out)
    }

    fn fill_color(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        self.resolve()?.fill_color(out)
    }

    /// The template method. Both primitives go through the slot, never
    /// through `ShapeBase` directly.
    fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        self.draw_boundary(out)?;
        emit(out, SEPARATOR)?;
        self.fill_color(out)
    }
}

// =============================================================================
// ShapeBase: placeholder implementations of the primitives
// =============================================================================

pub struct ShapeBase {
    shape_abstract: ShapeAbstract,
}

impl ShapeBase {
    pub const NAME: &'static str = "ShapeBase";

    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|me: &Weak<Self>| {
            let base = Self::bare();
            base.point_vtable_at(me.clone(), Self::NAME);
            base
        })
    }

    /// Builds a base whose slot is left empty. Any draw fails with
    /// `DrawError::Unwired`.
    pub fn unwired() -> Rc<Self> {
        Rc::new(Self::bare())
    }

    fn bare() -> Self {
        Self {
            shape_abstract: ShapeAbstract::new(Self::NAME),
        }
    }
}

impl Embeds for ShapeBase {
    fn shape_abstract(&self) -> &ShapeAbstract {
        &self.shape_abstract
    }
}

impl Shape for ShapeBase {
    fn draw_boundary(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        emit(out, DEFAULT_BOUNDARY)
    }

    fn fill_color(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        emit(out, DEFAULT_FILL)
    }

    fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        self.shape_abstract.draw(out)
    }
}

// =============================================================================
// Circle: overrides the boundary only
// =============================================================================

pub struct Circle {
    base: Rc<ShapeBase>,
}

impl Circle {
    pub const NAME: &'static str = "Circle";

    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|me: &Weak<Self>| {
            let circle = Self {
                base: ShapeBase::new(),
            };
            circle.point_vtable_at(me.clone(), Self::NAME);
            circle
        })
    }

    pub fn base(&self) -> &Rc<ShapeBase> {
        &self.base
    }
}

impl Embeds for Circle {
    fn shape_abstract(&self) -> &ShapeAbstract {
        self.base.shape_abstract()
    }
}

impl Shape for Circle {
    fn draw_boundary(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        emit(out, CIRCLE_BOUNDARY)
    }

    fn fill_color(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        self.base.fill_color(out)
    }

    fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        self.base.draw(out)
    }
}

// =============================================================================
// RedRectangle: overrides both primitives
// =============================================================================

pub struct RedRectangle {
    base: Rc<ShapeBase>,
}

impl RedRectangle {
    pub const NAME: &'static str = "RedRectangle";

    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|me: &Weak<Self>| {
            let rectangle = Self {
                base: ShapeBase::new(),
            };
            rectangle.point_vtable_at(me.clone(), Self::NAME);
            rectangle
        })
    }
}

impl Embeds for RedRectangle {
    fn shape_abstract(&self) -> &ShapeAbstract {
        self.base.shape_abstract()
    }
}

impl Shape for RedRectangle {
    fn draw_boundary(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        emit(out, RECTANGLE_BOUNDARY)
    }

    fn fill_color(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        emit(out, RED_FILL)
    }

    fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        self.base.draw(out)
    }
}

// =============================================================================
// BlueCircleWithText: overrides the fill, extends draw
// =============================================================================

pub struct BlueCircleWithText {
    circle: Rc<Circle>,
}

impl BlueCircleWithText {
    pub const NAME: &'static str = "BlueCircleWithText";

    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|me: &Weak<Self>| {
            let shape = Self {
                circle: Circle::new(),
            };
            shape.point_vtable_at(me.clone(), Self::NAME);
            shape
        })
    }

    pub fn circle(&self) -> &Rc<Circle> {
        &self.circle
    }
}

impl Embeds for BlueCircleWithText {
    fn shape_abstract(&self) -> &ShapeAbstract {
        self.circle.shape_abstract()
    }
}

impl Shape for BlueCircleWithText {
    fn draw_boundary(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        self.circle.draw_boundary(out)
    }

    fn fill_color(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        emit(out, BLUE_FILL)
    }

    fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        // "super" has to be named: any embedded value could be the parent
        self.circle.draw(out)?;
        emit(out, TEXT_ANNOTATION)
    }
}
