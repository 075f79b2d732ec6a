use crate::error::DrawError;
use crate::{embedded, explicit, native};
use itertools::Itertools;
use serde::Deserialize;
use std::fmt;
use std::io::Write;
use std::rc::Rc;
use tracing::{debug, info};

// =============================================================================
// Catalogue
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Base,
    Circle,
    RedRectangle,
    BlueCircleWithText,
}

impl ShapeKind {
    /// The canonical demo order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Base,
        ShapeKind::Circle,
        ShapeKind::RedRectangle,
        ShapeKind::BlueCircleWithText,
    ];

    pub fn embedded(self) -> Rc<dyn embedded::Shape> {
        match self {
            ShapeKind::Base => embedded::ShapeBase::new(),
            ShapeKind::Circle => embedded::Circle::new(),
            ShapeKind::RedRectangle => embedded::RedRectangle::new(),
            ShapeKind::BlueCircleWithText => embedded::BlueCircleWithText::new(),
        }
    }

    pub fn explicit(self) -> Box<dyn explicit::ExplicitShape> {
        match self {
            ShapeKind::Base => Box::new(explicit::ShapeBase),
            ShapeKind::Circle => Box::new(explicit::Circle::default()),
            ShapeKind::RedRectangle => Box::new(explicit::RedRectangle::default()),
            ShapeKind::BlueCircleWithText => Box::new(explicit::BlueCircleWithText::default()),
        }
    }

    pub fn native(self) -> Box<dyn native::Shape> {
        match self {
            ShapeKind::Base => Box::new(native::ShapeBase),
            ShapeKind::Circle => Box::new(native::Circle),
            ShapeKind::RedRectangle => Box::new(native::RedRectangle),
            ShapeKind::BlueCircleWithText => Box::new(native::BlueCircleWithText::default()),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ShapeKind::Base => embedded::ShapeBase::NAME,
            ShapeKind::Circle => embedded::Circle::NAME,
            ShapeKind::RedRectangle => embedded::RedRectangle::NAME,
            ShapeKind::BlueCircleWithText => embedded::BlueCircleWithText::NAME,
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    Embedded,
    Explicit,
    Native,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Embedded, Strategy::Explicit, Strategy::Native];

    pub fn describe(self) -> &'static str {
        match self {
            Strategy::Embedded => "self-reference slot wired by each constructor",
            Strategy::Explicit => "capability passed to draw as an argument",
            Strategy::Native => "template as a default trait method",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::Embedded => write!(f, "embedded"),
            Strategy::Explicit => write!(f, "explicit"),
            Strategy::Native => write!(f, "native"),
        }
    }
}

// =============================================================================
// Gallery: the homogeneous collection the driver walks
// =============================================================================

enum Shapes {
    Embedded(Vec<Rc<dyn embedded::Shape>>),
    Explicit(Vec<Box<dyn explicit::ExplicitShape>>),
    Native(Vec<Box<dyn native::Shape>>),
}

pub struct Gallery {
    strategy: Strategy,
    kinds: Vec<ShapeKind>,
    shapes: Shapes,
}

impl Gallery {
    pub fn new(strategy: Strategy, kinds: &[ShapeKind]) -> Self {
        debug!(
            %strategy,
            shapes = %kinds.iter().join(", "),
            "building gallery"
        );
        let shapes = match strategy {
            Strategy::Embedded => Shapes::Embedded(kinds.iter().map(|k| k.embedded()).collect()),
            Strategy::Explicit => Shapes::Explicit(kinds.iter().map(|k| k.explicit()).collect()),
            Strategy::Native => Shapes::Native(kinds.iter().map(|k| k.native()).collect()),
        };
        Self {
            strategy,
            kinds: kinds.to_vec(),
            shapes,
        }
    }

    pub fn canonical(strategy: Strategy) -> Self {
        Self::new(strategy, &ShapeKind::ALL)
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn kinds(&self) -> &[ShapeKind] {
        &self.kinds
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Draws every shape in order, one line each.
    pub fn render(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        info!(strategy = %self.strategy, count = self.len(), "rendering gallery");
        match &self.shapes {
            Shapes::Embedded(shapes) => {
                for shape in shapes {
                    shape.draw(out)?;
                    writeln!(out)?;
                }
            }
            Shapes::Explicit(shapes) => {
                for shape in shapes {
                    explicit::draw_self(shape.as_ref(), out)?;
                    writeln!(out)?;
                }
            }
            Shapes::Native(shapes) => {
                for shape in shapes {
                    shape.draw(out)?;
                    writeln!(out)?;
                }
            }
        }
        Ok(())
    }

    pub fn render_to_string(&self) -> Result<String, DrawError> {
        let mut buffer: Vec<u8> = Vec::new();
        self.render(&mut buffer)?;
        // every token is ASCII
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

// =============================================================================
// Side-by-side comparison
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyReport {
    pub strategy: Strategy,
    pub output: String,
}

/// Renders the same shapes under every strategy.
pub fn compare_strategies(kinds: &[ShapeKind]) -> Result<Vec<StrategyReport>, DrawError> {
    let mut reports = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        let output = Gallery::new(strategy, kinds).render_to_string()?;
        reports.push(StrategyReport { strategy, output });
    }
    Ok(reports)
}

pub fn reports_agree(reports: &[StrategyReport]) -> bool {
    reports.iter().map(|report| &report.output).all_equal()
}
