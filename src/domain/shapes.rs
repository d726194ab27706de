//! Shape capability and the concrete shape variants
//!
//! Architecture: Value Objects - Every variant owns its measurements and its area formula
//! - Measurements are validated once at construction and never change afterwards
//! - A shape whose area does not fit in an `f64` is rejected like a bad measurement
//! - Callers depend on the `Shape` capability, never on a concrete variant
//! - Square is its own variant, unrelated to Rectangle

use crate::domain::error::{positive, ShapeError, ShapeResult};
use std::f64::consts::PI;

/// Anything that can compute its own area
pub trait Shape {
    /// Area of the shape; pure and never negative
    fn area(&self) -> f64;

    /// Label used in reports
    fn name(&self) -> &str {
        "shape"
    }
}

impl<S: Shape + ?Sized> Shape for &S {
    fn area(&self) -> f64 {
        (**self).area()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn area(&self) -> f64 {
        (**self).area()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Create a rectangle, rejecting non-positive measurements
    pub fn new(width: f64, height: f64) -> ShapeResult<Self> {
        measurable(Self {
            width: positive("width", width)?,
            height: positive("height", height)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn name(&self) -> &str {
        "rectangle"
    }
}

/// Circle described by its radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Create a circle, rejecting a non-positive radius
    pub fn new(radius: f64) -> ShapeResult<Self> {
        measurable(Self {
            radius: positive("radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    fn name(&self) -> &str {
        "circle"
    }
}

/// Triangle described by base and perpendicular height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    base: f64,
    height: f64,
}

impl Triangle {
    /// Create a triangle, rejecting non-positive measurements
    pub fn new(base: f64, height: f64) -> ShapeResult<Self> {
        measurable(Self {
            base: positive("base", base)?,
            height: positive("height", height)?,
        })
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        (self.base * self.height) / 2.0
    }

    fn name(&self) -> &str {
        "triangle"
    }
}

/// Square with a single side length
///
/// Not a Rectangle: it has one degree of freedom, so resizing it can never
/// disturb a second measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    /// Create a square, rejecting a non-positive side
    pub fn new(side: f64) -> ShapeResult<Self> {
        measurable(Self {
            side: positive("side", side)?,
        })
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    /// Change the side length; on error the square is left untouched
    pub fn set_side(&mut self, side: f64) -> ShapeResult<()> {
        *self = Self::new(side)?;
        Ok(())
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }

    fn name(&self) -> &str {
        "square"
    }
}

/// Reject shapes whose area overflows to infinity
fn measurable<S: Shape>(shape: S) -> ShapeResult<S> {
    let area = shape.area();
    if area.is_finite() {
        Ok(shape)
    } else {
        Err(ShapeError::invalid_dimension("area", area))
    }
}
