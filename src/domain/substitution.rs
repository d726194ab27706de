//! Substitutability of resizable rectangles
//!
//! A caller holding a `ResizableRectangle` expects `set_width` to leave the
//! height alone and `set_height` to leave the width alone. `MutableRectangle`
//! keeps that promise. `LinkedSquare` is the counter-example: it forces both
//! sides equal on every update, so code written against the capability computes
//! the wrong area. It is kept here so the breakage stays observable and tested.

use crate::domain::error::{positive, ShapeResult};
use serde::Serialize;

/// A rectangle whose sides can be changed one at a time
pub trait ResizableRectangle {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Change the width. Must not touch the height.
    fn set_width(&mut self, width: f64) -> ShapeResult<()>;

    /// Change the height. Must not touch the width.
    fn set_height(&mut self, height: f64) -> ShapeResult<()>;

    fn area(&self) -> f64 {
        self.width() * self.height()
    }

    fn name(&self) -> &str;
}

/// Rectangle with independent, mutable sides
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutableRectangle {
    width: f64,
    height: f64,
}

impl MutableRectangle {
    pub fn new(width: f64, height: f64) -> ShapeResult<Self> {
        Ok(Self {
            width: positive("width", width)?,
            height: positive("height", height)?,
        })
    }
}

impl ResizableRectangle for MutableRectangle {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_width(&mut self, width: f64) -> ShapeResult<()> {
        self.width = positive("width", width)?;
        Ok(())
    }

    fn set_height(&mut self, height: f64) -> ShapeResult<()> {
        self.height = positive("height", height)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "mutable rectangle"
    }
}

/// Square posing as a rectangle by linking both sides.
///
/// Breaks `ResizableRectangle`: every setter also rewrites the other side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkedSquare {
    width: f64,
    height: f64,
}

impl LinkedSquare {
    pub fn new(side: f64) -> ShapeResult<Self> {
        let side = positive("side", side)?;
        Ok(Self {
            width: side,
            height: side,
        })
    }
}

impl ResizableRectangle for LinkedSquare {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_width(&mut self, width: f64) -> ShapeResult<()> {
        let width = positive("width", width)?;
        self.width = width;
        self.height = width;
        Ok(())
    }

    fn set_height(&mut self, height: f64) -> ShapeResult<()> {
        let height = positive("height", height)?;
        self.width = height;
        self.height = height;
        Ok(())
    }

    fn name(&self) -> &str {
        "linked square"
    }
}

/// Set width then height through the capability and return the resulting area.
///
/// A conforming implementation returns `width * height`. Both sides are
/// validated before either setter runs, so a rejected call leaves `shape` as it was.
pub fn resize_and_measure(
    shape: &mut dyn ResizableRectangle,
    width: f64,
    height: f64,
) -> ShapeResult<f64> {
    let width = positive("width", width)?;
    let height = positive("height", height)?;

    shape.set_width(width)?;
    shape.set_height(height)?;
    let area = shape.area();
    tracing::debug!(
        shape = shape.name(),
        width,
        height,
        area,
        "resized through ResizableRectangle"
    );
    Ok(area)
}

/// Outcome of checking a `ResizableRectangle` for setter side effects
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstitutionReport {
    pub shape: String,
    /// Height was unchanged after `set_width`
    pub width_update_isolated: bool,
    /// Width was unchanged after `set_height`
    pub height_update_isolated: bool,
}

impl SubstitutionReport {
    /// Whether the shape can stand in for any `ResizableRectangle`
    pub fn is_substitutable(&self) -> bool {
        self.width_update_isolated && self.height_update_isolated
    }
}

/// Set the width to `trial_side` and the height to half of it, checking after
/// each call that the other side kept its value.
///
/// `trial_side` should differ from both current sides, otherwise a linked update
/// is invisible. Halving keeps the second value finite for any valid side.
pub fn check_substitutability(
    shape: &mut dyn ResizableRectangle,
    trial_side: f64,
) -> ShapeResult<SubstitutionReport> {
    let trial_width = positive("width", trial_side)?;
    let trial_height = positive("height", trial_side / 2.0)?;

    let height_before = shape.height();
    shape.set_width(trial_width)?;
    let width_update_isolated = shape.height() == height_before;

    let width_before = shape.width();
    shape.set_height(trial_height)?;
    let height_update_isolated = shape.width() == width_before;

    let report = SubstitutionReport {
        shape: shape.name().to_string(),
        width_update_isolated,
        height_update_isolated,
    };

    if !report.is_substitutable() {
        tracing::debug!(shape = %report.shape, "setter changed a side it was not asked to change");
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_resize_keeps_expected_area() {
        let mut rect = MutableRectangle::new(1.0, 1.0).unwrap();
        let area = resize_and_measure(&mut rect, 5.0, 4.0).unwrap();
        assert_eq!(area, 20.0);
    }

    #[test]
    fn test_linked_square_regression() {
        // Expected 5 * 4 = 20, but the second setter drags the width down to 4
        let mut square = LinkedSquare::new(1.0).unwrap();
        let area = resize_and_measure(&mut square, 5.0, 4.0).unwrap();
        assert_eq!(area, 16.0);
        assert_ne!(area, 20.0);
        assert_eq!(square.width(), 4.0);
        assert_eq!(square.height(), 4.0);
    }

    #[test]
    fn test_check_substitutability() {
        let mut rect = MutableRectangle::new(5.0, 4.0).unwrap();
        let report = check_substitutability(&mut rect, 7.0).unwrap();
        assert!(report.is_substitutable());
        assert_eq!(report.shape, "mutable rectangle");

        let mut square = LinkedSquare::new(5.0).unwrap();
        let report = check_substitutability(&mut square, 7.0).unwrap();
        assert!(!report.width_update_isolated);
        assert!(!report.height_update_isolated);
        assert!(!report.is_substitutable());
    }

    #[test]
    fn test_square_variant_has_no_linked_fields() {
        // The independent Square variant has one field, so its setter is always consistent
        let mut square = crate::domain::shapes::Square::new(4.0).unwrap();
        square.set_side(5.0).unwrap();
        assert_eq!(crate::Shape::area(&square), 25.0);
        square.set_side(4.0).unwrap();
        assert_eq!(crate::Shape::area(&square), 16.0);
    }

    #[test]
    fn test_setters_validate() {
        let mut rect = MutableRectangle::new(5.0, 4.0).unwrap();
        assert!(rect.set_width(0.0).unwrap_err().is_invalid_dimension());
        assert!(rect.set_height(-1.0).unwrap_err().is_invalid_dimension());
        assert_eq!(ResizableRectangle::area(&rect), 20.0);

        let mut square = LinkedSquare::new(3.0).unwrap();
        assert!(square.set_width(f64::NAN).is_err());
        assert_eq!(square.width(), 3.0);
        assert!(LinkedSquare::new(0.0).is_err());
        assert!(resize_and_measure(&mut square, -1.0, 2.0).is_err());
    }

    #[test]
    fn test_rejected_resize_leaves_shape_untouched() {
        let mut rect = MutableRectangle::new(2.0, 3.0).unwrap();
        let err = resize_and_measure(&mut rect, 9.0, -1.0).unwrap_err();
        assert!(err.is_invalid_dimension());
        assert_eq!(rect.width(), 2.0);
        assert_eq!(rect.height(), 3.0);

        let mut square = LinkedSquare::new(2.0).unwrap();
        assert!(resize_and_measure(&mut square, 9.0, f64::NAN).is_err());
        assert_eq!(square.width(), 2.0);
        assert_eq!(square.height(), 2.0);
    }

    #[test]
    fn test_check_substitutability_with_huge_sides() {
        let mut rect = MutableRectangle::new(1.0, 1.0).unwrap();
        let report = check_substitutability(&mut rect, 1e308).unwrap();
        assert!(report.is_substitutable());
        assert_eq!(rect.width(), 1e308);
        assert_eq!(rect.height(), 5e307);

        let mut square = LinkedSquare::new(1.0).unwrap();
        let report = check_substitutability(&mut square, f64::MAX).unwrap();
        assert!(!report.is_substitutable());
    }

    #[test]
    fn test_check_substitutability_rejects_bad_side_before_mutating() {
        let mut rect = MutableRectangle::new(2.0, 3.0).unwrap();
        assert!(check_substitutability(&mut rect, f64::INFINITY).is_err());
        assert!(check_substitutability(&mut rect, 0.0).is_err());
        assert_eq!(rect.width(), 2.0);
        assert_eq!(rect.height(), 3.0);
    }
}
