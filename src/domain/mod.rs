//! Domain layer for the shape area model
//!
//! CDD Principle: Domain Model - Pure value types and the capability they share
//! - Shapes know their own measurements and area formula
//! - Construction validates measurements so every live shape is physical
//! - Nothing here performs I/O

pub mod error;
pub mod shapes;
pub mod substitution;

// Re-export main domain types for convenience
pub use error::{ShapeError, ShapeResult};
pub use shapes::{Circle, Rectangle, Shape, Square, Triangle};
pub use substitution::{
    check_substitutability, resize_and_measure, LinkedSquare, MutableRectangle,
    ResizableRectangle, SubstitutionReport,
};
