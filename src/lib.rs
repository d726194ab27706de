//! Solid Shapes - shape area model built on a single `Shape` capability
//!
//! Architecture: Clean Architecture - Library interface serves as the application layer
//! - Pure domain values (shapes, substitutability checks) with no I/O
//! - Aggregation depends only on the capability, so new variants plug in untouched
//! - Catalog loading and report formatting live at the edges

pub mod calculator;
pub mod config;
pub mod domain;
pub mod report;

// Re-export main types for convenient access
pub use domain::{
    check_substitutability, resize_and_measure, Circle, LinkedSquare, MutableRectangle,
    Rectangle, ResizableRectangle, Shape, ShapeError, ShapeResult, Square, SubstitutionReport,
    Triangle,
};

pub use calculator::{total_area, AreaCalculator, AreaEntry, AreaSummary};

pub use config::{CatalogBuilder, ShapeCatalog, ShapeSpec, DEFAULT_CATALOG_FILES};

pub use report::{OutputFormat, ReportFormatter, ReportOptions};

use std::path::Path;

/// Loads a catalog, aggregates it and formats the result
pub struct ShapeWorkbench {
    catalog: ShapeCatalog,
    shapes: Vec<Box<dyn Shape>>,
    calculator: AreaCalculator,
    report_formatter: ReportFormatter,
}

impl ShapeWorkbench {
    /// Create a workbench over the given catalog
    pub fn new_with_catalog(catalog: ShapeCatalog) -> ShapeResult<Self> {
        let shapes = catalog.build_shapes()?;
        let report_formatter = ReportFormatter::new(ReportOptions {
            precision: catalog.precision,
            ..Default::default()
        });

        Ok(Self {
            catalog,
            shapes,
            calculator: AreaCalculator::new(),
            report_formatter,
        })
    }

    /// Create a workbench over the demonstration catalog
    pub fn new() -> ShapeResult<Self> {
        Self::new_with_catalog(ShapeCatalog::default())
    }

    /// Create a workbench loading the catalog from file
    pub fn from_catalog_file<P: AsRef<Path>>(path: P) -> ShapeResult<Self> {
        let catalog = ShapeCatalog::load_from_file(path)?;
        Self::new_with_catalog(catalog)
    }

    /// Set custom report formatter
    pub fn with_report_formatter(mut self, formatter: ReportFormatter) -> Self {
        self.report_formatter = formatter;
        self
    }

    /// Add a shape that is not part of the catalog
    pub fn add_shape(&mut self, shape: Box<dyn Shape>) {
        self.shapes.push(shape);
    }

    /// Catalog the workbench was built from
    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    pub fn shapes(&self) -> &[Box<dyn Shape>] {
        &self.shapes
    }

    pub fn total_area(&self) -> f64 {
        self.calculator.total_area(&self.shapes)
    }

    pub fn summarize(&self) -> AreaSummary {
        self.calculator.summarize(&self.shapes)
    }

    /// Summarize and format in one step
    pub fn render(&self, format: OutputFormat) -> ShapeResult<String> {
        self.report_formatter.format_summary(&self.summarize(), format)
    }
}

/// Convenience function: total area of a catalog file
pub fn total_area_of_file<P: AsRef<Path>>(path: P) -> ShapeResult<f64> {
    Ok(ShapeWorkbench::from_catalog_file(path)?.total_area())
}

/// Liskov demonstration: resize a conforming rectangle and a linked square to
/// `width` x `height` through the shared capability.
///
/// Returns `(expected, rectangle_area, linked_square_area)`.
pub fn liskov_demo(width: f64, height: f64) -> ShapeResult<(f64, f64, f64)> {
    let mut rectangle = MutableRectangle::new(1.0, 1.0)?;
    let mut square = LinkedSquare::new(1.0)?;

    let rectangle_area = resize_and_measure(&mut rectangle, width, height)?;
    let square_area = resize_and_measure(&mut square, width, height)?;

    Ok((width * height, rectangle_area, square_area))
}
