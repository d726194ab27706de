//! Area aggregation over heterogeneous shapes
//!
//! CDD Principle: Domain Services - The calculator reduces any shape collection to a total
//! - Dispatch goes through the `Shape` capability only, never through concrete types
//! - New shape variants need no change here
//! - `AreaSummary` is the aggregate handed to report formatters

use crate::domain::shapes::Shape;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sum the areas of `shapes`. An empty sequence sums to zero.
pub fn total_area<I>(shapes: I) -> f64
where
    I: IntoIterator,
    I::Item: Shape,
{
    shapes
        .into_iter()
        .fold(0.0, |total, shape| total + shape.area())
}

/// One line of an area breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaEntry {
    /// Position in the input sequence (0-indexed)
    pub index: usize,
    /// Label reported by the shape
    pub name: String,
    pub area: f64,
}

/// Totals and per-shape breakdown for one aggregation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaSummary {
    pub entries: Vec<AreaEntry>,
    pub total_area: f64,
    pub shape_count: usize,
    /// When the summary was produced
    pub generated_at: DateTime<Utc>,
}

impl AreaSummary {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest single contribution, first one wins on ties
    pub fn largest(&self) -> Option<&AreaEntry> {
        self.entries
            .iter()
            .fold(None, |best: Option<&AreaEntry>, entry| match best {
                Some(current) if current.area >= entry.area => Some(current),
                _ => Some(entry),
            })
    }
}

/// Area aggregator
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaCalculator;

impl AreaCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Total area of an owned, heterogeneous shape list
    pub fn total_area(&self, shapes: &[Box<dyn Shape>]) -> f64 {
        let total = total_area(shapes);
        tracing::debug!(shapes = shapes.len(), total, "computed total area");
        total
    }

    /// Per-shape breakdown plus total, in input order
    pub fn summarize(&self, shapes: &[Box<dyn Shape>]) -> AreaSummary {
        let entries: Vec<AreaEntry> = shapes
            .iter()
            .enumerate()
            .map(|(index, shape)| AreaEntry {
                index,
                name: shape.name().to_string(),
                area: shape.area(),
            })
            .collect();

        AreaSummary {
            shape_count: entries.len(),
            total_area: self.total_area(shapes),
            entries,
            generated_at: Utc::now(),
        }
    }
}
