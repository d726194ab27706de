//! Shape catalog loading and management
//!
//! Architecture: Anti-Corruption Layer - The catalog translates external YAML into validated shapes
//! - Raw YAML entries are tagged specifications, turned into domain shapes on demand
//! - The built-in catalog is the classic rectangle/circle/triangle demonstration
//! - Loading validates every entry so bad measurements surface before any aggregation

use crate::domain::error::{ShapeError, ShapeResult};
use crate::domain::shapes::{Circle, Rectangle, Shape, Square, Triangle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File names searched, in order, when no catalog path is given
pub const DEFAULT_CATALOG_FILES: [&str; 3] =
    ["solid_shapes.yaml", "solid_shapes.yml", ".solid_shapes.yaml"];

const CATALOG_VERSION: &str = "1.0";

/// A list of shapes to aggregate plus presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeCatalog {
    /// Catalog format version
    pub version: String,
    /// Decimal places used in human-readable output
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// Shapes in aggregation order
    #[serde(default)]
    pub shapes: Vec<ShapeSpec>,
}

/// Serializable description of one shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeSpec {
    Rectangle { width: f64, height: f64 },
    Circle { radius: f64 },
    Triangle { base: f64, height: f64 },
    Square { side: f64 },
}

impl ShapeSpec {
    /// Build the validated shape this entry describes
    pub fn build(&self) -> ShapeResult<Box<dyn Shape>> {
        let shape: Box<dyn Shape> = match *self {
            Self::Rectangle { width, height } => Box::new(Rectangle::new(width, height)?),
            Self::Circle { radius } => Box::new(Circle::new(radius)?),
            Self::Triangle { base, height } => Box::new(Triangle::new(base, height)?),
            Self::Square { side } => Box::new(Square::new(side)?),
        };
        Ok(shape)
    }

    /// Kind name as written in YAML
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rectangle { .. } => "rectangle",
            Self::Circle { .. } => "circle",
            Self::Triangle { .. } => "triangle",
            Self::Square { .. } => "square",
        }
    }
}

impl ShapeCatalog {
    /// Load a catalog from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ShapeResult<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            ShapeError::config(format!(
                "Failed to read catalog file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let catalog: Self = serde_yaml::from_str(&contents).map_err(|e| {
            ShapeError::config(format!(
                "Failed to parse catalog file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        catalog.validate()?;
        tracing::debug!(
            path = %path.as_ref().display(),
            shapes = catalog.shapes.len(),
            "loaded shape catalog"
        );
        Ok(catalog)
    }

    /// Load a catalog from YAML text
    pub fn load_from_str(content: &str) -> ShapeResult<Self> {
        let catalog: Self = serde_yaml::from_str(content)
            .map_err(|e| ShapeError::config(format!("Failed to parse catalog: {e}")))?;

        catalog.validate()?;
        Ok(catalog)
    }

    /// Look for one of the default catalog files in `dir`.
    ///
    /// Returns the first one that loads; files that fail to load are logged and skipped.
    pub fn discover_in<P: AsRef<Path>>(dir: P) -> Option<(PathBuf, Self)> {
        for name in DEFAULT_CATALOG_FILES {
            let candidate = dir.as_ref().join(name);
            if !candidate.exists() {
                continue;
            }

            match Self::load_from_file(&candidate) {
                Ok(catalog) => return Some((candidate, catalog)),
                Err(e) => {
                    tracing::warn!("Failed to load catalog from {}: {}", candidate.display(), e);
                }
            }
        }
        None
    }

    /// The demonstration catalog: Rectangle(5, 4), Circle(3), Triangle(6, 4)
    pub fn with_defaults() -> Self {
        Self {
            version: CATALOG_VERSION.to_string(),
            precision: default_precision(),
            shapes: vec![
                ShapeSpec::Rectangle {
                    width: 5.0,
                    height: 4.0,
                },
                ShapeSpec::Circle { radius: 3.0 },
                ShapeSpec::Triangle {
                    base: 6.0,
                    height: 4.0,
                },
            ],
        }
    }

    /// Check the version and that every entry builds
    pub fn validate(&self) -> ShapeResult<()> {
        if self.version != CATALOG_VERSION {
            return Err(ShapeError::config(format!(
                "Unsupported catalog version '{}', expected '{}'",
                self.version, CATALOG_VERSION
            )));
        }

        for spec in &self.shapes {
            spec.build()?;
        }

        Ok(())
    }

    /// Build every entry, in order
    pub fn build_shapes(&self) -> ShapeResult<Vec<Box<dyn Shape>>> {
        self.shapes.iter().map(ShapeSpec::build).collect()
    }

    /// Number of entries per kind, in first-seen order
    pub fn kind_counts(&self) -> Vec<(&'static str, usize)> {
        let mut counts: Vec<(&'static str, usize)> = Vec::new();
        for spec in &self.shapes {
            match counts.iter().position(|(kind, _)| *kind == spec.kind()) {
                Some(i) => counts[i].1 += 1,
                None => counts.push((spec.kind(), 1)),
            }
        }
        counts
    }

    /// Serialize back to YAML
    pub fn to_yaml(&self) -> ShapeResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ShapeError::config(format!("Failed to serialize catalog: {e}")))
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn default_precision() -> usize {
    2
}

/// Catalog builder for programmatic construction
pub struct CatalogBuilder {
    catalog: ShapeCatalog,
}

impl CatalogBuilder {
    /// Start from an empty catalog
    pub fn new() -> Self {
        Self {
            catalog: ShapeCatalog {
                version: CATALOG_VERSION.to_string(),
                precision: default_precision(),
                shapes: Vec::new(),
            },
        }
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.catalog.precision = precision;
        self
    }

    pub fn shape(mut self, spec: ShapeSpec) -> Self {
        self.catalog.shapes.push(spec);
        self
    }

    /// Validate and return the catalog
    pub fn build(self) -> ShapeResult<ShapeCatalog> {
        self.catalog.validate()?;
        Ok(self.catalog)
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::AreaCalculator;
    use std::f64::consts::PI;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
version: "1.0"
precision: 3
shapes:
  - kind: rectangle
    width: 5.0
    height: 4.0
  - kind: circle
    radius: 3.0
  - kind: triangle
    base: 6.0
    height: 4.0
  - kind: square
    side: 4.0
"#;

    #[test]
    fn test_default_catalog() {
        let catalog = ShapeCatalog::default();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.shapes.len(), 3);
        assert_eq!(catalog.precision, 2);

        let shapes = catalog.build_shapes().unwrap();
        let total = AreaCalculator::new().total_area(&shapes);
        assert!((total - (32.0 + 9.0 * PI)).abs() < 1e-6);
    }

    #[test]
    fn test_load_from_str() {
        let catalog = ShapeCatalog::load_from_str(SAMPLE).unwrap();
        assert_eq!(catalog.precision, 3);
        assert_eq!(catalog.shapes[3], ShapeSpec::Square { side: 4.0 });
        assert_eq!(
            catalog.kind_counts(),
            vec![("rectangle", 1), ("circle", 1), ("triangle", 1), ("square", 1)]
        );
    }

    #[test]
    fn test_precision_and_shapes_default() {
        let catalog = ShapeCatalog::load_from_str("version: \"1.0\"\n").unwrap();
        assert_eq!(catalog.precision, 2);
        assert!(catalog.shapes.is_empty());
        assert!(catalog.build_shapes().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_dimension_surfaces_on_load() {
        let yaml = "version: \"1.0\"\nshapes:\n  - kind: circle\n    radius: -2.0\n";
        let err = ShapeCatalog::load_from_str(yaml).unwrap_err();
        assert!(err.is_invalid_dimension());
    }

    #[test]
    fn test_unknown_kind_and_missing_fields() {
        let unknown = "version: \"1.0\"\nshapes:\n  - kind: hexagon\n    side: 1.0\n";
        assert!(matches!(
            ShapeCatalog::load_from_str(unknown),
            Err(ShapeError::Configuration { .. })
        ));

        let missing = "version: \"1.0\"\nshapes:\n  - kind: rectangle\n    width: 1.0\n";
        assert!(matches!(
            ShapeCatalog::load_from_str(missing),
            Err(ShapeError::Configuration { .. })
        ));
    }

    #[test]
    fn test_version_check() {
        let err = ShapeCatalog::load_from_str("version: \"2.0\"\n").unwrap_err();
        assert!(err.to_string().contains("Unsupported catalog version"));
    }

    #[test]
    fn test_load_from_file_and_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.yaml");

        let catalog = CatalogBuilder::new()
            .precision(4)
            .shape(ShapeSpec::Square { side: 2.0 })
            .shape(ShapeSpec::Triangle {
                base: 3.0,
                height: 2.0,
            })
            .build()
            .unwrap();
        fs::write(&path, catalog.to_yaml().unwrap()).unwrap();

        let loaded = ShapeCatalog::load_from_file(&path).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_missing_file() {
        let err = ShapeCatalog::load_from_file("/nonexistent/catalog.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
    }

    #[test]
    fn test_builder_rejects_bad_shape() {
        let result = CatalogBuilder::new()
            .shape(ShapeSpec::Rectangle {
                width: 0.0,
                height: 1.0,
            })
            .build();
        assert!(result.unwrap_err().is_invalid_dimension());
    }

    #[test]
    fn test_discover_in() {
        let temp_dir = TempDir::new().unwrap();
        assert!(ShapeCatalog::discover_in(temp_dir.path()).is_none());

        // A broken first candidate is skipped in favour of the next one
        fs::write(temp_dir.path().join("solid_shapes.yaml"), "version: [").unwrap();
        fs::write(temp_dir.path().join("solid_shapes.yml"), SAMPLE).unwrap();

        let (path, catalog) = ShapeCatalog::discover_in(temp_dir.path()).unwrap();
        assert!(path.ends_with("solid_shapes.yml"));
        assert_eq!(catalog.shapes.len(), 4);
    }
}
