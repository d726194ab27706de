//! Solid Shapes CLI - command-line demonstrations of the shape area model
//!
//! CDD Principle: Application Layer - CLI coordinates user interactions with domain services
//! - Translates user commands to domain operations
//! - Handles external concerns like file I/O, process exit codes, and terminal output

use clap::{Parser, Subcommand, ValueEnum};
use solid_shapes::{
    check_substitutability, liskov_demo, LinkedSquare, MutableRectangle, OutputFormat,
    ReportFormatter, ReportOptions, ShapeCatalog, ShapeResult, ShapeWorkbench,
};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

/// Solid Shapes - open/closed area aggregation and substitutability demos
#[derive(Parser)]
#[command(name = "solid-shapes")]
#[command(version)]
#[command(about = "Shape area model demonstrating open/closed dispatch and substitutability")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Shape catalog file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sum the areas of the shapes in the catalog
    Area {
        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Print only the total
        #[arg(long)]
        no_breakdown: bool,
    },

    /// Show why a linked square cannot stand in for a resizable rectangle
    Liskov {
        /// Width requested through the rectangle capability
        #[arg(long, default_value_t = 5.0)]
        width: f64,

        /// Height requested through the rectangle capability
        #[arg(long, default_value_t = 4.0)]
        height: f64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Validate a shape catalog file
    ValidateConfig {
        /// Catalog file to validate
        config_file: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, ValueEnum, PartialEq)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run_command(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run_command(cli: Cli) -> ShapeResult<i32> {
    let use_colors = !cli.no_color;

    match cli.command {
        Commands::Area {
            format,
            no_breakdown,
        } => run_area(cli.config, format, !no_breakdown, use_colors),
        Commands::Liskov {
            width,
            height,
            format,
        } => run_liskov(width, height, format, use_colors),
        Commands::ValidateConfig { config_file } => {
            run_validate_config(config_file.or(cli.config))
        }
    }
}

/// Explicit path, then a default file in the working directory, then the built-in catalog
fn resolve_catalog(config_path: Option<PathBuf>, search_dir: &Path) -> ShapeResult<ShapeCatalog> {
    if let Some(path) = config_path {
        return ShapeCatalog::load_from_file(path);
    }

    match ShapeCatalog::discover_in(search_dir) {
        Some((path, catalog)) => {
            tracing::debug!("using catalog {}", path.display());
            Ok(catalog)
        }
        None => {
            tracing::debug!("no catalog file found, using the built-in demonstration shapes");
            Ok(ShapeCatalog::default())
        }
    }
}

fn run_area(
    config_path: Option<PathBuf>,
    format: OutputFormatArg,
    show_breakdown: bool,
    use_colors: bool,
) -> ShapeResult<i32> {
    let catalog = resolve_catalog(config_path, Path::new("."))?;
    let workbench = ShapeWorkbench::new_with_catalog(catalog)?;

    let formatter = ReportFormatter::new(ReportOptions {
        use_colors,
        precision: workbench.catalog().precision,
        show_breakdown,
    });
    let workbench = workbench.with_report_formatter(formatter);
    println!("{}", workbench.render(format.into())?);

    Ok(0)
}

fn run_liskov(width: f64, height: f64, format: OutputFormatArg, use_colors: bool) -> ShapeResult<i32> {
    let formatter = ReportFormatter::new(ReportOptions {
        use_colors,
        ..Default::default()
    });

    let (expected, rectangle_area, square_area) = liskov_demo(width, height)?;

    // Strictly below both requested sides, so it never matches one and never overflows
    let trial_side = width.min(height) / 2.0;
    let mut rectangle = MutableRectangle::new(width, height)?;
    let mut square = LinkedSquare::new(width)?;
    let reports = vec![
        check_substitutability(&mut rectangle, trial_side)?,
        check_substitutability(&mut square, trial_side)?,
    ];

    if format == OutputFormatArg::Human {
        println!("Requested {} x {} through ResizableRectangle", width, height);
        println!("  mutable rectangle: expected {}, actual {}", expected, rectangle_area);
        println!("  linked square:     expected {}, actual {}", expected, square_area);
        println!();
    }
    println!("{}", formatter.format_substitution(&reports, format.into())?);

    if reports[0].is_substitutable() {
        Ok(0)
    } else {
        Ok(1)
    }
}

fn run_validate_config(config_path: Option<PathBuf>) -> ShapeResult<i32> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from("solid_shapes.yaml"));

    println!("Validating catalog: {}", config_path.display());

    match ShapeCatalog::load_from_file(&config_path) {
        Ok(catalog) => {
            println!("Catalog is valid");
            println!("  Shapes: {}", catalog.shapes.len());
            for (kind, count) in catalog.kind_counts() {
                println!("    {}: {}", kind, count);
            }
            println!("  Precision: {}", catalog.precision);
            Ok(0)
        }
        Err(e) => {
            eprintln!("Catalog validation failed: {}", e);
            Ok(1)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
