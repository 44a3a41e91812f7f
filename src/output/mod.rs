//! Output module for titration results
//!
//! This module turns session data into files:
//! - **Visualization**: PNG/SVG curve plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots and graphics
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── curve.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Design Philosophy
//!
//! The output layer is a one-way consumer of the core. It reads samples,
//! the equivalence volume and the color band category; it never mutates
//! a session and the core never learns about pixels or file formats.
//! This is also where the [`ColorBand`](crate::chemistry::ColorBand)
//! enum finally becomes an actual RGB value.
//!
//! # Quick Start
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use titrate_rs::output::visualization::plot_titration_curve;
//!
//! plot_titration_curve(&session, "curve.png", None)?;
//! ```
//!
//! ## CSV Export
//!
//! ```rust,ignore
//! use titrate_rs::output::export::export_curve_csv;
//!
//! export_curve_csv(session.samples(), "curve.csv", None)?;
//! ```

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use export::{export_curve_csv, export_curves_multi_csv, CsvConfig, CsvMetadata};

pub use visualization::{
    band_color,
    plot_titration_curve,
    plot_titration_curves_comparison,
    PlotConfig,
};
