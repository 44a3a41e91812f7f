//! Export module for titration curves
//!
//! # Available formats
//!
//! | Format | Module  |
//! |--------|---------|
//! | CSV    | [`csv`] |
//!
//! CSV was chosen first because every downstream tool students actually
//! use (spreadsheets, pandas, MATLAB) reads it without ceremony.
//!
//! # Usage example
//!
//! ```rust,ignore
//! use titrate_rs::output::export::{export_curve_csv, CsvConfig, CsvMetadata};
//!
//! // Bare export
//! export_curve_csv(session.samples(), "curve.csv", None)?;
//!
//! // With a metadata header describing the run
//! let config = CsvConfig::default()
//!     .with_metadata(CsvMetadata::from_session(&session));
//! export_curve_csv(session.samples(), "curve.csv", Some(&config))?;
//! ```

pub mod csv;

pub use csv::{export_curve_csv, export_curves_multi_csv, CsvConfig, CsvMetadata};
