//! Visualization module for titration curves
//!
//! This module renders session data with the `plotters` library. It is a
//! presentation collaborator: it reads samples, the equivalence volume
//! and the [`ColorBand`](crate::chemistry::ColorBand) category from the
//! core and turns them into pixels. Nothing in here flows back into the
//! chemistry or the session.
//!
//! # Organization
//!
//! - **config**: shared plot configuration ([`PlotConfig`]) and the
//!   band-to-color mapping
//! - **curve**: titration curve plots (single and comparison)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use titrate_rs::output::visualization::{plot_titration_curve, PlotConfig};
//!
//! let driver = TickDriver::default();
//! driver.run_to_completion(&mut session)?;
//!
//! // Plot with defaults (pH axis 0..14, equivalence marker on)
//! plot_titration_curve(&session, "curve.png", None)?;
//!
//! // Or with a custom config
//! let mut config = PlotConfig::titration_curve("CH3COOH vs NaOH");
//! config.show_equivalence = false;
//! plot_titration_curve(&session, "curve.svg", Some(&config))?;
//! ```

pub mod config;
pub mod curve;

pub use config::{band_color, IntoOptionalTitle, PlotConfig, NO_TITLE};
pub use curve::{plot_titration_curve, plot_titration_curves_comparison};
