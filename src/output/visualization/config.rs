//! Plot configuration shared across visualization functions
//!
//! This module defines the configuration structure used by the titration
//! curve plots, plus the mapping from the core's [`ColorBand`] category
//! to concrete plot colors. That mapping lives here on purpose: the
//! chemistry engine emits the enum only and never sees an RGB value.

use plotters::prelude::*;

use crate::chemistry::ColorBand;

/// Explicit "no title" marker for plot factory methods
///
/// ```rust,ignore
/// let config = PlotConfig::titration_curve(NO_TITLE);
/// ```
pub const NO_TITLE: Option<&str> = None;

/// Configuration for customizing titration plots
///
/// # Example
///
/// ```rust,ignore
/// use titrate_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::titration_curve("Weak Acid vs NaOH");
/// config.line_color = BLUE;
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: empty)
    pub title: String,

    /// X-axis label (default: "Volume of Base Added (mL)")
    pub xlabel: String,

    /// Y-axis label (default: "pH")
    pub ylabel: String,

    /// Curve color for single-curve plots (default: BLUE)
    pub line_color: RGBColor,

    /// Optional colors for comparison plots (one per curve)
    ///
    /// If None, uses the default palette: \[BLUE, RED, GREEN, MAGENTA, ...\]
    pub curve_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,

    /// Draw the dashed vertical equivalence marker (default: true)
    pub show_equivalence: bool,

    /// Color of the equivalence marker (default: RED)
    pub equivalence_color: RGBColor,

    /// Mark the most recent sample with a filled circle (default: true)
    pub mark_current_point: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: String::new(),
            xlabel: "Volume of Base Added (mL)".to_string(),
            ylabel: "pH".to_string(),
            line_color: BLUE,
            curve_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
            show_equivalence: true,
            equivalence_color: RED,
            mark_current_point: true,
        }
    }
}

impl PlotConfig {
    /// Configuration for a single titration curve
    pub fn titration_curve(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title.into_optional_title().unwrap_or_default(),
            ..Default::default()
        }
    }

    /// Configuration for overlaid curves (one per regime or run)
    ///
    /// The current-point marker is off by default here since several
    /// curves would each want one.
    pub fn comparison(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title.into_optional_title().unwrap_or_default(),
            mark_current_point: false,
            ..Default::default()
        }
    }

    /// Builder pattern: set the comparison palette
    pub fn with_curve_colors(mut self, colors: Vec<RGBColor>) -> Self {
        self.curve_colors = Some(colors);
        self
    }

    /// Color for curve `index` in a comparison plot
    ///
    /// Falls back to the built-in palette when no custom palette is set
    /// or the index runs past it.
    pub fn get_curve_color(&self, index: usize) -> RGBColor {
        if let Some(colors) = &self.curve_colors {
            if let Some(color) = colors.get(index) {
                return *color;
            }
        }
        DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
    }
}

/// Built-in palette for comparison plots
const DEFAULT_PALETTE: [RGBColor; 6] = [
    BLUE,
    RED,
    GREEN,
    MAGENTA,
    CYAN,
    RGBColor(255, 165, 0), // Orange
];

/// Map a pH color band to its plot color
///
/// Red shades for acidic solutions, purple near neutral, blue shades for
/// basic solutions.
pub fn band_color(band: ColorBand) -> RGBColor {
    match band {
        ColorBand::StrongAcid => RGBColor(255, 127, 127),
        ColorBand::WeakAcid => RGBColor(255, 185, 151),
        ColorBand::Neutral => RGBColor(218, 112, 214),
        ColorBand::WeakBase => RGBColor(161, 202, 241),
        ColorBand::StrongBase => RGBColor(127, 179, 255),
    }
}

/// Helper trait to accept `&str`, `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(IntoOptionalTitle::into_optional_title)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
