//! CSV export for titration curves
//!
//! Writes the sampled curve to CSV (Comma-Separated Values), readable by
//! Excel, pandas, MATLAB and most data analysis tools.
//!
//! # Features
//!
//! - **Simple interface**: export straight from the session's samples
//! - **Metadata support**: optional `#`-comment header describing the run
//! - **Customizable**: delimiter, decimal separator, precision
//! - **Comparison export**: several pH columns over a shared volume axis
//! - **Validation**: rejects empty data, NaN/Inf, mismatched lengths
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use titrate_rs::output::export::export_curve_csv;
//!
//! export_curve_csv(session.samples(), "curve.csv", None)?;
//! ```
//!
//! **Output** (`curve.csv`):
//! ```csv
//! Base Added (mL),pH
//! 0.000000,1.000000
//! 0.100000,1.003461
//! ...
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use titrate_rs::output::export::{export_curve_csv, CsvConfig, CsvMetadata};
//!
//! let config = CsvConfig::default()
//!     .with_metadata(CsvMetadata::from_session(&session));
//!
//! export_curve_csv(session.samples(), "curve.csv", Some(&config))?;
//! ```
//!
//! **Output** (`curve.csv`):
//! ```csv
//! # Titration Curve Data
//! # Generated: 2026-08-08T15:30:00Z
//! # Regime: StrongAcidStrongBase
//! # Acid: 0.1 mol/L x 25 mL
//! # Base: 0.1 mol/L
//! # Equivalence Volume: 25 mL
//! #
//! Base Added (mL),pH
//! 0.000000,1.000000
//! ...
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;

use crate::session::{CurveSample, TitrationSession};

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',        // European CSV
///     precision: 10,         // High precision
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in the header
    pub metadata: Option<CsvMetadata>,

    /// Header for the volume column (default: "Base Added (mL)")
    pub volume_header: String,

    /// Header for the pH column (default: "pH")
    pub ph_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            volume_header: "Base Added (mL)".to_string(),
            ph_header: "pH".to_string(),
        }
    }
}

impl CsvConfig {
    /// Create config with European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Create config with high precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional; only populated fields appear in the header.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Reaction regime name
    pub regime: Option<String>,

    /// Analyte molarity \[mol/L\]
    pub acid_molarity: Option<f64>,

    /// Analyte volume \[mL\]
    pub acid_volume_ml: Option<f64>,

    /// Titrant molarity \[mol/L\]
    pub base_molarity: Option<f64>,

    /// Titrant cap \[mL\]
    pub max_volume_ml: Option<f64>,

    /// Equivalence volume \[mL\]
    pub equivalence_volume_ml: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Capture a session's configuration and equivalence volume
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let metadata = CsvMetadata::from_session(&session);
    /// let config = CsvConfig::default().with_metadata(metadata);
    /// ```
    pub fn from_session(session: &TitrationSession) -> Self {
        let config = session.config();
        Self {
            regime: Some(config.regime.name().to_string()),
            acid_molarity: Some(config.acid_molarity),
            acid_volume_ml: Some(config.acid_volume_ml),
            base_molarity: Some(config.base_molarity),
            max_volume_ml: Some(config.max_volume_ml),
            equivalence_volume_ml: Some(session.equivalence_threshold_ml()),
            custom: Vec::new(),
        }
    }

    /// Add a custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments to file
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# Titration Curve Data")?;

    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(regime) = &metadata.regime {
        writeln!(file, "# Regime: {}", regime)?;
    }

    match (metadata.acid_molarity, metadata.acid_volume_ml) {
        (Some(molarity), Some(volume)) => {
            writeln!(file, "# Acid: {} mol/L x {} mL", molarity, volume)?;
        }
        (Some(molarity), None) => writeln!(file, "# Acid: {} mol/L", molarity)?,
        (None, Some(volume)) => writeln!(file, "# Acid Volume: {} mL", volume)?,
        (None, None) => {}
    }

    if let Some(molarity) = metadata.base_molarity {
        writeln!(file, "# Base: {} mol/L", molarity)?;
    }
    if let Some(cap) = metadata.max_volume_ml {
        writeln!(file, "# Max Volume: {} mL", cap)?;
    }
    if let Some(equivalence) = metadata.equivalence_volume_ml {
        writeln!(file, "# Equivalence Volume: {} mL", equivalence)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    writeln!(file, "#")?;
    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export a titration curve to CSV
///
/// Writes one row per sample: titrant volume, then pH.
///
/// # Arguments
///
/// * `samples` - The session's curve samples
/// * `output_path` - Output file path
/// * `configuration` - Optional CSV configuration (defaults if None)
///
/// # Errors
///
/// - Empty sample sequence
/// - NaN or Inf values
/// - File creation errors
///
/// # Example
///
/// ```rust,ignore
/// export_curve_csv(session.samples(), "curve.csv", None)?;
/// ```
pub fn export_curve_csv(
    samples: &[CurveSample],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    if samples.is_empty() {
        return Err("Empty data: the curve holds no samples".into());
    }

    if samples
        .iter()
        .any(|s| !s.base_volume_ml.is_finite() || !s.ph.is_finite())
    {
        return Err("Invalid data: NaN or Inf detected in curve samples".into());
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    writeln!(
        file,
        "{}{}{}",
        configuration.volume_header, configuration.delimiter, configuration.ph_header
    )?;

    // ============================= Write Data =============================

    for sample in samples {
        writeln!(
            file,
            "{}{}{}",
            format_number(sample.base_volume_ml, configuration),
            configuration.delimiter,
            format_number(sample.ph, configuration)
        )?;
    }

    Ok(())
}

/// Export several titration runs over a shared volume axis
///
/// Writes one volume column followed by one pH column per labelled run.
/// Useful for regime comparisons where every run was dosed on the same
/// schedule.
///
/// # Arguments
///
/// * `volumes` - Shared titrant volume axis \[mL\]
/// * `ph_series` - One pH vector per run, each as long as `volumes`
/// * `labels` - Column label per run
/// * `output_path` - Output file path
/// * `configuration` - Optional CSV configuration
///
/// # Example
///
/// ```rust,ignore
/// export_curves_multi_csv(
///     &volumes,
///     &[strong_ph, weak_ph],
///     &["StrongAcidStrongBase", "WeakAcidStrongBase"],
///     "comparison.csv",
///     None,
/// )?;
/// ```
pub fn export_curves_multi_csv(
    volumes: &[f64],
    ph_series: &[Vec<f64>],
    labels: &[&str],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    if volumes.is_empty() || ph_series.is_empty() {
        return Err("Empty data: volume axis and pH series must not be empty".into());
    }

    if volumes.iter().any(|v| !v.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in volume axis".into());
    }

    if ph_series.len() != labels.len() {
        return Err(format!(
            "Data length mismatch: {} pH series versus {} labels",
            ph_series.len(),
            labels.len()
        )
        .into());
    }

    for (i, series) in ph_series.iter().enumerate() {
        if series.len() != volumes.len() {
            return Err(format!(
                "Series [{}] length mismatch: {} pH values vs {} volumes",
                labels[i],
                series.len(),
                volumes.len()
            )
            .into());
        }

        if series.iter().any(|ph| !ph.is_finite()) {
            return Err(format!("Invalid data: NaN or Inf detected in series {}", labels[i]).into());
        }
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    write!(file, "{}", configuration.volume_header)?;
    for label in labels {
        write!(file, "{}{}", configuration.delimiter, label)?;
    }
    writeln!(file)?;

    // ============================= Write Data =============================

    for (i, volume) in volumes.iter().enumerate() {
        write!(file, "{}", format_number(*volume, configuration))?;

        for series in ph_series {
            write!(
                file,
                "{}{}",
                configuration.delimiter,
                format_number(series[i], configuration)
            )?;
        }
        writeln!(file)?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::ReactionRegime;
    use crate::session::{SessionConfig, TickDriver, TitrationSession};
    use std::fs;
    use tempfile::NamedTempFile;

    fn completed_session() -> TitrationSession {
        let mut session = TitrationSession::new(SessionConfig::default()).unwrap();
        TickDriver::new(1.0)
            .unwrap()
            .run_to_completion(&mut session)
            .unwrap();
        session
    }

    // ====== Single-curve export ======

    #[test]
    fn test_export_basic_curve() {
        let session = completed_session();
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap().to_string();

        export_curve_csv(session.samples(), &path, None).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "Base Added (mL),pH");
        // Initial sample: 0 mL at pH 1
        assert_eq!(lines.next().unwrap(), "0.000000,1.000000");
        // Header + 51 samples (initial + 50 doses)
        assert_eq!(content.lines().count(), 52);
    }

    #[test]
    fn test_export_rejects_empty_samples() {
        let tmp = NamedTempFile::new().unwrap();
        let result = export_curve_csv(&[], tmp.path().to_str().unwrap(), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_export_rejects_nan_samples() {
        let samples = [CurveSample {
            base_volume_ml: 0.0,
            ph: f64::NAN,
        }];
        let tmp = NamedTempFile::new().unwrap();
        let result = export_curve_csv(&samples, tmp.path().to_str().unwrap(), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_export_with_metadata_header() {
        let session = completed_session();
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap().to_string();

        let config = CsvConfig::default().with_metadata(CsvMetadata::from_session(&session));
        export_curve_csv(session.samples(), &path, Some(&config)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Titration Curve Data"));
        assert!(content.contains("# Regime: StrongAcidStrongBase"));
        assert!(content.contains("# Acid: 0.1 mol/L x 25 mL"));
        assert!(content.contains("# Equivalence Volume: 25 mL"));
    }

    #[test]
    fn test_export_custom_metadata_entries() {
        let session = completed_session();
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap().to_string();

        let mut metadata = CsvMetadata::from_session(&session);
        metadata.add_custom("Operator".to_string(), "demo".to_string());
        let config = CsvConfig::default().with_metadata(metadata);

        export_curve_csv(session.samples(), &path, Some(&config)).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("# Operator: demo"));
    }

    #[test]
    fn test_export_european_format() {
        let session = completed_session();
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap().to_string();

        export_curve_csv(session.samples(), &path, Some(&CsvConfig::european())).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        // Semicolon delimiter, comma decimals
        assert!(content.contains("0,000000;1,000000"));
    }

    #[test]
    fn test_export_precision() {
        let samples = [CurveSample {
            base_volume_ml: 1.0,
            ph: 2.5,
        }];
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap().to_string();

        let config = CsvConfig::default().precision(2);
        export_curve_csv(&samples, &path, Some(&config)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("1.00,2.50"));
    }

    // ====== Multi-curve export ======

    #[test]
    fn test_export_multi_regimes() {
        let volumes: Vec<f64> = (0..=50).map(|i| i as f64).collect();
        let mut all_series = Vec::new();
        let mut labels = Vec::new();

        for regime in ReactionRegime::ALL {
            let mut session = TitrationSession::new(SessionConfig::new(regime)).unwrap();
            TickDriver::new(1.0)
                .unwrap()
                .run_to_completion(&mut session)
                .unwrap();
            all_series.push(session.samples().iter().map(|s| s.ph).collect::<Vec<_>>());
            labels.push(regime.name());
        }

        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap().to_string();

        export_curves_multi_csv(&volumes, &all_series, &labels, &path, None).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(
            header,
            "Base Added (mL),StrongAcidStrongBase,WeakAcidStrongBase,StrongAcidWeakBase"
        );
        assert_eq!(content.lines().count(), 52);
    }

    #[test]
    fn test_export_multi_rejects_length_mismatch() {
        let volumes = vec![0.0, 1.0, 2.0];
        let series = vec![vec![1.0, 2.0]]; // one value short
        let tmp = NamedTempFile::new().unwrap();

        let result = export_curves_multi_csv(
            &volumes,
            &series,
            &["short"],
            tmp.path().to_str().unwrap(),
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_export_multi_rejects_label_mismatch() {
        let volumes = vec![0.0, 1.0];
        let series = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let tmp = NamedTempFile::new().unwrap();

        let result = export_curves_multi_csv(
            &volumes,
            &series,
            &["only one label"],
            tmp.path().to_str().unwrap(),
            None,
        );
        assert!(result.is_err());
    }
}
