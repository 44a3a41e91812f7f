//! Session configuration
//!
//! A [`SessionConfig`] captures everything that is fixed for the lifetime
//! of a titration run: the reaction regime, both molarities, the analyte
//! volume and the titrant cap. Changing any of these requires a full
//! session reset through `configure()`.
//!
//! Defaults model the classic classroom setup: 25 mL of 0.1 M acid
//! titrated with 0.1 M base up to a 50 mL burette cap.

use crate::chemistry::{self, ReactionRegime};
use crate::error::{Result, TitrationError};

/// Default analyte molarity \[mol/L\]
pub const DEFAULT_ACID_MOLARITY: f64 = 0.1;

/// Default titrant molarity \[mol/L\]
pub const DEFAULT_BASE_MOLARITY: f64 = 0.1;

/// Default analyte volume \[mL\]
pub const DEFAULT_ACID_VOLUME_ML: f64 = 25.0;

/// Default titrant cap \[mL\]
pub const DEFAULT_MAX_VOLUME_ML: f64 = 50.0;

/// Immutable configuration of a titration session
///
/// # Example
///
/// ```rust
/// use titrate_rs::session::SessionConfig;
/// use titrate_rs::chemistry::ReactionRegime;
///
/// let config = SessionConfig::new(ReactionRegime::WeakAcidStrongBase)
///     .with_acid_molarity(0.05)
///     .with_base_molarity(0.1);
///
/// config.validate().unwrap();
/// assert_eq!(config.acid_volume_ml, 25.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Reaction class of the titration
    pub regime: ReactionRegime,

    /// Analyte concentration \[mol/L\], must be > 0
    pub acid_molarity: f64,

    /// Titrant concentration \[mol/L\], must be > 0
    pub base_molarity: f64,

    /// Analyte volume \[mL\], fixed at session start, must be > 0
    pub acid_volume_ml: f64,

    /// Maximum titrant volume \[mL\], must be > 0
    pub max_volume_ml: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(ReactionRegime::StrongAcidStrongBase)
    }
}

impl SessionConfig {
    /// Create a configuration for a regime with the default lab setup
    pub fn new(regime: ReactionRegime) -> Self {
        Self {
            regime,
            acid_molarity: DEFAULT_ACID_MOLARITY,
            base_molarity: DEFAULT_BASE_MOLARITY,
            acid_volume_ml: DEFAULT_ACID_VOLUME_ML,
            max_volume_ml: DEFAULT_MAX_VOLUME_ML,
        }
    }

    /// Builder pattern: set analyte molarity
    pub fn with_acid_molarity(mut self, molarity: f64) -> Self {
        self.acid_molarity = molarity;
        self
    }

    /// Builder pattern: set titrant molarity
    pub fn with_base_molarity(mut self, molarity: f64) -> Self {
        self.base_molarity = molarity;
        self
    }

    /// Builder pattern: set analyte volume
    pub fn with_acid_volume_ml(mut self, volume_ml: f64) -> Self {
        self.acid_volume_ml = volume_ml;
        self
    }

    /// Builder pattern: set titrant cap
    pub fn with_max_volume_ml(mut self, volume_ml: f64) -> Self {
        self.max_volume_ml = volume_ml;
        self
    }

    /// Validate that every numeric field is strictly positive and finite
    ///
    /// Called by the session before any state is committed, so a rejected
    /// configuration never partially mutates a running session.
    pub fn validate(&self) -> Result<()> {
        Self::require_positive("acid molarity", self.acid_molarity)?;
        Self::require_positive("base molarity", self.base_molarity)?;
        Self::require_positive("acid volume", self.acid_volume_ml)?;
        Self::require_positive("maximum titrant volume", self.max_volume_ml)?;
        Ok(())
    }

    fn require_positive(field: &str, value: f64) -> Result<()> {
        if !value.is_finite() || value <= 0.0 {
            return Err(TitrationError::config(format!(
                "{} must be positive and finite, got {}",
                field, value
            )));
        }
        Ok(())
    }

    // ====================================== Derived quantities ===================================

    /// Moles of analyte acid initially present
    pub fn acid_moles(&self) -> f64 {
        self.acid_volume_ml / 1000.0 * self.acid_molarity
    }

    /// Moles of titrant base contained in `base_volume_ml` of titrant
    pub fn base_moles_at(&self, base_volume_ml: f64) -> f64 {
        base_volume_ml / 1000.0 * self.base_molarity
    }

    /// Total solution volume in liters once `base_volume_ml` has been added
    pub fn total_volume_l(&self, base_volume_ml: f64) -> f64 {
        (self.acid_volume_ml + base_volume_ml) / 1000.0
    }

    /// Titrant volume at which the mole balance crosses equivalence
    pub fn equivalence_volume_ml(&self) -> Result<f64> {
        chemistry::equivalence_volume_ml(self.acid_volume_ml, self.acid_molarity, self.base_molarity)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
