//! Closed-form pH engine
//!
//! This module is the pure computational heart of the simulator. Given a
//! reaction regime, the moles of acid and titrant base present, and the
//! total solution volume, it evaluates the equilibrium expression for the
//! current region of the titration:
//!
//! - **Pre-equivalence**: excess analyte. Strong acids contribute their
//!   full excess as hydronium; weak pairs sit in a buffer governed by the
//!   Henderson-Hasselbalch relation.
//! - **Equivalence**: moles of acid equal moles of base (within a relative
//!   tolerance). Strong/strong gives pH 7 exactly; weak pairs hydrolyze
//!   their conjugate species.
//! - **Post-equivalence**: excess titrant. Strong bases contribute their
//!   full excess as hydroxide; a weak base in excess forms a buffer with
//!   its conjugate acid.
//!
//! # Design
//!
//! The engine holds no state and performs no I/O. The session layer owns
//! volumes and feeds moles in; a presentation layer receives plain numbers
//! and the [`ColorBand`] category back. Every logarithm argument is
//! guarded: an out-of-domain quantity returns
//! [`DomainError`](crate::error::TitrationError::DomainError) instead of a
//! NaN that would silently poison the curve.
//!
//! # Example
//!
//! ```rust
//! use titrate_rs::chemistry::{compute_ph, ReactionRegime};
//!
//! // 25 mL of 0.1 M HCl, no base added yet, in 0.025 L total
//! let ph = compute_ph(ReactionRegime::StrongAcidStrongBase, 0.0025, 0.0, 0.025).unwrap();
//! assert!((ph - 1.0).abs() < 1e-12);
//! ```

use crate::chemistry::regime::ReactionRegime;
use crate::error::{Result, TitrationError};

// =================================================================================================
// Equilibrium Constants
// =================================================================================================

/// Acid dissociation constant of ethanoic (acetic) acid at 25 degC
pub const KA_ETHANOIC: f64 = 1.8e-5;

/// Base dissociation constant of ammonia at 25 degC
pub const KB_AMMONIA: f64 = 1.8e-5;

/// Water autoionization constant at 25 degC
pub const KW: f64 = 1.0e-14;

/// Relative tolerance for deciding that acid and base moles are equal
///
/// The stepping process almost never lands bitwise-exactly on the
/// equivalence volume; comparing moles under a relative tolerance keeps
/// the equivalence branch reachable.
pub const MOLE_TOLERANCE: f64 = 1e-9;

// =================================================================================================
// Color Bands
// =================================================================================================

/// Discrete pH category for presentation layers
///
/// The engine emits this enum only. Mapping a band to an actual color
/// (hex string, RGB triple) is the presentation layer's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorBand {
    /// pH < 4
    StrongAcid,

    /// 4 <= pH < 6
    WeakAcid,

    /// 6 <= pH <= 8
    Neutral,

    /// 8 < pH < 11
    WeakBase,

    /// pH >= 11
    StrongBase,
}

impl ColorBand {
    /// Short identifier (used for display and logging)
    pub fn name(&self) -> &'static str {
        match self {
            ColorBand::StrongAcid => "StrongAcid",
            ColorBand::WeakAcid => "WeakAcid",
            ColorBand::Neutral => "Neutral",
            ColorBand::WeakBase => "WeakBase",
            ColorBand::StrongBase => "StrongBase",
        }
    }
}

impl std::fmt::Display for ColorBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =================================================================================================
// Mole Comparison
// =================================================================================================

/// Compare acid and base moles under the relative tolerance
///
/// Returns true when the two quantities agree to within
/// [`MOLE_TOLERANCE`] of the larger one. Two exact zeros compare equal.
#[inline]
pub fn moles_equal(acid_moles: f64, base_moles: f64) -> bool {
    let scale = acid_moles.abs().max(base_moles.abs());
    if scale == 0.0 {
        return true;
    }
    (acid_moles - base_moles).abs() <= MOLE_TOLERANCE * scale
}

// =================================================================================================
// pH Computation
// =================================================================================================

/// Compute the solution pH for a given regime and composition
///
/// # Arguments
///
/// * `regime` - Reaction class selecting the equation family
/// * `acid_moles` - Moles of analyte acid initially present (> 0)
/// * `base_moles` - Moles of titrant base added so far (>= 0)
/// * `total_volume_l` - Total solution volume in liters (> 0)
///
/// # Preconditions
///
/// Callers are expected to pass quantities derived from a validated
/// configuration: a strictly positive acid amount and total volume. The
/// engine still guards every logarithm and division defensively and
/// reports a violation as `DomainError` rather than producing NaN.
///
/// # Errors
///
/// `DomainError` when the total volume is not strictly positive, when a
/// mole count is negative or non-finite, or when an intermediate
/// concentration falls out of the domain of `log10`.
pub fn compute_ph(
    regime: ReactionRegime,
    acid_moles: f64,
    base_moles: f64,
    total_volume_l: f64,
) -> Result<f64> {
    if !total_volume_l.is_finite() || total_volume_l <= 0.0 {
        return Err(TitrationError::domain(format!(
            "total volume must be positive, got {} L",
            total_volume_l
        )));
    }
    if !acid_moles.is_finite() || acid_moles < 0.0 {
        return Err(TitrationError::domain(format!(
            "acid moles must be non-negative, got {}",
            acid_moles
        )));
    }
    if !base_moles.is_finite() || base_moles < 0.0 {
        return Err(TitrationError::domain(format!(
            "base moles must be non-negative, got {}",
            base_moles
        )));
    }

    match regime {
        // HCl + NaOH: full dissociation on both sides
        ReactionRegime::StrongAcidStrongBase => {
            if moles_equal(acid_moles, base_moles) {
                // Equivalence of a strong/strong pair is neutral water
                Ok(7.0)
            } else if acid_moles > base_moles {
                ph_from_hydronium((acid_moles - base_moles) / total_volume_l)
            } else {
                ph_from_hydroxide((base_moles - acid_moles) / total_volume_l)
            }
        }

        // CH3COOH + NaOH: buffer before equivalence, acetate hydrolysis at it
        ReactionRegime::WeakAcidStrongBase => {
            if moles_equal(acid_moles, base_moles) {
                // All acid converted to conjugate base; hydrolysis sets the pH
                let c_a = acid_moles / total_volume_l;
                let c_oh_squared = KW * c_a / KA_ETHANOIC;
                ph_from_hydroxide(c_oh_squared.sqrt())
            } else if acid_moles > base_moles {
                if base_moles > 0.0 {
                    // Buffer region: volumes cancel, the mole ratio suffices
                    let ratio = base_moles / (acid_moles - base_moles);
                    if ratio <= 0.0 || !ratio.is_finite() {
                        return Err(TitrationError::domain(format!(
                            "buffer ratio out of domain: {}",
                            ratio
                        )));
                    }
                    Ok(-KA_ETHANOIC.log10() + ratio.log10())
                } else {
                    // Untouched weak acid solution
                    let c_ha = acid_moles / total_volume_l;
                    ph_from_hydronium((KA_ETHANOIC * c_ha).sqrt())
                }
            } else {
                // Past equivalence the excess strong base dominates
                ph_from_hydroxide((base_moles - acid_moles) / total_volume_l)
            }
        }

        // HCl + NH3: mirror image, with the buffer after equivalence
        ReactionRegime::StrongAcidWeakBase => {
            if moles_equal(acid_moles, base_moles) {
                // All base converted to ammonium; its hydrolysis is acidic
                let c_bh = acid_moles / total_volume_l;
                let c_h_squared = KW * c_bh / KB_AMMONIA;
                ph_from_hydronium(c_h_squared.sqrt())
            } else if acid_moles > base_moles {
                ph_from_hydronium((acid_moles - base_moles) / total_volume_l)
            } else {
                // Excess weak base buffered by its conjugate acid
                let c_b = (base_moles - acid_moles) / total_volume_l;
                let c_bh = acid_moles / total_volume_l;
                if c_bh <= 0.0 {
                    return Err(TitrationError::domain(
                        "conjugate acid concentration must be positive in the base buffer region",
                    ));
                }
                ph_from_hydroxide(KB_AMMONIA * c_b / c_bh)
            }
        }
    }
}

/// pH from a hydronium concentration: -log10([H+])
#[inline]
fn ph_from_hydronium(c_h: f64) -> Result<f64> {
    if !c_h.is_finite() || c_h <= 0.0 {
        return Err(TitrationError::domain(format!(
            "hydronium concentration must be positive, got {} mol/L",
            c_h
        )));
    }
    Ok(-c_h.log10())
}

/// pH from a hydroxide concentration via Kw: -log10(Kw / [OH-])
#[inline]
fn ph_from_hydroxide(c_oh: f64) -> Result<f64> {
    if !c_oh.is_finite() || c_oh <= 0.0 {
        return Err(TitrationError::domain(format!(
            "hydroxide concentration must be positive, got {} mol/L",
            c_oh
        )));
    }
    ph_from_hydronium(KW / c_oh)
}

// =================================================================================================
// Equivalence Volume
// =================================================================================================

/// Titrant volume at which moles of base equal the initial moles of acid
///
/// For the 1:1 stoichiometry modeled here:
///
/// ```text
/// V_eq = V_acid * C_acid / C_base
/// ```
///
/// Pure, no side effects.
///
/// # Errors
///
/// `InvalidConfiguration` when `base_molarity` is not strictly positive
/// or any input is non-finite.
pub fn equivalence_volume_ml(
    acid_volume_ml: f64,
    acid_molarity: f64,
    base_molarity: f64,
) -> Result<f64> {
    if !base_molarity.is_finite() || base_molarity <= 0.0 {
        return Err(TitrationError::config(format!(
            "base molarity must be positive, got {} mol/L",
            base_molarity
        )));
    }
    if !acid_volume_ml.is_finite() || !acid_molarity.is_finite() {
        return Err(TitrationError::config(
            "acid volume and molarity must be finite",
        ));
    }
    Ok(acid_volume_ml * acid_molarity / base_molarity)
}

// =================================================================================================
// Color Classification
// =================================================================================================

/// Classify a pH value into its presentation band
///
/// Banding is deterministic: pH < 4 is strongly acidic, 4 to 6 weakly
/// acidic, 6 to 8 near neutral, 8 to 11 weakly basic, 11 and above
/// strongly basic.
pub fn classify_solution_color(ph: f64) -> ColorBand {
    if ph < 4.0 {
        ColorBand::StrongAcid
    } else if ph < 6.0 {
        ColorBand::WeakAcid
    } else if ph <= 8.0 {
        ColorBand::Neutral
    } else if ph < 11.0 {
        ColorBand::WeakBase
    } else {
        ColorBand::StrongBase
    }
}

// =================================================================================================
// Tests
// =================================================================================================
