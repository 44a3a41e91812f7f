//! Reaction regimes for acid-base titration
//!
//! A regime selects which family of equilibrium equations the engine
//! applies. The three supported pairings are the classic teaching cases:
//!
//! | Regime                 | Analyte            | Titrant           |
//! |------------------------|--------------------|-------------------|
//! | `StrongAcidStrongBase` | HCl (strong acid)  | NaOH (strong base)|
//! | `WeakAcidStrongBase`   | CH3COOH (weak acid)| NaOH (strong base)|
//! | `StrongAcidWeakBase`   | HCl (strong acid)  | NH3 (weak base)   |
//!
//! # Enum type safety
//!
//! The engine matches exhaustively on this enum. Adding a regime without
//! updating every branch is a compile-time error, not a silent default.

use std::fmt;

/// Reaction class of a titration
///
/// Immutable once a session starts; changing it requires a full session
/// reset through `configure()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionRegime {
    /// Strong acid titrated with a strong base (HCl + NaOH)
    StrongAcidStrongBase,

    /// Weak acid titrated with a strong base (CH3COOH + NaOH)
    WeakAcidStrongBase,

    /// Strong acid titrated with a weak base (HCl + NH3)
    StrongAcidWeakBase,
}

impl ReactionRegime {
    /// All supported regimes, in presentation order
    pub const ALL: [ReactionRegime; 3] = [
        ReactionRegime::StrongAcidStrongBase,
        ReactionRegime::WeakAcidStrongBase,
        ReactionRegime::StrongAcidWeakBase,
    ];

    /// Short identifier (used for display and logging)
    pub fn name(&self) -> &'static str {
        match self {
            ReactionRegime::StrongAcidStrongBase => "StrongAcidStrongBase",
            ReactionRegime::WeakAcidStrongBase => "WeakAcidStrongBase",
            ReactionRegime::StrongAcidWeakBase => "StrongAcidWeakBase",
        }
    }

    /// Analyte species label
    pub fn acid_name(&self) -> &'static str {
        match self {
            ReactionRegime::StrongAcidStrongBase => "HCl (strong acid)",
            ReactionRegime::WeakAcidStrongBase => "CH3COOH (weak acid)",
            ReactionRegime::StrongAcidWeakBase => "HCl (strong acid)",
        }
    }

    /// Titrant species label
    pub fn base_name(&self) -> &'static str {
        match self {
            ReactionRegime::StrongAcidStrongBase => "NaOH (strong base)",
            ReactionRegime::WeakAcidStrongBase => "NaOH (strong base)",
            ReactionRegime::StrongAcidWeakBase => "NH3 (weak base)",
        }
    }

    /// Human-readable pairing, e.g. "HCl (strong acid) + NaOH (strong base)"
    pub fn pairing(&self) -> String {
        format!("{} + {}", self.acid_name(), self.base_name())
    }

    /// True when a weak species takes part in the reaction
    ///
    /// Only those regimes have a buffer region and an equivalence-point
    /// pH different from 7.
    pub fn has_weak_species(&self) -> bool {
        !matches!(self, ReactionRegime::StrongAcidStrongBase)
    }
}

impl fmt::Display for ReactionRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_three_regimes() {
        assert_eq!(ReactionRegime::ALL.len(), 3);
    }

    #[test]
    fn test_display_matches_name() {
        for regime in ReactionRegime::ALL {
            assert_eq!(format!("{}", regime), regime.name());
        }
    }

    #[test]
    fn test_pairing_mentions_both_species() {
        let pairing = ReactionRegime::StrongAcidWeakBase.pairing();
        assert!(pairing.contains("HCl"));
        assert!(pairing.contains("NH3"));
    }

    #[test]
    fn test_weak_species_flag() {
        assert!(!ReactionRegime::StrongAcidStrongBase.has_weak_species());
        assert!(ReactionRegime::WeakAcidStrongBase.has_weak_species());
        assert!(ReactionRegime::StrongAcidWeakBase.has_weak_species());
    }
}
