//! Titration chemistry engine
//!
//! This module provides the pure computational core of the simulator:
//! closed-form equilibrium pH for the three supported reaction regimes,
//! the equivalence-volume relation, and the pH-to-color-band
//! classification used by presentation layers.
//!
//! # Core Concepts
//!
//! - **Reaction Regime**: which equation family applies
//!   ([`ReactionRegime`])
//! - **pH Computation**: [`compute_ph`] selects a branch from the current
//!   mole balance (pre-equivalence, equivalence, post-equivalence)
//! - **Color Band**: [`ColorBand`], a discrete pH category with no
//!   rendering dependency
//!
//! # Architecture
//!
//! The engine is **separate from the session state machine**:
//! - The engine provides the **equations** (chemistry)
//! - The session owns the **state** and the stepping process
//!
//! This separation means the same engine serves manual dosing, the tick
//! driver, tests and benchmarks without any shared mutable state. All
//! functions here are deterministic and synchronous; there are no
//! suspension points and no I/O.

// =================================================================================================
// Module Declarations
// =================================================================================================

mod engine;
mod regime;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use engine::{
    classify_solution_color,
    compute_ph,
    equivalence_volume_ml,
    moles_equal,
    ColorBand,
    KA_ETHANOIC,
    KB_AMMONIA,
    KW,
    MOLE_TOLERANCE,
};

pub use regime::ReactionRegime;
