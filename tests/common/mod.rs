//! Shared helpers for integration tests
//!
//! All scenarios use the classroom setup the defaults model: 25 mL of
//! 0.1 M analyte titrated with 0.1 M titrant up to a 50 mL cap, so the
//! equivalence volume is 25 mL for every regime.

use titrate_rs::chemistry::ReactionRegime;
use titrate_rs::session::{RunSummary, SessionConfig, TickDriver, TitrationSession};

/// Classroom configuration for a regime
#[allow(dead_code)]
pub fn lab_config(regime: ReactionRegime) -> SessionConfig {
    SessionConfig::new(regime)
}

/// Fresh session with the classroom configuration
#[allow(dead_code)]
pub fn lab_session(regime: ReactionRegime) -> TitrationSession {
    TitrationSession::new(SessionConfig::new(regime)).expect("classroom config is valid")
}

/// Drive a session to the cap with fine 0.1 mL doses
#[allow(dead_code)]
pub fn run_fine(session: &mut TitrationSession) -> RunSummary {
    TickDriver::default()
        .run_to_completion(session)
        .expect("fine run cannot fail on a valid session")
}
