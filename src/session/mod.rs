//! Titration session and stepping process
//!
//! This module owns all mutable simulation state and the process that
//! drives it forward.
//!
//! # Core Concepts
//!
//! ## The Architecture (STATE vs EQUATIONS vs CLOCK)
//!
//! The session architecture separates concerns into three layers:
//!
//! 1. **Configuration** ([`SessionConfig`]) - WHAT to titrate
//!    - Reaction regime, molarities, analyte volume, titrant cap
//!    - Validated fully before any state is committed
//!
//! 2. **Session** ([`TitrationSession`]) - the state machine
//!    - Titrant volume, curve samples, equivalence latch, run status
//!    - One mutation primitive: `step()`
//!    - Emits a [`StepOutcome`] event after every successful dose
//!
//! 3. **Driver** ([`TickDriver`]) - the clock adapter
//!    - Turns one external scheduler tick into one fixed dose
//!    - Cancellation via the session's `stop()`, between ticks only
//!
//! The chemistry lives in [`crate::chemistry`]; the session feeds it
//! moles and volumes and stores what comes back. Rendering lives outside
//! the core entirely: a presentation layer subscribes to step outcomes
//! and reads the accessors.
//!
//! # State machine
//!
//! ```text
//!            configure()
//!                |
//!                v
//!     +-------> Idle ---start()---> Running <--start()-- Stopped
//!     |                               |  |                  ^
//! configure()                         |  +-----stop()-------+
//!     |                               |
//!     +------- any state        step() reaches cap
//!                                     |
//!                                     v
//!                                  Finished   (doses become no-ops)
//! ```
//!
//! # Quick Start Example
//!
//! ```rust
//! use titrate_rs::session::{SessionConfig, TitrationSession, TickDriver};
//! use titrate_rs::chemistry::ReactionRegime;
//!
//! // 1. Configure (WHAT to titrate)
//! let config = SessionConfig::new(ReactionRegime::StrongAcidStrongBase);
//!
//! // 2. Create the session (the state)
//! let mut session = TitrationSession::new(config)?;
//!
//! // 3. Dose manually, or let a scheduler tick the driver
//! session.add_discrete(1.0)?;
//!
//! let driver = TickDriver::default();
//! let summary = driver.run_to_completion(&mut session)?;
//! assert!(summary.final_status.is_terminal());
//! # Ok::<(), titrate_rs::error::TitrationError>(())
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================

mod config;
mod driver;
mod sample;
mod session;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use config::{
    SessionConfig,
    DEFAULT_ACID_MOLARITY,
    DEFAULT_ACID_VOLUME_ML,
    DEFAULT_BASE_MOLARITY,
    DEFAULT_MAX_VOLUME_ML,
};

pub use driver::{RunSummary, TickDriver, DEFAULT_INCREMENT_ML};
pub use sample::{CurveSample, SessionStatus, StepOutcome};
pub use session::{SampleObserver, TitrationSession};
