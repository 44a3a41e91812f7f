//! Externally clocked tick driver
//!
//! The continuous titration process is driven by whatever scheduler the
//! embedding application already has (a frame callback, a timer, a test
//! loop). The core stays agnostic: a [`TickDriver`] turns one scheduler
//! tick into one fixed dose, and only while the session is Running.
//!
//! Cancellation is the session's `stop()`: it takes effect before the
//! next tick, never interrupting a dose already committed. The driver
//! holds no handle to any platform timer.
//!
//! # Example
//!
//! ```rust
//! use titrate_rs::session::{SessionConfig, TitrationSession, TickDriver};
//! use titrate_rs::chemistry::ReactionRegime;
//!
//! let config = SessionConfig::new(ReactionRegime::WeakAcidStrongBase);
//! let mut session = TitrationSession::new(config).unwrap();
//!
//! let driver = TickDriver::default();
//! let summary = driver.run_to_completion(&mut session).unwrap();
//!
//! assert!(summary.final_status.is_terminal());
//! assert_eq!(summary.equivalence_point_ml, Some(25.0));
//! ```

use log::debug;

use crate::error::{Result, TitrationError};
use crate::session::sample::{SessionStatus, StepOutcome};
use crate::session::session::TitrationSession;

/// Titrant volume dosed per tick by default \[mL\]
pub const DEFAULT_INCREMENT_ML: f64 = 0.1;

/// Fixed-increment dosing driver for an external scheduler
///
/// The per-tick dose is `increment * speed`, fixed at construction.
/// Speed is a plain multiplier: what one "tick" means in wall-clock
/// terms is entirely the scheduler's business.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickDriver {
    increment_ml: f64,
}

impl Default for TickDriver {
    fn default() -> Self {
        Self {
            increment_ml: DEFAULT_INCREMENT_ML,
        }
    }
}

impl TickDriver {
    /// Create a driver dosing `increment_ml` per tick
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when the increment is not strictly positive.
    pub fn new(increment_ml: f64) -> Result<Self> {
        if !increment_ml.is_finite() || increment_ml <= 0.0 {
            return Err(TitrationError::argument(format!(
                "tick increment must be positive, got {} mL",
                increment_ml
            )));
        }
        Ok(Self { increment_ml })
    }

    /// Scale the per-tick dose by a speed multiplier
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when the multiplier is not strictly positive.
    pub fn with_speed(self, speed: f64) -> Result<Self> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(TitrationError::argument(format!(
                "speed multiplier must be positive, got {}",
                speed
            )));
        }
        Self::new(self.increment_ml * speed)
    }

    /// Titrant volume dosed per tick \[mL\]
    pub fn increment_ml(&self) -> f64 {
        self.increment_ml
    }

    /// Advance the session by one scheduled dose
    ///
    /// Doses only while the session is Running; an Idle, Stopped or
    /// Finished session yields `Ok(None)` so schedulers can keep ticking
    /// unconditionally.
    pub fn tick(&self, session: &mut TitrationSession) -> Result<Option<StepOutcome>> {
        if session.status() != SessionStatus::Running {
            return Ok(None);
        }
        session.step(self.increment_ml).map(Some)
    }

    /// Start the session and tick until it finishes
    ///
    /// Synchronous convenience loop for demos, tests and benchmarks. The
    /// interactive path is the external scheduler calling
    /// [`tick()`](Self::tick) instead.
    pub fn run_to_completion(&self, session: &mut TitrationSession) -> Result<RunSummary> {
        session.start();

        let mut ticks = 0usize;
        while session.status() == SessionStatus::Running {
            self.tick(session)?;
            ticks += 1;
        }

        let summary = RunSummary {
            ticks,
            samples: session.samples().len(),
            final_status: session.status(),
            final_ph: session.current_ph(),
            equivalence_point_ml: session.equivalence_point(),
        };
        debug!(
            "run complete: {} ticks, {} samples, final pH {:.2}",
            summary.ticks, summary.samples, summary.final_ph
        );
        Ok(summary)
    }
}

/// Summary of a completed [`TickDriver::run_to_completion`] call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Number of ticks performed by this run
    pub ticks: usize,

    /// Total samples on the curve (including the initial 0 mL sample)
    pub samples: usize,

    /// Session status after the run
    pub final_status: SessionStatus,

    /// Solution pH after the run
    pub final_ph: f64,

    /// Latched equivalence point, if the run crossed it
    pub equivalence_point_ml: Option<f64>,
}

// =================================================================================================
// Tests
// =================================================================================================
