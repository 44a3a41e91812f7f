//! Titration session state machine
//!
//! A [`TitrationSession`] owns all mutable simulation state: the titrant
//! volume, the accumulated curve samples, the run status and the
//! equivalence latch. Every mutation funnels through [`step()`], which
//! keeps the invariants easy to state:
//!
//! - the analyte volume never changes after configuration;
//! - the titrant volume is non-decreasing and capped at the configured
//!   maximum;
//! - the sample sequence is append-only and volume-ordered;
//! - the equivalence point, once latched, never changes within a session.
//!
//! # Single-threaded model
//!
//! The session performs no locking and spawns nothing. The tick driver
//! and manual dosing are expected to run on the same thread; samples are
//! appended in the order `step()` calls complete. Calling both while
//! Running is not an error, but the resulting sample sequence simply
//! reflects call order.
//!
//! [`step()`]: TitrationSession::step
//!
//! # Example
//!
//! ```rust
//! use titrate_rs::session::{SessionConfig, TitrationSession};
//! use titrate_rs::chemistry::ReactionRegime;
//!
//! let config = SessionConfig::new(ReactionRegime::StrongAcidStrongBase);
//! let mut session = TitrationSession::new(config).unwrap();
//!
//! // One initial sample at 0 mL
//! assert_eq!(session.samples().len(), 1);
//! assert!((session.current_ph() - 1.0).abs() < 1e-12);
//!
//! let outcome = session.add_discrete(1.0).unwrap();
//! assert_eq!(session.samples().len(), 2);
//! assert!(!outcome.finished);
//! ```

use log::{debug, trace};

use crate::chemistry::{self, ColorBand};
use crate::error::{Result, TitrationError};
use crate::session::config::SessionConfig;
use crate::session::sample::{CurveSample, SessionStatus, StepOutcome};

/// Observer invoked after every successful sample-producing dose
///
/// Receives the committed [`StepOutcome`] by shared reference; the
/// session has already appended the sample when the observer runs.
pub type SampleObserver = Box<dyn FnMut(&StepOutcome)>;

/// Stateful titration simulation
///
/// Created from a validated [`SessionConfig`]; reconfigured wholesale by
/// [`configure()`](Self::configure). There is no partial mutation of
/// historical samples: a reset replaces the curve with a fresh initial
/// sample at 0 mL.
pub struct TitrationSession {
    config: SessionConfig,
    status: SessionStatus,
    base_volume_ml: f64,
    current_ph: f64,
    samples: Vec<CurveSample>,

    /// Volume at which the mole balance crosses equivalence, computed
    /// once at configure time
    equivalence_threshold_ml: f64,

    /// Set-once latch: the threshold volume, latched by the first dose
    /// that reaches or crosses it
    equivalence_point: Option<f64>,

    observer: Option<SampleObserver>,
}

impl TitrationSession {
    /// Create a session from a configuration
    ///
    /// Validates the configuration, computes the equivalence threshold
    /// and appends the initial sample at 0 mL of titrant.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` for non-positive inputs; `DomainError` if
    /// the initial pH cannot be evaluated (unreachable for validated
    /// configurations).
    pub fn new(config: SessionConfig) -> Result<Self> {
        let (threshold, initial) = Self::prepare(&config)?;

        debug!(
            "session configured: {} | acid {} M x {} mL | base {} M | cap {} mL | equivalence at {:.2} mL",
            config.regime,
            config.acid_molarity,
            config.acid_volume_ml,
            config.base_molarity,
            config.max_volume_ml,
            threshold
        );

        Ok(Self {
            config,
            status: SessionStatus::Idle,
            base_volume_ml: 0.0,
            current_ph: initial.ph,
            samples: vec![initial],
            equivalence_threshold_ml: threshold,
            equivalence_point: None,
            observer: None,
        })
    }

    /// Validate a configuration and evaluate everything a fresh session
    /// needs, without touching any state
    fn prepare(config: &SessionConfig) -> Result<(f64, CurveSample)> {
        config.validate()?;
        let threshold = config.equivalence_volume_ml()?;
        let initial_ph = chemistry::compute_ph(
            config.regime,
            config.acid_moles(),
            0.0,
            config.total_volume_l(0.0),
        )?;
        let initial = CurveSample {
            base_volume_ml: 0.0,
            ph: initial_ph,
        };
        Ok((threshold, initial))
    }

    // ========================================= Operations ========================================

    /// Replace the configuration and reset all state
    ///
    /// Validation happens before any mutation: a failed `configure()`
    /// leaves the previous session state untouched. On success the
    /// titrant volume returns to 0, the curve is replaced by the fresh
    /// initial sample, the equivalence latch is cleared and the status
    /// becomes Idle. A registered observer survives reconfiguration.
    pub fn configure(&mut self, config: SessionConfig) -> Result<()> {
        let (threshold, initial) = Self::prepare(&config)?;

        self.config = config;
        self.status = SessionStatus::Idle;
        self.base_volume_ml = 0.0;
        self.current_ph = initial.ph;
        self.samples.clear();
        self.samples.push(initial);
        self.equivalence_threshold_ml = threshold;
        self.equivalence_point = None;

        debug!(
            "session reconfigured: {} | equivalence at {:.2} mL",
            self.config.regime, threshold
        );
        Ok(())
    }

    /// Dose titrant: the sole mutation primitive
    ///
    /// Adds `delta_ml` of titrant (clamped at the configured cap),
    /// evaluates the new pH, appends a curve sample, latches the
    /// equivalence point when first crossed and flips the status to
    /// Finished on the dose that reaches the cap.
    ///
    /// Calling `step()` on a Finished session is a no-op returning an
    /// outcome with no sample, not an error.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `delta_ml` is not strictly positive;
    /// `DomainError` if the pH evaluation fails (unreachable for
    /// validated configurations).
    pub fn step(&mut self, delta_ml: f64) -> Result<StepOutcome> {
        if !delta_ml.is_finite() || delta_ml <= 0.0 {
            return Err(TitrationError::argument(format!(
                "dose must be positive, got {} mL",
                delta_ml
            )));
        }

        // Reaching the cap always flips the status to Finished, so the
        // at-cap no-op and the Finished no-op are the same case.
        if self.status.is_terminal() {
            trace!("dose of {} mL ignored: session finished", delta_ml);
            return Ok(StepOutcome::noop(self.status));
        }

        let new_volume = (self.base_volume_ml + delta_ml).min(self.config.max_volume_ml);

        // Evaluate before committing so a failed evaluation leaves the
        // session where it was.
        let ph = chemistry::compute_ph(
            self.config.regime,
            self.config.acid_moles(),
            self.config.base_moles_at(new_volume),
            self.config.total_volume_l(new_volume),
        )?;

        self.base_volume_ml = new_volume;
        self.current_ph = ph;

        let sample = CurveSample {
            base_volume_ml: new_volume,
            ph,
        };
        self.samples.push(sample);
        trace!("sample appended: {}", sample);

        let reached_equivalence =
            self.equivalence_point.is_none() && volume_reaches(new_volume, self.equivalence_threshold_ml);
        if reached_equivalence {
            self.equivalence_point = Some(self.equivalence_threshold_ml);
            debug!(
                "equivalence reached at {:.2} mL (sample at {:.2} mL, pH {:.2})",
                self.equivalence_threshold_ml, new_volume, ph
            );
        }

        let finished = new_volume >= self.config.max_volume_ml;
        if finished {
            self.status = SessionStatus::Finished;
            debug!("titration finished at {:.2} mL", new_volume);
        }

        let outcome = StepOutcome {
            sample: Some(sample),
            status: self.status,
            reached_equivalence,
            finished,
        };

        if let Some(observer) = self.observer.as_mut() {
            observer(&outcome);
        }

        Ok(outcome)
    }

    /// Enable the time-driven stepping process
    ///
    /// Idle or Stopped becomes Running; Running and Finished are no-ops.
    /// The session does not own a timer: an external scheduler is
    /// expected to call the tick driver while the status is Running.
    pub fn start(&mut self) {
        match self.status {
            SessionStatus::Idle | SessionStatus::Stopped => {
                self.status = SessionStatus::Running;
                debug!("session running");
            }
            SessionStatus::Running | SessionStatus::Finished => {}
        }
    }

    /// Halt the time-driven stepping process
    ///
    /// Running becomes Stopped; every other state is a no-op.
    /// Cancellation is synchronous: it takes effect before the next
    /// scheduled tick, never interrupting a dose already committed.
    pub fn stop(&mut self) {
        if self.status == SessionStatus::Running {
            self.status = SessionStatus::Stopped;
            debug!("session stopped at {:.2} mL", self.base_volume_ml);
        }
    }

    /// Reset to Idle with the previously supplied configuration
    pub fn reset(&mut self) -> Result<()> {
        let config = self.config;
        self.configure(config)
    }

    /// Manual dose, e.g. from "add 0.1 mL" / "add 1 mL" controls
    ///
    /// Valid in any non-Finished state regardless of run status; on a
    /// Finished session it is the same no-op as [`step()`](Self::step).
    pub fn add_discrete(&mut self, amount_ml: f64) -> Result<StepOutcome> {
        self.step(amount_ml)
    }

    /// Register the observer invoked after every successful dose
    ///
    /// Replaces any previous observer. The observer receives the
    /// committed outcome and cannot mutate the session from inside the
    /// callback, which keeps sample ordering trivially well-defined.
    pub fn set_observer(&mut self, observer: SampleObserver) {
        self.observer = Some(observer);
    }

    /// Remove the registered observer
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    // ========================================= Accessors =========================================

    /// Current solution pH
    pub fn current_ph(&self) -> f64 {
        self.current_ph
    }

    /// Cumulative titrant volume \[mL\]
    pub fn current_base_volume_ml(&self) -> f64 {
        self.base_volume_ml
    }

    /// The titration curve: ordered, append-only samples
    pub fn samples(&self) -> &[CurveSample] {
        &self.samples
    }

    /// Latched equivalence point \[mL\], `None` until first crossed
    pub fn equivalence_point(&self) -> Option<f64> {
        self.equivalence_point
    }

    /// Equivalence crossing volume computed at configure time \[mL\]
    ///
    /// Available before the latch fires, e.g. to place a marker line.
    pub fn equivalence_threshold_ml(&self) -> f64 {
        self.equivalence_threshold_ml
    }

    /// Current run status
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// The active configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Presentation band of the current pH
    pub fn current_color_band(&self) -> ColorBand {
        chemistry::classify_solution_color(self.current_ph)
    }
}

/// Volume comparison for the equivalence latch
///
/// Accumulated doses carry floating-point rounding, so the crossing test
/// allows the same relative slack as the engine's mole comparison. The
/// latch itself is set-once; this tolerance only decides which dose sets
/// it.
#[inline]
fn volume_reaches(volume_ml: f64, threshold_ml: f64) -> bool {
    volume_ml >= threshold_ml * (1.0 - chemistry::MOLE_TOLERANCE)
}

impl std::fmt::Debug for TitrationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitrationSession")
            .field("regime", &self.config.regime)
            .field("status", &self.status)
            .field("base_volume_ml", &self.base_volume_ml)
            .field("current_ph", &self.current_ph)
            .field("samples", &self.samples.len())
            .field("equivalence_point", &self.equivalence_point)
            .field("observer", &self.observer.as_ref().map(|_| "<registered>"))
            .finish()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
