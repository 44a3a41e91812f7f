//! Curve samples, session status and step outcomes
//!
//! Plain data records exchanged between the session and its consumers.
//! No rendering types appear here: a presentation layer receives volumes,
//! pH values and the [`ColorBand`] category, nothing else.

use std::fmt;

use crate::chemistry::{classify_solution_color, ColorBand};

// =================================================================================================
// Curve Sample
// =================================================================================================

/// One point of the titration curve
///
/// Appended per successful dose; the ordered sequence of samples IS the
/// curve. Insertion order equals volume order, so consumers never sort.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    /// Cumulative titrant volume at this point \[mL\]
    pub base_volume_ml: f64,

    /// Solution pH at this point
    pub ph: f64,
}

impl CurveSample {
    /// Presentation band of this sample's pH
    pub fn color_band(&self) -> ColorBand {
        classify_solution_color(self.ph)
    }
}

impl fmt::Display for CurveSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} mL -> pH {:.2}", self.base_volume_ml, self.ph)
    }
}

// =================================================================================================
// Session Status
// =================================================================================================

/// Run state of a titration session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// Configured, nothing dosed by the driver yet
    Idle,

    /// The tick driver is expected to dose on every tick
    Running,

    /// Halted by `stop()`; manual dosing and `start()` remain available
    Stopped,

    /// The titrant cap was reached; all further doses are no-ops
    Finished,
}

impl SessionStatus {
    /// Short identifier (used for display and logging)
    pub fn name(&self) -> &'static str {
        match self {
            SessionStatus::Idle => "Idle",
            SessionStatus::Running => "Running",
            SessionStatus::Stopped => "Stopped",
            SessionStatus::Finished => "Finished",
        }
    }

    /// True once the session can no longer accept doses
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Finished)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =================================================================================================
// Step Outcome
// =================================================================================================

/// Result of one `step()` / `add_discrete()` call
///
/// This is also the event payload handed to the session observer after
/// every successful dose, carrying everything a presentation layer needs
/// to redraw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    /// The sample appended by this dose; `None` when the dose was a no-op
    /// because the session had already reached the titrant cap
    pub sample: Option<CurveSample>,

    /// Session status after the dose
    pub status: SessionStatus,

    /// True exactly once per session: the dose that first reaches or
    /// crosses the equivalence volume
    pub reached_equivalence: bool,

    /// True exactly once per session: the dose that reaches the titrant
    /// cap. Later no-op doses report `false` here.
    pub finished: bool,
}

impl StepOutcome {
    /// Outcome of a dose that changed nothing
    pub(crate) fn noop(status: SessionStatus) -> Self {
        Self {
            sample: None,
            status,
            reached_equivalence: false,
            finished: false,
        }
    }

    /// True when the dose appended no sample
    pub fn is_noop(&self) -> bool {
        self.sample.is_none()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_color_band_follows_ph() {
        let acidic = CurveSample { base_volume_ml: 0.0, ph: 1.0 };
        let neutral = CurveSample { base_volume_ml: 25.0, ph: 7.0 };
        let basic = CurveSample { base_volume_ml: 50.0, ph: 12.5 };

        assert_eq!(acidic.color_band(), ColorBand::StrongAcid);
        assert_eq!(neutral.color_band(), ColorBand::Neutral);
        assert_eq!(basic.color_band(), ColorBand::StrongBase);
    }

    #[test]
    fn test_sample_display() {
        let sample = CurveSample { base_volume_ml: 12.5, ph: 4.7447 };
        assert_eq!(format!("{}", sample), "12.50 mL -> pH 4.74");
    }

    #[test]
    fn test_status_terminal_flag() {
        assert!(!SessionStatus::Idle.is_terminal());
        assert!(!SessionStatus::Running.is_terminal());
        assert!(!SessionStatus::Stopped.is_terminal());
        assert!(SessionStatus::Finished.is_terminal());
    }

    #[test]
    fn test_noop_outcome_shape() {
        let outcome = StepOutcome::noop(SessionStatus::Finished);
        assert!(outcome.is_noop());
        assert!(!outcome.finished);
        assert!(!outcome.reached_equivalence);
        assert_eq!(outcome.status, SessionStatus::Finished);
    }
}
