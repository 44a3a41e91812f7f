//! titrate-rs: Acid-Base Titration Simulation Core
//!
//! A small, deterministic simulation core for acid-base titration:
//! closed-form equilibrium pH over three classic reaction regimes, a
//! stateful session that accumulates the titration curve, and output
//! helpers to render or export the result.
//!
//! # Architecture
//!
//! titrate-rs is built on two core principles:
//!
//! 1. **Separation of Chemistry and State**
//!    - The chemistry engine evaluates equations (what the pH is)
//!    - The session owns state and stepping (how the curve grows)
//!
//! 2. **A core that knows nothing about rendering**
//!    - The session emits plain data: samples, status, a color band enum
//!    - Plots and CSV files live in the optional output layer
//!
//! # Quick Start
//!
//! ```rust
//! use titrate_rs::chemistry::ReactionRegime;
//! use titrate_rs::session::{SessionConfig, TickDriver, TitrationSession};
//!
//! # fn main() -> Result<(), titrate_rs::error::TitrationError> {
//! // 1. Configure the titration
//! let config = SessionConfig::new(ReactionRegime::WeakAcidStrongBase);
//!
//! // 2. Create the session (initial sample at 0 mL is appended)
//! let mut session = TitrationSession::new(config)?;
//!
//! // 3. Run the continuous process to the burette cap
//! let driver = TickDriver::default();
//! let summary = driver.run_to_completion(&mut session)?;
//!
//! // 4. Read the curve
//! println!("{} samples, final pH {:.2}", summary.samples, summary.final_ph);
//! if let Some(eq) = session.equivalence_point() {
//!     println!("equivalence at {:.1} mL", eq);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`chemistry`]: pure pH engine (equations)
//! - [`session`]: state machine and stepping process
//! - [`output`]: curve rendering and CSV export
//! - [`error`]: error kinds shared by engine and session

// Core modules
pub mod chemistry;
pub mod error;
pub mod output;
pub mod session;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use titrate_rs::prelude::*;
    //! ```
    pub use crate::chemistry::{
        classify_solution_color,
        compute_ph,
        equivalence_volume_ml,
        ColorBand,
        ReactionRegime,
    };
    pub use crate::error::{Result, TitrationError};
    pub use crate::session::{
        CurveSample,
        RunSummary,
        SessionConfig,
        SessionStatus,
        StepOutcome,
        TickDriver,
        TitrationSession,
    };
}
