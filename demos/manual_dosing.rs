//! Demo: manual dosing with a live observer
//!
//! Mimics the interactive workflow: small 0.1 mL and large 1.0 mL doses
//! added by hand, with an observer printing each new sample the moment
//! it is committed, announcing the equivalence crossing and the end of
//! the titration.
//!
//! Run with:
//!
//! ```bash
//! cargo run --example manual_dosing
//! ```

use titrate_rs::chemistry::ReactionRegime;
use titrate_rs::output::plot_titration_curve;
use titrate_rs::session::{SessionConfig, TitrationSession};

/// Small dose button \[mL\]
const SMALL_DOSE_ML: f64 = 0.1;

/// Large dose button \[mL\]
const LARGE_DOSE_ML: f64 = 1.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Acid-Base Titration - Manual Dosing");
    println!("═══════════════════════════════════════════════════════\n");

    let config = SessionConfig::new(ReactionRegime::WeakAcidStrongBase);
    let mut session = TitrationSession::new(config)?;

    println!("{}\n", session.config().regime.pairing());

    session.set_observer(Box::new(|outcome| {
        if let Some(sample) = outcome.sample {
            println!(
                "  {:>6.1} mL -> pH {:>5.2}  [{}]",
                sample.base_volume_ml,
                sample.ph,
                sample.color_band()
            );
        }
        if outcome.reached_equivalence {
            println!("  *** equivalence point reached ***");
        }
        if outcome.finished {
            println!("  *** burette empty, titration finished ***");
        }
    }));

    // Approach the equivalence region with large doses
    for _ in 0..23 {
        session.add_discrete(LARGE_DOSE_ML)?;
    }

    // Creep across equivalence with small doses
    println!("\n  switching to {} mL doses near equivalence\n", SMALL_DOSE_ML);
    for _ in 0..30 {
        session.add_discrete(SMALL_DOSE_ML)?;
    }

    // Empty the burette
    println!("\n  emptying the burette\n");
    while !session.add_discrete(LARGE_DOSE_ML)?.is_noop() {}

    println!("\nfinal status: {}", session.status());
    println!("final pH    : {:.2}", session.current_ph());

    plot_titration_curve(&session, "manual_dosing.png", None)?;
    println!("wrote manual_dosing.png");

    Ok(())
}
