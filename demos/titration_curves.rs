//! Demo: the three classroom titrations side by side
//!
//! Runs a full fine-dosed titration for each reaction regime with the
//! same classroom setup (25 mL of 0.1 M analyte, 0.1 M titrant, 50 mL
//! cap), then:
//!
//! - prints the reference points of each curve,
//! - renders all three curves on one comparison plot,
//! - exports the curves to a shared CSV for spreadsheet analysis.
//!
//! Run with:
//!
//! ```bash
//! cargo run --example titration_curves
//! ```

use titrate_rs::chemistry::ReactionRegime;
use titrate_rs::output::{
    export_curves_multi_csv, plot_titration_curves_comparison, CsvConfig, CsvMetadata, PlotConfig,
};
use titrate_rs::session::{SessionConfig, TickDriver, TitrationSession};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Acid-Base Titration - Regime Comparison");
    println!("═══════════════════════════════════════════════════════\n");

    let driver = TickDriver::default();
    let mut sessions = Vec::new();

    for regime in ReactionRegime::ALL {
        let mut session = TitrationSession::new(SessionConfig::new(regime))?;
        let summary = driver.run_to_completion(&mut session)?;

        println!("{}", regime.pairing());
        println!("  initial pH      : {:.2}", session.samples()[0].ph);
        if let Some(eq) = session.equivalence_point() {
            println!("  equivalence     : {:.1} mL", eq);
        }
        println!("  final pH        : {:.2}", summary.final_ph);
        println!("  color band      : {}", session.current_color_band());
        println!("  samples         : {}\n", summary.samples);

        sessions.push(session);
    }

    // ====== Comparison plot ======

    let config = PlotConfig::comparison("Titration Curves: Three Classic Regimes");
    let datasets: Vec<(&str, &TitrationSession)> = sessions
        .iter()
        .map(|session| (session.config().regime.name(), session))
        .collect();

    plot_titration_curves_comparison(datasets, "titration_comparison.png", Some(&config))?;
    println!("wrote titration_comparison.png");

    // ====== Shared CSV export ======

    // Every run used the same dosing schedule, so the volume axes match
    let volumes: Vec<f64> = sessions[0]
        .samples()
        .iter()
        .map(|s| s.base_volume_ml)
        .collect();
    let ph_series: Vec<Vec<f64>> = sessions
        .iter()
        .map(|session| session.samples().iter().map(|s| s.ph).collect())
        .collect();
    let labels: Vec<&str> = sessions
        .iter()
        .map(|session| session.config().regime.name())
        .collect();

    let mut metadata = CsvMetadata::from_session(&sessions[0]);
    metadata.regime = None; // the columns carry the regime names
    let csv_config = CsvConfig::default().with_metadata(metadata);

    export_curves_multi_csv(
        &volumes,
        &ph_series,
        &labels,
        "titration_comparison.csv",
        Some(&csv_config),
    )?;
    println!("wrote titration_comparison.csv");

    Ok(())
}
