//! Performance benchmarks for the titration core
//!
//! # What We're Measuring
//!
//! 1. **Engine evaluation** (`compute_ph`):
//!    - One closed-form branch per call, no allocation
//!    - Compared across the three regimes (the weak regimes pay for a
//!      sqrt and an extra log)
//!
//! 2. **Full session runs** (`run_to_completion`):
//!    - 500 fine doses of 0.1 mL to the 50 mL cap
//!    - Dominated by curve growth and per-step bookkeeping
//!
//! # Running Benchmarks
//!
//! ```bash
//! # All benchmarks
//! cargo bench --bench titration_performance
//!
//! # Engine only
//! cargo bench --bench titration_performance engine
//!
//! # Session runs only
//! cargo bench --bench titration_performance session
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use titrate_rs::chemistry::{compute_ph, ReactionRegime};
use titrate_rs::session::{SessionConfig, TickDriver, TitrationSession};

/// Engine evaluation across regimes and regions of the curve
fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    for regime in ReactionRegime::ALL {
        group.bench_function(regime.name(), |b| {
            b.iter(|| {
                // One pre-equivalence, one equivalence, one post-equivalence call
                let a = compute_ph(regime, black_box(0.0025), black_box(0.0010), 0.035).unwrap();
                let e = compute_ph(regime, black_box(0.0025), black_box(0.0025), 0.050).unwrap();
                let p = compute_ph(regime, black_box(0.0025), black_box(0.0040), 0.065).unwrap();
                a + e + p
            })
        });
    }

    group.finish();
}

/// Full titration runs with the default fine increment
fn bench_session_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    for regime in ReactionRegime::ALL {
        group.bench_function(regime.name(), |b| {
            let driver = TickDriver::default();
            b.iter(|| {
                let mut session =
                    TitrationSession::new(SessionConfig::new(regime)).unwrap();
                driver.run_to_completion(black_box(&mut session)).unwrap()
            })
        });
    }

    group.finish();
}

/// Coarse manual dosing, the interactive path
fn bench_manual_dosing(c: &mut Criterion) {
    c.bench_function("manual_dosing_1ml", |b| {
        b.iter(|| {
            let mut session = TitrationSession::new(SessionConfig::default()).unwrap();
            while !session.add_discrete(black_box(1.0)).unwrap().is_noop() {}
            session.samples().len()
        })
    });
}

criterion_group!(benches, bench_engine, bench_session_runs, bench_manual_dosing);
criterion_main!(benches);
