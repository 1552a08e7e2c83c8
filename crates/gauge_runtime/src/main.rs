//! Gauge Runtime
//!
//! Demo binary that streams synthetic sensor readings through an accumulator
//! and reports per-interval statistics

mod settings;
mod source;

use std::path::Path;

use anyhow::Result;
use gauge_core::Accumulator;
use tracing_subscriber;

use crate::settings::Settings;
use crate::source::SyntheticSource;

/// Readings kept for the diagnostic history dump.
const RETAINED: usize = 16;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::info!("Gauge v{}", gauge_core::VERSION);

    let settings = Settings::load(Path::new("gauge.json"))?;
    tracing::info!(
        samples = settings.samples,
        report_every = settings.report_every,
        "settings loaded"
    );

    let mut acc = Accumulator::<RETAINED>::new();
    let mut source = SyntheticSource::new(&settings.source);
    let report_every = settings.report_every.max(1);

    for n in 1..=settings.samples {
        acc.include(source.next_reading());

        if n % report_every == 0 {
            let interval = acc.summary();
            tracing::info!(
                count = interval.count,
                average = interval.average,
                min = interval.min,
                max = interval.max,
                "interval report"
            );
            acc.print_retained();

            // Restart the interval average; the all-time extrema keep running
            acc.reset_avg();
        }
    }

    tracing::info!("final summary: {}", serde_json::to_string(&acc.summary())?);

    Ok(())
}
