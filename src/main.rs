use censusplot::{load_census_csv, run_censusplot, CensusPlotConfig};

/// Bundled sample dataset, resolved relative to the crate root.
const DATA_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/data.csv");

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Load failure is logged and otherwise ignored: the window opens with an
    // empty chart.
    let records = match load_census_csv(DATA_PATH) {
        Ok(records) => records,
        Err(e) => {
            log::error!("failed to load census data: {e:#}");
            Vec::new()
        }
    };

    run_censusplot(records, CensusPlotConfig::default())
}
