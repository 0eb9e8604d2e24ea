use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

mod core;
mod utils;

use crate::core::audio;
use crate::core::sequencer::config::GeneratorConfig;
use crate::core::Sequencer;
use crate::utils::helpers::{format_time, peak_amplitude};

/// Config file picked up from the working directory when present.
const CONFIG_PATH: &str = "chipgen.json";

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = GeneratorConfig::load_or_default(Path::new(CONFIG_PATH))?;
    config.validate().context("Invalid generation config")?;

    info!(
        "Generating {} of chiptune audio at {} Hz",
        format_time(config.duration),
        config.sample_rate
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let started = Instant::now();
    let sequencer = Sequencer::from_config(&config);
    let samples = sequencer.generate(config.duration, &mut rng);

    info!(
        "Generated {} samples (peak amplitude {:.3}) in {}",
        samples.len(),
        peak_amplitude(&samples),
        format_time(started.elapsed().as_secs_f32())
    );

    audio::write_wav(&config.output, config.sample_rate, &samples)?;
    info!("Wrote {}", config.output.display());

    Ok(())
}
