use serde::{Serialize, Deserialize};
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};

use super::NOTES_FREQ;
use crate::core::oscillator::Waveform;

/// Complete set of generation settings, persisted as pretty JSON.
///
/// Every field has a default matching the built-in chiptune constants,
/// so a config file only needs to name the fields it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Output sample rate in Hz
    pub sample_rate: u32,
    /// Total length of the generated sequence in seconds
    pub duration: f32,
    /// Peak amplitude of every note
    pub amplitude: f32,
    /// Note length bounds in seconds, drawn uniformly
    pub min_note_duration: f32,
    pub max_note_duration: f32,
    /// Pitches a note may land on, in Hz
    pub scale: Vec<f32>,
    /// Waveform kinds the sequencer may pick from
    pub waveforms: Vec<Waveform>,
    /// Fixed RNG seed; OS entropy when absent
    pub seed: Option<u64>,
    /// Path of the WAV file to write
    pub output: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            duration: 60.0,
            amplitude: 0.5,
            min_note_duration: 0.1,
            max_note_duration: 0.5,
            scale: NOTES_FREQ.to_vec(),
            waveforms: vec![Waveform::Square, Waveform::Triangle, Waveform::Noise],
            seed: None,
            output: PathBuf::from("chiptune_sequence.wav"),
        }
    }
}

impl GeneratorConfig {
    /// Load a config from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load `path` when it exists, fall back to the defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save the config to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Reject settings the generator cannot run with.
    ///
    /// The waveform kind set is a closed enum, so there is no unknown
    /// kind to check for, only emptiness.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            bail!("sample_rate must be positive");
        }
        if self.amplitude <= 0.0 || self.amplitude > 1.0 {
            bail!("amplitude must be in (0, 1]");
        }
        if self.min_note_duration <= 0.0 {
            bail!("min_note_duration must be positive");
        }
        if self.max_note_duration < self.min_note_duration {
            bail!("max_note_duration must not be below min_note_duration");
        }
        if self.scale.is_empty() {
            bail!("scale must contain at least one pitch");
        }
        if self.scale.iter().any(|f| *f <= 0.0) {
            bail!("scale pitches must be positive");
        }
        if self.waveforms.is_empty() {
            bail!("waveforms must contain at least one kind");
        }
        Ok(())
    }
}
