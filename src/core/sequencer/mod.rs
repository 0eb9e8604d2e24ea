pub mod config;

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::core::oscillator::{Note, Waveform};
use crate::utils::helpers::format_frequency;
use config::GeneratorConfig;

/// One octave of the C major scale, C4 through C5.
pub const NOTES_FREQ: [f32; 8] = [
    261.63, 293.66, 329.63, 349.23, 392.00, 440.00, 493.88, 523.25,
];

/// Main sequencing engine: draws random notes and splices them into a
/// single continuous sample buffer.
pub struct Sequencer {
    pub sample_rate: u32,
    pub amplitude: f32,
    pub min_note_duration: f32,
    pub max_note_duration: f32,
    pub scale: Vec<f32>,
    pub waveforms: Vec<Waveform>,
}

impl Sequencer {
    /// Create a sequencer with the default chiptune parameters.
    pub fn new(sample_rate: u32) -> Self {
        Sequencer {
            sample_rate,
            amplitude: 0.5,
            min_note_duration: 0.1,
            max_note_duration: 0.5,
            scale: NOTES_FREQ.to_vec(),
            waveforms: vec![Waveform::Square, Waveform::Triangle, Waveform::Noise],
        }
    }

    /// Apply generation settings from a config.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Sequencer {
            sample_rate: config.sample_rate,
            amplitude: config.amplitude,
            min_note_duration: config.min_note_duration,
            max_note_duration: config.max_note_duration,
            scale: config.scale.clone(),
            waveforms: config.waveforms.clone(),
        }
    }

    /// Draw one random note: kind and pitch uniform over the configured
    /// sets, duration uniform over the configured range.
    pub fn random_note<R: Rng>(&self, rng: &mut R) -> Note {
        Note {
            waveform: self
                .waveforms
                .choose(rng)
                .copied()
                .unwrap_or(Waveform::Square),
            frequency: self.scale.choose(rng).copied().unwrap_or(NOTES_FREQ[0]),
            duration: rng.random_range(self.min_note_duration..=self.max_note_duration),
            amplitude: self.amplitude,
        }
    }

    /// Number of samples a buffer spanning `duration` must hold.
    pub fn target_samples(&self, duration: f32) -> usize {
        // f64 keeps minute-scale targets sample-exact
        (self.sample_rate as f64 * duration as f64).round() as usize
    }

    /// Generate a random note sequence of exactly
    /// `round(sample_rate * target_duration)` samples.
    ///
    /// The loop only exits once the accumulated note time reaches the
    /// target, overshooting by at most one note, so truncation is the
    /// only length adjustment ever applied.
    pub fn generate<R: Rng>(&self, target_duration: f32, rng: &mut R) -> Vec<f32> {
        let target = self.target_samples(target_duration);
        let mut sequence: Vec<f32> = Vec::with_capacity(target);
        let mut elapsed = 0.0f32;

        while elapsed < target_duration {
            let note = self.random_note(rng);
            debug!(
                "note: {:?} at {} for {:.3} s",
                note.waveform,
                format_frequency(note.frequency),
                note.duration
            );
            sequence.extend(note.render(self.sample_rate, rng));
            elapsed += note.duration;
        }

        sequence.truncate(target);
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sequence_has_exact_sample_count() {
        let seq = Sequencer::new(8000);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(seq.generate(1.0, &mut rng).len(), 8000);
        assert_eq!(seq.generate(2.5, &mut rng).len(), 20000);
    }

    #[test]
    fn zero_or_negative_duration_yields_empty_sequence() {
        let seq = Sequencer::new(44100);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(seq.generate(0.0, &mut rng).is_empty());
        assert!(seq.generate(-3.0, &mut rng).is_empty());
    }

    #[test]
    fn sequence_is_truncation_only() {
        // Target shorter than the minimum note duration: the single
        // overshooting note must still truncate to the exact target,
        // and no padding path exists to reach.
        let seq = Sequencer::new(44100);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(seq.generate(0.05, &mut rng).len(), 2205);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let seq = Sequencer::new(11025);
        let a = seq.generate(2.0, &mut StdRng::seed_from_u64(42));
        let b = seq.generate(2.0, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn one_second_buffer_is_finite_and_bounded() {
        let seq = Sequencer::new(44100);
        let mut rng = StdRng::seed_from_u64(7);
        let samples = seq.generate(1.0, &mut rng);
        assert_eq!(samples.len(), 44100);
        for &s in &samples {
            assert!(s.is_finite());
            assert!(s.abs() <= 0.5, "sample out of range: {s}");
        }
    }

    #[test]
    fn random_note_respects_configured_ranges() {
        let seq = Sequencer::new(44100);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let note = seq.random_note(&mut rng);
            assert!(note.duration >= 0.1 && note.duration <= 0.5);
            assert!(NOTES_FREQ.contains(&note.frequency));
            assert!(seq.waveforms.contains(&note.waveform));
            assert_eq!(note.amplitude, 0.5);
        }
    }

    #[test]
    fn narrowed_waveform_set_is_honored() {
        let mut seq = Sequencer::new(8000);
        seq.waveforms = vec![Waveform::Triangle];
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            assert_eq!(seq.random_note(&mut rng).waveform, Waveform::Triangle);
        }
    }
}
