use rand::Rng;

use super::waveform::{noise, square_wave, triangle_wave, Waveform};

// Structure representing a single note: one contiguous segment of
// generated waveform. Built fresh for every sequencer iteration and
// consumed by a single render call.
#[derive(Debug, Clone)]
pub struct Note {
    pub waveform: Waveform,
    pub frequency: f32,
    pub duration: f32,
    pub amplitude: f32,
}

impl Note {
    /// Render this note into a sample buffer. Noise ignores the pitch.
    pub fn render<R: Rng>(&self, sample_rate: u32, rng: &mut R) -> Vec<f32> {
        match self.waveform {
            Waveform::Square => {
                square_wave(self.frequency, self.duration, self.amplitude, sample_rate)
            }
            Waveform::Triangle => {
                triangle_wave(self.frequency, self.duration, self.amplitude, sample_rate)
            }
            Waveform::Noise => noise(self.duration, self.amplitude, sample_rate, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn square_note_matches_direct_generator() {
        let note = Note {
            waveform: Waveform::Square,
            frequency: 440.0,
            duration: 0.2,
            amplitude: 0.5,
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            note.render(44100, &mut rng),
            square_wave(440.0, 0.2, 0.5, 44100)
        );
    }

    #[test]
    fn noise_note_ignores_pitch() {
        let low = Note {
            waveform: Waveform::Noise,
            frequency: 261.63,
            duration: 0.1,
            amplitude: 0.5,
        };
        let high = Note { frequency: 523.25, ..low.clone() };

        let a = low.render(44100, &mut StdRng::seed_from_u64(3));
        let b = high.render(44100, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn note_buffer_spans_its_duration() {
        let note = Note {
            waveform: Waveform::Triangle,
            frequency: 329.63,
            duration: 0.37,
            amplitude: 0.5,
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(note.render(44100, &mut rng).len(), (44100.0f32 * 0.37) as usize);
    }
}
