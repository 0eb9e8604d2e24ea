/// Largest absolute sample value in a buffer; 0 for an empty buffer
pub fn peak_amplitude(samples: &[f32]) -> f32 {
    samples.iter()
        .fold(0.0f32, |max, &sample| max.max(sample.abs()))
}

/// Format a frequency value with appropriate unit suffix (Hz, kHz)
pub fn format_frequency(freq: f32) -> String {
    if freq >= 1000.0 {
        format!("{:.2} kHz", freq / 1000.0)
    } else {
        format!("{:.1} Hz", freq)
    }
}

/// Format a time value with appropriate unit suffix (ms, s)
pub fn format_time(time_in_seconds: f32) -> String {
    if time_in_seconds >= 1.0 {
        format!("{:.2} s", time_in_seconds)
    } else {
        format!("{:.0} ms", time_in_seconds * 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_amplitude_finds_largest_magnitude() {
        assert_eq!(peak_amplitude(&[]), 0.0);
        assert_eq!(peak_amplitude(&[0.1, -0.9, 0.5]), 0.9);
    }

    #[test]
    fn frequency_formatting_picks_a_unit() {
        assert_eq!(format_frequency(440.0), "440.0 Hz");
        assert_eq!(format_frequency(1500.0), "1.50 kHz");
    }

    #[test]
    fn time_formatting_picks_a_unit() {
        assert_eq!(format_time(0.25), "250 ms");
        assert_eq!(format_time(60.0), "60.00 s");
    }
}
