//! Synthetic emotion sequence generation for tests, benches and demos.
//!
//! All generators are deterministic: timestamps start at a fixed epoch
//! with a 60-second step, and the only randomness comes from an explicit
//! seed.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sample::{Dimension, EmotionSample, EmotionVector};

const BASE_EPOCH_SECS: i64 = 1_700_000_000;
const STEP_SECS: i64 = 60;

fn base_time() -> DateTime<Utc> {
    Utc.timestamp_opt(BASE_EPOCH_SECS, 0).unwrap()
}

fn sequence_from_values(
    dimension: Dimension,
    values: impl IntoIterator<Item = f32>,
) -> Vec<EmotionSample> {
    values
        .into_iter()
        .enumerate()
        .map(|(idx, value)| {
            let mut vector = EmotionVector::new(0.0, 0.0, 0.0);
            match dimension {
                Dimension::Valence => vector.valence = value,
                Dimension::Arousal => vector.arousal = value,
                Dimension::Dominance => vector.dominance = value,
            }
            EmotionSample::new(
                base_time() + Duration::seconds(idx as i64 * STEP_SECS),
                vector,
            )
        })
        .collect()
}

/// A square-wave oscillation alternating between `+amplitude` and
/// `-amplitude`, two samples per cycle, `2 * cycles + 1` samples total.
pub fn generate_oscillating_sequence(
    dimension: Dimension,
    amplitude: f32,
    cycles: usize,
) -> Vec<EmotionSample> {
    let values = (0..=2 * cycles).map(move |idx| {
        if idx % 2 == 0 {
            amplitude
        } else {
            -amplitude
        }
    });
    sequence_from_values(dimension, values)
}

/// A sampled sinusoid in one dimension; the other two stay at zero.
///
/// `periods * samples_per_period + 1` samples covering whole periods.
pub fn generate_sinusoidal_sequence(
    dimension: Dimension,
    amplitude: f32,
    periods: usize,
    samples_per_period: usize,
) -> Vec<EmotionSample> {
    let len = periods * samples_per_period.max(2);
    let step = std::f32::consts::TAU / samples_per_period.max(2) as f32;
    let values = (0..=len).map(move |idx| amplitude * (idx as f32 * step).sin());
    sequence_from_values(dimension, values)
}

/// A linear ramp from `start` to `end` over `len` samples.
pub fn generate_trending_sequence(
    dimension: Dimension,
    start: f32,
    end: f32,
    len: usize,
) -> Vec<EmotionSample> {
    let divisor = len.saturating_sub(1).max(1) as f32;
    let values = (0..len).map(move |idx| start + (end - start) * idx as f32 / divisor);
    sequence_from_values(dimension, values)
}

/// A sequence where one dimension holds a constant magnitude and the
/// other two stay at zero.
pub fn generate_dominant_sequence(
    dimension: Dimension,
    magnitude: f32,
    len: usize,
) -> Vec<EmotionSample> {
    sequence_from_values(dimension, (0..len).map(move |_| magnitude))
}

/// Alternating excited/depressed states on the valence–arousal plane.
pub fn generate_quadrant_cycle_sequence(len: usize) -> Vec<EmotionSample> {
    (0..len)
        .map(|idx| {
            let sign = if idx % 2 == 0 { 1.0 } else { -1.0 };
            EmotionSample::new(
                base_time() + Duration::seconds(idx as i64 * STEP_SECS),
                EmotionVector::new(0.6 * sign, 0.6 * sign, 0.0),
            )
        })
        .collect()
}

/// Low-magnitude random noise on all three dimensions.
///
/// Useful as a "no strong pattern" baseline; `seed` makes runs
/// reproducible.
pub fn generate_noisy_baseline(len: usize, noise: f32, seed: u64) -> Vec<EmotionSample> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|idx| {
            let component = |rng: &mut StdRng| (rng.gen::<f32>() * 2.0 - 1.0) * noise;
            EmotionSample::new(
                base_time() + Duration::seconds(idx as i64 * STEP_SECS),
                EmotionVector::new(
                    component(&mut rng),
                    component(&mut rng),
                    component(&mut rng),
                ),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_are_deterministic() {
        let a = generate_noisy_baseline(20, 0.1, 7);
        let b = generate_noisy_baseline(20, 0.1, 7);
        assert_eq!(a, b);

        let c = generate_noisy_baseline(20, 0.1, 8);
        assert_ne!(a, c);
    }

    #[test]
    fn timestamps_are_strictly_increasing() {
        let samples = generate_sinusoidal_sequence(Dimension::Valence, 0.5, 3, 4);
        for pair in samples.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
        }
    }

    #[test]
    fn trending_sequence_hits_both_endpoints() {
        let samples = generate_trending_sequence(Dimension::Arousal, -0.4, 0.8, 7);
        assert!((samples[0].vector.arousal + 0.4).abs() < 1e-6);
        assert!((samples[6].vector.arousal - 0.8).abs() < 1e-6);
    }

    #[test]
    fn oscillating_sequence_alternates_sign() {
        let samples = generate_oscillating_sequence(Dimension::Dominance, 0.7, 3);
        assert_eq!(samples.len(), 7);
        for pair in samples.windows(2) {
            assert!(pair[0].vector.dominance * pair[1].vector.dominance < 0.0);
        }
    }
}
