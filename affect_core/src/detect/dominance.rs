//! Dimension dominance detection.
//!
//! Counts, per sample, which dimension wins the arg-max by absolute value
//! (ties keep canonical order), crediting the win only when the winner
//! clears the strength floor. A dimension dominating a large enough share
//! of the window yields at most one pattern, so a call returns zero to
//! three patterns in canonical dimension order.

use crate::config::DominanceConfig;
use crate::detect::{Pattern, MIN_SEQUENCE_LEN};
use crate::sample::{Dimension, EmotionSample};

/// Detect persistently dominant dimensions across the full window.
pub fn detect_dominance(samples: &[EmotionSample], config: &DominanceConfig) -> Vec<Pattern> {
    if samples.len() < MIN_SEQUENCE_LEN {
        return Vec::new();
    }

    let mut win_counts = [0usize; 3];
    for sample in samples {
        let mut winner = 0usize;
        let mut winner_abs = sample.vector.component(Dimension::ALL[0]).abs();
        for (idx, dimension) in Dimension::ALL.iter().enumerate().skip(1) {
            let magnitude = sample.vector.component(*dimension).abs();
            if magnitude > winner_abs {
                winner = idx;
                winner_abs = magnitude;
            }
        }
        // Samples where no dimension clears the floor credit nobody.
        if winner_abs >= config.min_strength {
            win_counts[winner] += 1;
        }
    }

    let mut patterns = Vec::new();
    for (idx, dimension) in Dimension::ALL.iter().enumerate() {
        let count = win_counts[idx];
        let ratio = count as f32 / samples.len() as f32;
        if ratio < config.min_ratio || count < config.min_points {
            continue;
        }

        let nonzero: Vec<f32> = samples
            .iter()
            .map(|sample| sample.vector.component(*dimension))
            .filter(|value| *value != 0.0)
            .collect();
        if nonzero.is_empty() {
            continue;
        }
        let mean_abs = nonzero.iter().map(|value| value.abs()).sum::<f32>() / nonzero.len() as f32;

        let strength = (mean_abs * ratio).clamp(0.0, 1.0);
        if strength < config.min_strength {
            continue;
        }

        patterns.push(Pattern::DimensionDominance {
            dimension: *dimension,
            strength,
            start_time: samples[0].timestamp,
            end_time: samples[samples.len() - 1].timestamp,
            description: format!(
                "{} dominates the emotional signal in {:.0}% of {} samples (mean magnitude {:.2})",
                dimension.name(),
                ratio * 100.0,
                samples.len(),
                mean_abs,
            ),
        });
    }

    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{generate_dominant_sequence, generate_trending_sequence};

    fn config() -> DominanceConfig {
        DominanceConfig::default()
    }

    #[test]
    fn short_sequences_yield_nothing() {
        let samples = generate_dominant_sequence(Dimension::Arousal, 0.8, 2);
        assert!(detect_dominance(&samples, &config()).is_empty());
    }

    #[test]
    fn persistent_dimension_is_reported_once() {
        let samples = generate_dominant_sequence(Dimension::Arousal, 0.6, 10);
        let patterns = detect_dominance(&samples, &config());

        assert_eq!(patterns.len(), 1);
        match &patterns[0] {
            Pattern::DimensionDominance {
                dimension,
                strength,
                ..
            } => {
                assert_eq!(*dimension, Dimension::Arousal);
                assert!(*strength > 0.25);
                assert!(*strength <= 1.0);
            }
            other => panic!("unexpected pattern {:?}", other),
        }
    }

    #[test]
    fn weak_magnitudes_credit_nobody() {
        let samples = generate_dominant_sequence(Dimension::Valence, 0.1, 10);
        assert!(detect_dominance(&samples, &config()).is_empty());
    }

    #[test]
    fn split_dominance_below_ratio_yields_nothing() {
        // Valence and arousal alternate as the winner, so neither reaches
        // the 70% ratio.
        let mut samples = generate_dominant_sequence(Dimension::Valence, 0.6, 10);
        for (idx, sample) in samples.iter_mut().enumerate() {
            if idx % 2 == 0 {
                sample.vector.valence = 0.1;
                sample.vector.arousal = 0.6;
            }
        }
        assert!(detect_dominance(&samples, &config()).is_empty());
    }

    #[test]
    fn ties_credit_the_canonical_first_dimension() {
        let mut samples = generate_trending_sequence(Dimension::Valence, 0.5, 0.5, 6);
        for sample in &mut samples {
            sample.vector.arousal = 0.5;
        }

        let patterns = detect_dominance(&samples, &config());
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].dimension(), Some(Dimension::Valence));
    }
}
