//! Sustained-trend classification for a single dimension.
//!
//! This is a trend classifier, not a changepoint detector: it reports a
//! single global judgment over the whole window it is given. Callers who
//! want localized trends must pre-segment the input.

use crate::config::ProgressionConfig;
use crate::detect::{Pattern, MIN_SEQUENCE_LEN};
use crate::sample::{Dimension, Direction, EmotionSample};

/// Classify the window as one sustained progression, or nothing.
///
/// Deltas with a zero value are excluded from the consistency denominator;
/// a window with no movement at all yields `None`.
pub fn detect_progression(
    samples: &[EmotionSample],
    dimension: Dimension,
    config: &ProgressionConfig,
) -> Option<Pattern> {
    if samples.len() < config.min_points.max(MIN_SEQUENCE_LEN) {
        return None;
    }

    let values: Vec<f32> = samples
        .iter()
        .map(|sample| sample.vector.component(dimension))
        .collect();

    let mut positive = 0usize;
    let mut negative = 0usize;
    for pair in values.windows(2) {
        let delta = pair[1] - pair[0];
        if delta > 0.0 {
            positive += 1;
        } else if delta < 0.0 {
            negative += 1;
        }
    }

    let total = positive + negative;
    if total == 0 {
        return None;
    }
    let consistency = positive.max(negative) as f32 / total as f32;
    if consistency < config.min_consistency {
        return None;
    }

    let overall_change = values[values.len() - 1] - values[0];
    let strength = overall_change.abs().clamp(0.0, 1.0);
    if strength < config.min_strength {
        return None;
    }

    let direction = if overall_change > 0.0 {
        Direction::Increasing
    } else {
        Direction::Decreasing
    };

    Some(Pattern::Progression {
        dimension,
        direction,
        strength,
        start_time: samples[0].timestamp,
        end_time: samples[samples.len() - 1].timestamp,
        description: format!(
            "{} shows a sustained {} trend over {} samples ({:+.2} overall, {:.0}% consistent)",
            dimension.name(),
            direction.name(),
            samples.len(),
            overall_change,
            consistency * 100.0,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{generate_oscillating_sequence, generate_trending_sequence};

    fn config() -> ProgressionConfig {
        ProgressionConfig::default()
    }

    #[test]
    fn short_sequences_yield_nothing() {
        let samples = generate_trending_sequence(Dimension::Valence, 0.0, 0.9, 2);
        assert!(detect_progression(&samples, Dimension::Valence, &config()).is_none());
    }

    #[test]
    fn monotonic_increase_is_classified() {
        let samples = generate_trending_sequence(Dimension::Valence, -0.3, 0.6, 10);
        let pattern = detect_progression(&samples, Dimension::Valence, &config()).unwrap();

        match pattern {
            Pattern::Progression {
                dimension,
                direction,
                strength,
                start_time,
                end_time,
                ..
            } => {
                assert_eq!(dimension, Dimension::Valence);
                assert_eq!(direction, Direction::Increasing);
                assert!((strength - 0.9).abs() < 1e-5);
                assert_eq!(start_time, samples[0].timestamp);
                assert_eq!(end_time, samples[9].timestamp);
            }
            other => panic!("unexpected pattern {:?}", other),
        }
    }

    #[test]
    fn monotonic_decrease_is_classified() {
        let samples = generate_trending_sequence(Dimension::Dominance, 0.5, -0.2, 8);
        let pattern = detect_progression(&samples, Dimension::Dominance, &config()).unwrap();
        match pattern {
            Pattern::Progression { direction, .. } => {
                assert_eq!(direction, Direction::Decreasing)
            }
            other => panic!("unexpected pattern {:?}", other),
        }
    }

    #[test]
    fn inconsistent_movement_yields_nothing() {
        let samples = generate_oscillating_sequence(Dimension::Valence, 0.6, 4);
        assert!(detect_progression(&samples, Dimension::Valence, &config()).is_none());
    }

    #[test]
    fn weak_overall_change_yields_nothing() {
        let samples = generate_trending_sequence(Dimension::Arousal, 0.0, 0.1, 6);
        assert!(detect_progression(&samples, Dimension::Arousal, &config()).is_none());
    }

    #[test]
    fn flat_window_yields_nothing() {
        let samples = generate_trending_sequence(Dimension::Arousal, 0.4, 0.4, 6);
        assert!(detect_progression(&samples, Dimension::Arousal, &config()).is_none());
    }

    #[test]
    fn zero_deltas_do_not_dilute_consistency() {
        // Mostly rising with two flat plateaus: zero deltas are excluded
        // from the denominator, so consistency stays at 100%.
        let mut samples = generate_trending_sequence(Dimension::Valence, 0.0, 0.8, 9);
        samples[3].vector.valence = samples[2].vector.valence;
        samples[6].vector.valence = samples[5].vector.valence;

        let pattern = detect_progression(&samples, Dimension::Valence, &config());
        assert!(pattern.is_some());
    }
}
