//! Oscillation detection via sign-alternation runs.
//!
//! An oscillation is evidenced by a maximal run of consecutive deltas with
//! strictly alternating signs. Zero deltas break a run. A run qualifies
//! when it spans enough samples and its mean peak-to-trough swing clears
//! the amplitude floor; strength is that mean swing normalised by the
//! full-scale [-1, 1] range.

use crate::config::OscillationConfig;
use crate::detect::{Pattern, MIN_SEQUENCE_LEN};
use crate::sample::{Dimension, EmotionSample};

/// Full-scale peak-to-trough swing across the nominal [-1, 1] range.
const FULL_SCALE_SWING: f32 = 2.0;

/// Detect oscillations of `dimension` within a normalized sequence.
///
/// Returns zero or more patterns, each spanning the sub-range of samples
/// in which the alternation holds. Too little data or no qualifying run
/// is the expected "no pattern" outcome, not an error.
pub fn detect_oscillations(
    samples: &[EmotionSample],
    dimension: Dimension,
    config: &OscillationConfig,
) -> Vec<Pattern> {
    if samples.len() < config.min_points.max(MIN_SEQUENCE_LEN) {
        return Vec::new();
    }

    let values: Vec<f32> = samples
        .iter()
        .map(|sample| sample.vector.component(dimension))
        .collect();
    let deltas: Vec<f32> = values.windows(2).map(|pair| pair[1] - pair[0]).collect();

    let mut patterns = Vec::new();
    let mut run_start: Option<usize> = None;

    for idx in 1..deltas.len() {
        if alternates(deltas[idx - 1], deltas[idx]) {
            run_start.get_or_insert(idx - 1);
        } else if let Some(start) = run_start.take() {
            if let Some(pattern) = emit_run(samples, &deltas, dimension, start, idx - 1, config) {
                patterns.push(pattern);
            }
        }
    }
    if let Some(start) = run_start {
        if let Some(pattern) = emit_run(samples, &deltas, dimension, start, deltas.len() - 1, config)
        {
            patterns.push(pattern);
        }
    }

    patterns
}

fn alternates(previous: f32, current: f32) -> bool {
    previous != 0.0 && current != 0.0 && (previous > 0.0) != (current > 0.0)
}

/// Evaluate the delta run `[start, end]` (inclusive) and build a pattern
/// if it qualifies. The run covers samples `start ..= end + 1`.
fn emit_run(
    samples: &[EmotionSample],
    deltas: &[f32],
    dimension: Dimension,
    start: usize,
    end: usize,
    config: &OscillationConfig,
) -> Option<Pattern> {
    let sample_count = end - start + 2;
    if sample_count < config.min_points.max(MIN_SEQUENCE_LEN) {
        return None;
    }

    let run = &deltas[start..=end];
    let mean_swing = run.iter().map(|delta| delta.abs()).sum::<f32>() / run.len() as f32;
    if mean_swing < config.min_amplitude {
        return None;
    }

    let start_time = samples[start].timestamp;
    let end_time = samples[end + 1].timestamp;
    let span_secs = (end_time - start_time).num_milliseconds() as f32 / 1000.0;
    // Two alternating swings make up one full cycle.
    let period_estimate_secs = 2.0 * span_secs / run.len() as f32;
    let strength = (mean_swing / FULL_SCALE_SWING).clamp(0.0, 1.0);

    Some(Pattern::Oscillation {
        dimension,
        strength,
        period_estimate_secs,
        start_time,
        end_time,
        description: format!(
            "{} oscillates across {} samples with an average swing of {:.2} (cycle ~{:.0}s)",
            dimension.name(),
            sample_count,
            mean_swing,
            period_estimate_secs,
        ),
    })
}
