//! Temporal pattern types and the full detection entry point.
//!
//! Each detector is a pure function of the normalized sample sequence; no
//! detector depends on another's output, so the aggregator fans the
//! per-dimension passes out with rayon and reassembles the results in a
//! fixed order. Output is therefore identical to the serial path.

pub mod dominance;
pub mod oscillation;
pub mod progression;
pub mod quadrant;

pub use dominance::detect_dominance;
pub use oscillation::detect_oscillations;
pub use progression::detect_progression;
pub use quadrant::{detect_quadrant_transitions, summarize_transitions, TransitionEdge};

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::sample::{Dimension, Direction, EmotionSample, Quadrant};

/// Detectors silently return nothing below this sequence length.
pub(crate) const MIN_SEQUENCE_LEN: usize = 3;

/// A detected temporal pattern, one variant per detector.
///
/// Patterns are immutable value objects created once per analysis call;
/// they are never persisted or mutated. Every variant carries a
/// `strength` in [0, 1], an inclusive `[start_time, end_time]` span, and
/// a generated natural-language `description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Pattern {
    /// Periodic back-and-forth movement within one dimension.
    Oscillation {
        dimension: Dimension,
        strength: f32,
        /// Estimated full-cycle duration in seconds.
        period_estimate_secs: f32,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        description: String,
    },
    /// Sustained monotonic trend within one dimension.
    Progression {
        dimension: Dimension,
        direction: Direction,
        strength: f32,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        description: String,
    },
    /// A single move between quadrants of the valence–arousal plane.
    QuadrantTransition {
        from: Quadrant,
        to: Quadrant,
        strength: f32,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        description: String,
    },
    /// Aggregate summary of repeated quadrant transitions.
    QuadrantCycle {
        /// Distinct transition edges ordered by frequency, most common first.
        edges: Vec<TransitionEdge>,
        strength: f32,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        description: String,
    },
    /// One dimension persistently dominating the signal.
    DimensionDominance {
        dimension: Dimension,
        strength: f32,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        description: String,
    },
}

/// Discriminant used for grouping patterns during insight generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Oscillation,
    Progression,
    QuadrantTransition,
    QuadrantCycle,
    DimensionDominance,
}

impl Pattern {
    pub fn kind(&self) -> PatternKind {
        match self {
            Pattern::Oscillation { .. } => PatternKind::Oscillation,
            Pattern::Progression { .. } => PatternKind::Progression,
            Pattern::QuadrantTransition { .. } => PatternKind::QuadrantTransition,
            Pattern::QuadrantCycle { .. } => PatternKind::QuadrantCycle,
            Pattern::DimensionDominance { .. } => PatternKind::DimensionDominance,
        }
    }

    pub fn strength(&self) -> f32 {
        match self {
            Pattern::Oscillation { strength, .. }
            | Pattern::Progression { strength, .. }
            | Pattern::QuadrantTransition { strength, .. }
            | Pattern::QuadrantCycle { strength, .. }
            | Pattern::DimensionDominance { strength, .. } => *strength,
        }
    }

    /// Inclusive time span covered by the pattern.
    pub fn span(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        match self {
            Pattern::Oscillation {
                start_time,
                end_time,
                ..
            }
            | Pattern::Progression {
                start_time,
                end_time,
                ..
            }
            | Pattern::QuadrantTransition {
                start_time,
                end_time,
                ..
            }
            | Pattern::QuadrantCycle {
                start_time,
                end_time,
                ..
            }
            | Pattern::DimensionDominance {
                start_time,
                end_time,
                ..
            } => (*start_time, *end_time),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Pattern::Oscillation { description, .. }
            | Pattern::Progression { description, .. }
            | Pattern::QuadrantTransition { description, .. }
            | Pattern::QuadrantCycle { description, .. }
            | Pattern::DimensionDominance { description, .. } => description,
        }
    }

    /// The dimension a single-dimension pattern refers to, if any.
    pub fn dimension(&self) -> Option<Dimension> {
        match self {
            Pattern::Oscillation { dimension, .. }
            | Pattern::Progression { dimension, .. }
            | Pattern::DimensionDominance { dimension, .. } => Some(*dimension),
            Pattern::QuadrantTransition { .. } | Pattern::QuadrantCycle { .. } => None,
        }
    }
}

/// Run every detector with default thresholds and concatenate the results.
///
/// Pure, deterministic and total: identical input always yields an
/// identical pattern list, and well-formed-but-empty input yields an
/// empty list rather than an error.
pub fn detect_temporal_patterns(samples: &[EmotionSample]) -> Vec<Pattern> {
    detect_temporal_patterns_with_config(samples, &EngineConfig::default())
}

/// Run every detector with explicit thresholds.
///
/// Output order is fixed: oscillations per dimension (valence, arousal,
/// dominance), then progressions, then dominance patterns, then quadrant
/// transitions, then the optional quadrant-cycle summary.
pub fn detect_temporal_patterns_with_config(
    samples: &[EmotionSample],
    config: &EngineConfig,
) -> Vec<Pattern> {
    let (dimension_passes, (dominance_patterns, transition_patterns)) = rayon::join(
        || {
            Dimension::ALL
                .par_iter()
                .map(|&dimension| {
                    (
                        oscillation::detect_oscillations(samples, dimension, &config.oscillation),
                        progression::detect_progression(samples, dimension, &config.progression),
                    )
                })
                .collect::<Vec<_>>()
        },
        || {
            rayon::join(
                || dominance::detect_dominance(samples, &config.dominance),
                || quadrant::detect_quadrant_transitions(samples),
            )
        },
    );

    let mut patterns = Vec::new();
    let mut progressions = Vec::new();
    for (oscillations, progression) in dimension_passes {
        patterns.extend(oscillations);
        progressions.extend(progression);
    }
    patterns.append(&mut progressions);
    patterns.extend(dominance_patterns);

    let cycle = quadrant::summarize_transitions(&transition_patterns);
    patterns.extend(transition_patterns);
    patterns.extend(cycle);

    patterns
}
