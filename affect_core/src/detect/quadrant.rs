//! Quadrant transition detection over the valence–arousal projection.
//!
//! The plane splits into four named quadrants by the sign of each axis
//! (see [`Quadrant::from_components`] for the `>= 0` tie-break). A first
//! pass emits one transition per consecutive quadrant change; a second
//! pass groups repeated edges into a single cycle summary.

use serde::{Deserialize, Serialize};

use crate::detect::{Pattern, MIN_SEQUENCE_LEN};
use crate::sample::{EmotionSample, Quadrant};

/// Largest possible move across the [-1, 1]² valence–arousal plane.
const MAX_PLANE_DISTANCE: f32 = 2.0 * std::f32::consts::SQRT_2;

/// A distinct from → to transition edge with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEdge {
    pub from: Quadrant,
    pub to: Quadrant,
    pub count: usize,
}

/// Walk consecutive samples and emit one transition per quadrant change.
///
/// No transition is emitted while consecutive samples share a quadrant, so
/// `n` samples yield at most `n - 1` transitions. Strength is the length
/// of the move across the plane, normalised to [0, 1].
pub fn detect_quadrant_transitions(samples: &[EmotionSample]) -> Vec<Pattern> {
    if samples.len() < MIN_SEQUENCE_LEN {
        return Vec::new();
    }

    let mut transitions = Vec::new();
    for pair in samples.windows(2) {
        let from = pair[0].quadrant();
        let to = pair[1].quadrant();
        if from == to {
            continue;
        }

        let dv = pair[1].vector.valence - pair[0].vector.valence;
        let da = pair[1].vector.arousal - pair[0].vector.arousal;
        let strength = ((dv * dv + da * da).sqrt() / MAX_PLANE_DISTANCE).clamp(0.0, 1.0);

        transitions.push(Pattern::QuadrantTransition {
            from,
            to,
            strength,
            start_time: pair[0].timestamp,
            end_time: pair[1].timestamp,
            description: format!("emotional state shifted from {} to {}", from, to),
        });
    }
    transitions
}

/// Group repeated transition edges into a single cycle summary.
///
/// Takes the output of [`detect_quadrant_transitions`] (non-transition
/// patterns are ignored) and returns a [`Pattern::QuadrantCycle`] when at
/// least two transitions exist; a lone transition is already fully
/// described by its own pattern. Edges are ordered by frequency with
/// first-seen order breaking ties, and strength is the share of
/// transitions taken by the most frequent edge.
pub fn summarize_transitions(transitions: &[Pattern]) -> Option<Pattern> {
    let mut edges: Vec<TransitionEdge> = Vec::new();
    let mut span: Option<(chrono::DateTime<chrono::Utc>, chrono::DateTime<chrono::Utc>)> = None;
    let mut total = 0usize;

    for pattern in transitions {
        if let Pattern::QuadrantTransition {
            from,
            to,
            start_time,
            end_time,
            ..
        } = pattern
        {
            total += 1;
            span = Some(match span {
                Some((start, end)) => (start.min(*start_time), end.max(*end_time)),
                None => (*start_time, *end_time),
            });
            match edges
                .iter_mut()
                .find(|edge| edge.from == *from && edge.to == *to)
            {
                Some(edge) => edge.count += 1,
                None => edges.push(TransitionEdge {
                    from: *from,
                    to: *to,
                    count: 1,
                }),
            }
        }
    }

    if total < 2 {
        return None;
    }
    edges.sort_by(|a, b| b.count.cmp(&a.count));

    let top = edges[0].clone();
    let strength = (top.count as f32 / total as f32).clamp(0.0, 1.0);
    let description = if top.count >= 2 {
        format!(
            "emotional state frequently cycles between {} and {} ({} of {} quadrant shifts)",
            top.from, top.to, top.count, total,
        )
    } else {
        format!(
            "emotional state moved through {} quadrant shifts without a repeated route",
            total,
        )
    };
    let (start_time, end_time) = span?;

    Some(Pattern::QuadrantCycle {
        edges,
        strength,
        start_time,
        end_time,
        description,
    })
}
