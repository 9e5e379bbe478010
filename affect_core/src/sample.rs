//! Canonical value types for the VAD (valence/arousal/dominance) model.
//!
//! Every detector consumes the same chronologically ordered sequence of
//! [`EmotionSample`] values; shape-sniffing of raw input happens once at
//! the ingestion boundary (see [`crate::normalize`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One axis of the VAD emotion model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Valence,
    Arousal,
    Dominance,
}

impl Dimension {
    /// Canonical dimension order used everywhere patterns are aggregated.
    pub const ALL: [Dimension; 3] = [Dimension::Valence, Dimension::Arousal, Dimension::Dominance];

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Valence => "valence",
            Dimension::Arousal => "arousal",
            Dimension::Dominance => "dominance",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Dimension {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "valence" => Ok(Dimension::Valence),
            "arousal" => Ok(Dimension::Arousal),
            "dominance" => Ok(Dimension::Dominance),
            other => Err(format!("unknown emotion dimension '{}'", other)),
        }
    }
}

/// Trend direction reported by the progression detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Increasing => "increasing",
            Direction::Decreasing => "decreasing",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the four regions of the valence–arousal plane.
///
/// Assignment uses `>= 0` as the positive/high boundary on both axes, so a
/// sample exactly at the origin lands in [`Quadrant::Excited`]. This
/// tie-break is fixed, not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// High arousal, positive valence.
    Excited,
    /// High arousal, negative valence.
    Anxious,
    /// Low arousal, negative valence.
    Depressed,
    /// Low arousal, positive valence.
    Calm,
}

impl Quadrant {
    /// Assign the quadrant for a valence/arousal pair.
    pub fn from_components(valence: f32, arousal: f32) -> Self {
        match (valence >= 0.0, arousal >= 0.0) {
            (true, true) => Quadrant::Excited,
            (false, true) => Quadrant::Anxious,
            (false, false) => Quadrant::Depressed,
            (true, false) => Quadrant::Calm,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Quadrant::Excited => "excited",
            Quadrant::Anxious => "anxious",
            Quadrant::Depressed => "depressed",
            Quadrant::Calm => "calm",
        }
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Instantaneous emotional state, each component nominally in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionVector {
    pub valence: f32,
    pub arousal: f32,
    pub dominance: f32,
}

impl EmotionVector {
    pub fn new(valence: f32, arousal: f32, dominance: f32) -> Self {
        Self {
            valence,
            arousal,
            dominance,
        }
    }

    /// Value of a single dimension.
    pub fn component(&self, dimension: Dimension) -> f32 {
        match dimension {
            Dimension::Valence => self.valence,
            Dimension::Arousal => self.arousal,
            Dimension::Dominance => self.dominance,
        }
    }

    /// Scalar magnitude of the state, normalised to [0, 1].
    ///
    /// Euclidean norm divided by the norm of the corner vector (1,1,1);
    /// out-of-range inputs are clamped rather than rejected.
    pub fn intensity(&self) -> f32 {
        let norm = (self.valence * self.valence
            + self.arousal * self.arousal
            + self.dominance * self.dominance)
            .sqrt();
        (norm / 3.0_f32.sqrt()).clamp(0.0, 1.0)
    }

    /// Dimensions ranked by absolute value, strongest first.
    ///
    /// Ties keep the canonical valence → arousal → dominance order.
    pub fn dominant_dimensions(&self) -> [Dimension; 3] {
        let mut ranked = Dimension::ALL;
        ranked.sort_by(|a, b| {
            self.component(*b)
                .abs()
                .partial_cmp(&self.component(*a).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }

    /// Quadrant of the valence–arousal projection.
    pub fn quadrant(&self) -> Quadrant {
        Quadrant::from_components(self.valence, self.arousal)
    }
}

/// Canonical per-timestamp record consumed by every detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionSample {
    pub timestamp: DateTime<Utc>,
    pub vector: EmotionVector,
}

impl EmotionSample {
    pub fn new(timestamp: DateTime<Utc>, vector: EmotionVector) -> Self {
        Self { timestamp, vector }
    }

    pub fn quadrant(&self) -> Quadrant {
        self.vector.quadrant()
    }

    pub fn intensity(&self) -> f32 {
        self.vector.intensity()
    }

    pub fn dominant_dimensions(&self) -> [Dimension; 3] {
        self.vector.dominant_dimensions()
    }
}
