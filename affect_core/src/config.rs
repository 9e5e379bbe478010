//! Detector threshold configuration via TOML files.
//!
//! Every threshold the detectors consume lives here with its default, so
//! the tuning surface stays auditable in one place. All values are
//! call-time parameters; nothing is persisted between analysis calls.

use std::fs;
use std::path::Path;

use serde::Serialize;
use toml::Value;

/// Thresholds for the sign-alternation oscillation detector.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OscillationConfig {
    /// Minimum mean peak-to-trough swing for a run to qualify.
    pub min_amplitude: f32,
    /// Minimum number of samples an alternation run must span.
    pub min_points: usize,
}

impl Default for OscillationConfig {
    fn default() -> Self {
        Self {
            min_amplitude: 0.2,
            min_points: 3,
        }
    }
}

/// Thresholds for the monotonic progression classifier.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProgressionConfig {
    /// Minimum |last − first| change for a trend to qualify.
    pub min_strength: f32,
    /// Minimum share of non-zero deltas agreeing on a sign.
    pub min_consistency: f32,
    /// Minimum number of samples in the window.
    pub min_points: usize,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            min_strength: 0.2,
            min_consistency: 0.7,
            min_points: 3,
        }
    }
}

/// Thresholds for the dimension dominance detector.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DominanceConfig {
    /// Floor a winning dimension's |value| must clear to be counted, and
    /// the floor the final strength must clear to emit a pattern.
    pub min_strength: f32,
    /// Minimum share of samples the dimension must win.
    pub min_ratio: f32,
    /// Minimum number of winning samples.
    pub min_points: usize,
}

impl Default for DominanceConfig {
    fn default() -> Self {
        Self {
            min_strength: 0.25,
            min_ratio: 0.7,
            min_points: 3,
        }
    }
}

/// Aggregate configuration passed to the full detection entry point.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct EngineConfig {
    pub oscillation: OscillationConfig,
    pub progression: ProgressionConfig,
    pub dominance: DominanceConfig,
}

impl EngineConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&path)?;
        Self::from_str(&contents)
    }

    pub fn from_str(toml_str: &str) -> Result<Self, ConfigError> {
        let value: Value =
            toml::from_str(toml_str).map_err(|err| ConfigError::Parse(err.to_string()))?;

        Ok(Self {
            oscillation: parse_oscillation(&value),
            progression: parse_progression(&value),
            dominance: parse_dominance(&value),
        })
    }
}

fn parse_oscillation(value: &Value) -> OscillationConfig {
    let table = value.get("oscillation").and_then(|v| v.as_table());
    let defaults = OscillationConfig::default();

    OscillationConfig {
        min_amplitude: table
            .and_then(|t| t.get("min_amplitude"))
            .and_then(|v| v.as_float())
            .map(|v| (v as f32).clamp(0.0, 2.0))
            .unwrap_or(defaults.min_amplitude),
        min_points: table
            .and_then(|t| t.get("min_points"))
            .and_then(|v| v.as_integer())
            .map(|v| v.max(3) as usize)
            .unwrap_or(defaults.min_points),
    }
}

fn parse_progression(value: &Value) -> ProgressionConfig {
    let table = value.get("progression").and_then(|v| v.as_table());
    let defaults = ProgressionConfig::default();

    ProgressionConfig {
        min_strength: table
            .and_then(|t| t.get("min_strength"))
            .and_then(|v| v.as_float())
            .map(|v| (v as f32).clamp(0.0, 1.0))
            .unwrap_or(defaults.min_strength),
        min_consistency: table
            .and_then(|t| t.get("min_consistency"))
            .and_then(|v| v.as_float())
            .map(|v| (v as f32).clamp(0.0, 1.0))
            .unwrap_or(defaults.min_consistency),
        min_points: table
            .and_then(|t| t.get("min_points"))
            .and_then(|v| v.as_integer())
            .map(|v| v.max(3) as usize)
            .unwrap_or(defaults.min_points),
    }
}

fn parse_dominance(value: &Value) -> DominanceConfig {
    let table = value.get("dominance").and_then(|v| v.as_table());
    let defaults = DominanceConfig::default();

    DominanceConfig {
        min_strength: table
            .and_then(|t| t.get("min_strength"))
            .and_then(|v| v.as_float())
            .map(|v| (v as f32).clamp(0.0, 1.0))
            .unwrap_or(defaults.min_strength),
        min_ratio: table
            .and_then(|t| t.get("min_ratio"))
            .and_then(|v| v.as_float())
            .map(|v| (v as f32).clamp(0.0, 1.0))
            .unwrap_or(defaults.min_ratio),
        min_points: table
            .and_then(|t| t.get("min_points"))
            .and_then(|v| v.as_integer())
            .map(|v| v.max(1) as usize)
            .unwrap_or(defaults.min_points),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {}", err),
            ConfigError::Parse(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}
