//! # Affect Cognition Core
//!
//! A deterministic Rust engine that detects recurring temporal patterns in
//! VAD (valence/arousal/dominance) emotion time series: oscillations,
//! sustained progressions, quadrant transitions, and dimension dominance,
//! plus prioritized natural-language insights over the detected patterns.
//!
//! The engine is a pure batch computation: it consumes a bounded,
//! already-collected sequence of samples, holds no shared state between
//! calls, and performs no I/O in the detection path.
//!
//! ## Quick Start
//!
//! ```rust
//! use affect_cognition_core::data::generate_trending_sequence;
//! use affect_cognition_core::{analyze_patterns, detect_temporal_patterns, Dimension};
//!
//! // A steadily improving mood signal.
//! let samples = generate_trending_sequence(Dimension::Valence, -0.4, 0.5, 10);
//!
//! let patterns = detect_temporal_patterns(&samples);
//! assert!(!patterns.is_empty());
//!
//! let insights = analyze_patterns(&patterns);
//! assert!(insights.iter().any(|text| text.contains("increasing")));
//! ```
//!
//! ## Core Modules
//!
//! - [`normalize`] - canonicalizes heterogeneous raw records at ingestion
//! - [`detect`] - the four pattern detectors and the aggregate entry point
//! - [`insight`] - insight rendering over detected patterns
//! - [`config`] - detector thresholds via TOML with auditable defaults
//! - [`logging`] - JSON line-delimited analysis logging

pub mod config;
pub mod data;
pub mod detect;
pub mod insight;
pub mod logging;
pub mod normalize;
pub mod sample;

pub use config::{
    ConfigError, DominanceConfig, EngineConfig, OscillationConfig, ProgressionConfig,
};
pub use detect::{
    detect_dominance, detect_oscillations, detect_progression, detect_quadrant_transitions,
    detect_temporal_patterns, detect_temporal_patterns_with_config, summarize_transitions,
    Pattern, PatternKind, TransitionEdge,
};
pub use insight::{analyze_patterns, clinical_annotation};
pub use logging::{log_analysis, AnalysisLogEntry};
pub use normalize::{normalize_records, NormalizeError, RawEmotionRecord, RawTimestamp, RawVector};
pub use sample::{Dimension, Direction, EmotionSample, EmotionVector, Quadrant};
