//! JSON line-delimited logging of analysis runs.
//!
//! Detection itself is pure; callers opt into logging by invoking
//! [`log_analysis`] after a run. Entries are appended to
//! `logs/analysis.jsonl`.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::detect::{Pattern, PatternKind};
use crate::sample::EmotionSample;

fn log_dir() -> io::Result<()> {
    fs::create_dir_all("logs")
}

fn append_json_line<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    serde_json::to_writer(&mut file, value)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    file.write_all(b"\n")
}

/// Summary record for one analysis call.
#[derive(Debug, Serialize)]
pub struct AnalysisLogEntry {
    pub timestamp_ms: u128,
    pub sample_count: usize,
    pub pattern_count: usize,
    pub oscillations: usize,
    pub progressions: usize,
    pub dominances: usize,
    pub quadrant_transitions: usize,
    pub quadrant_cycles: usize,
}

impl AnalysisLogEntry {
    pub fn from_run(samples: &[EmotionSample], patterns: &[Pattern]) -> Self {
        let count_kind = |kind: PatternKind| {
            patterns
                .iter()
                .filter(|pattern| pattern.kind() == kind)
                .count()
        };
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
            sample_count: samples.len(),
            pattern_count: patterns.len(),
            oscillations: count_kind(PatternKind::Oscillation),
            progressions: count_kind(PatternKind::Progression),
            dominances: count_kind(PatternKind::DimensionDominance),
            quadrant_transitions: count_kind(PatternKind::QuadrantTransition),
            quadrant_cycles: count_kind(PatternKind::QuadrantCycle),
        }
    }
}

/// Append one analysis summary to `logs/analysis.jsonl`.
pub fn log_analysis(samples: &[EmotionSample], patterns: &[Pattern]) -> io::Result<()> {
    log_dir()?;
    let entry = AnalysisLogEntry::from_run(samples, patterns);
    append_json_line("logs/analysis.jsonl", &entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate_quadrant_cycle_sequence;
    use crate::detect::detect_temporal_patterns;

    #[test]
    fn entry_counts_patterns_by_kind() {
        let samples = generate_quadrant_cycle_sequence(8);
        let patterns = detect_temporal_patterns(&samples);
        let entry = AnalysisLogEntry::from_run(&samples, &patterns);

        assert_eq!(entry.sample_count, 8);
        assert_eq!(entry.pattern_count, patterns.len());
        assert_eq!(entry.quadrant_transitions, 7);
        assert_eq!(entry.quadrant_cycles, 1);
        assert_eq!(
            entry.oscillations
                + entry.progressions
                + entry.dominances
                + entry.quadrant_transitions
                + entry.quadrant_cycles,
            patterns.len()
        );
    }
}
