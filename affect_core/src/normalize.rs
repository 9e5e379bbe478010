//! Ingestion-boundary normalisation of raw emotion records.
//!
//! Upstream extraction sources have produced two record shapes over time:
//! a legacy flat shape with `valence`/`arousal`/`dominance` directly on the
//! record, and a nested shape holding them under a `vector` sub-object.
//! Both are accepted here; per dimension the flat field wins, then the
//! nested field, then a neutral `0.0`. detectors never see either shape —
//! only the canonical [`EmotionSample`].

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::sample::{EmotionSample, EmotionVector};

/// Epoch values at or above this magnitude are interpreted as milliseconds.
const EPOCH_MILLIS_FLOOR: i64 = 100_000_000_000;

/// Raw record as received from an emotion extraction source.
///
/// Missing dimension fields are not an error; absence reads as neutral.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEmotionRecord {
    pub timestamp: RawTimestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valence: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arousal: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominance: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector: Option<RawVector>,
}

impl RawEmotionRecord {
    /// Legacy flat-shape constructor.
    pub fn flat(timestamp: RawTimestamp, valence: f32, arousal: f32, dominance: f32) -> Self {
        Self {
            timestamp,
            valence: Some(valence),
            arousal: Some(arousal),
            dominance: Some(dominance),
            vector: None,
        }
    }

    /// Nested-shape constructor.
    pub fn nested(timestamp: RawTimestamp, valence: f32, arousal: f32, dominance: f32) -> Self {
        Self {
            timestamp,
            valence: None,
            arousal: None,
            dominance: None,
            vector: Some(RawVector {
                valence: Some(valence),
                arousal: Some(arousal),
                dominance: Some(dominance),
            }),
        }
    }
}

/// Nested dimension sub-object carried by the newer record shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawVector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valence: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arousal: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominance: Option<f32>,
}

/// Timestamp as it arrives on the wire: RFC 3339 text or a unix epoch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Text(String),
    Epoch(i64),
    EpochFloat(f64),
}

impl RawTimestamp {
    fn resolve(&self) -> Result<DateTime<Utc>, NormalizeError> {
        match self {
            RawTimestamp::Text(text) => DateTime::parse_from_rfc3339(text)
                .map(|parsed| parsed.with_timezone(&Utc))
                .map_err(|_| NormalizeError::InvalidTimestamp {
                    value: text.clone(),
                }),
            RawTimestamp::Epoch(epoch) => epoch_to_datetime(*epoch),
            RawTimestamp::EpochFloat(epoch) => {
                if !epoch.is_finite() {
                    return Err(NormalizeError::InvalidTimestamp {
                        value: epoch.to_string(),
                    });
                }
                let millis = if epoch.abs() >= EPOCH_MILLIS_FLOOR as f64 {
                    *epoch
                } else {
                    epoch * 1000.0
                };
                Utc.timestamp_millis_opt(millis as i64)
                    .single()
                    .ok_or_else(|| NormalizeError::InvalidTimestamp {
                        value: epoch.to_string(),
                    })
            }
        }
    }
}

fn epoch_to_datetime(epoch: i64) -> Result<DateTime<Utc>, NormalizeError> {
    let result = if epoch.abs() >= EPOCH_MILLIS_FLOOR {
        Utc.timestamp_millis_opt(epoch)
    } else {
        Utc.timestamp_opt(epoch, 0)
    };
    result
        .single()
        .ok_or_else(|| NormalizeError::InvalidTimestamp {
            value: epoch.to_string(),
        })
}

/// Errors raised while canonicalising raw records.
///
/// Malformed timestamps are the only hard failure: they cannot be coerced
/// into a valid ordering, so the whole batch is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizeError {
    InvalidTimestamp { value: String },
}

impl std::fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizeError::InvalidTimestamp { value } => {
                write!(f, "unparseable timestamp '{}'", value)
            }
        }
    }
}

impl std::error::Error for NormalizeError {}

/// Canonicalise a batch of raw records into chronologically sorted samples.
///
/// Pure transform: the input order is irrelevant, ties are permitted, and
/// missing dimension fields default to 0.
///
/// # Examples
///
/// ```
/// use affect_cognition_core::normalize::{normalize_records, RawEmotionRecord, RawTimestamp};
///
/// let records = vec![
///     RawEmotionRecord::nested(RawTimestamp::Epoch(1_700_000_060), -0.4, 0.7, 0.1),
///     RawEmotionRecord::flat(RawTimestamp::Epoch(1_700_000_000), 0.5, 0.2, 0.0),
/// ];
/// let samples = normalize_records(&records).unwrap();
/// assert_eq!(samples.len(), 2);
/// assert!(samples[0].timestamp < samples[1].timestamp);
/// ```
pub fn normalize_records(
    records: &[RawEmotionRecord],
) -> Result<Vec<EmotionSample>, NormalizeError> {
    let mut samples = Vec::with_capacity(records.len());
    for record in records {
        let timestamp = record.timestamp.resolve()?;
        let nested = record.vector.as_ref();
        let vector = EmotionVector::new(
            resolve_component(record.valence, nested.and_then(|v| v.valence)),
            resolve_component(record.arousal, nested.and_then(|v| v.arousal)),
            resolve_component(record.dominance, nested.and_then(|v| v.dominance)),
        );
        samples.push(EmotionSample::new(timestamp, vector));
    }
    samples.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    Ok(samples)
}

fn resolve_component(direct: Option<f32>, nested: Option<f32>) -> f32 {
    direct.or(nested).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_and_nested_shapes_agree() {
        let flat = RawEmotionRecord::flat(RawTimestamp::Epoch(1_700_000_000), 0.3, -0.2, 0.8);
        let nested = RawEmotionRecord::nested(RawTimestamp::Epoch(1_700_000_000), 0.3, -0.2, 0.8);

        let samples = normalize_records(&[flat, nested]).unwrap();
        assert_eq!(samples[0], samples[1]);
    }

    #[test]
    fn direct_fields_win_over_nested() {
        let record = RawEmotionRecord {
            timestamp: RawTimestamp::Epoch(1_700_000_000),
            valence: Some(0.9),
            arousal: None,
            dominance: None,
            vector: Some(RawVector {
                valence: Some(-0.9),
                arousal: Some(0.4),
                dominance: None,
            }),
        };

        let samples = normalize_records(&[record]).unwrap();
        assert!((samples[0].vector.valence - 0.9).abs() < 1e-6);
        assert!((samples[0].vector.arousal - 0.4).abs() < 1e-6);
        assert_eq!(samples[0].vector.dominance, 0.0);
    }

    #[test]
    fn missing_fields_default_to_neutral() {
        let record = RawEmotionRecord {
            timestamp: RawTimestamp::Epoch(1_700_000_000),
            valence: None,
            arousal: None,
            dominance: None,
            vector: None,
        };

        let samples = normalize_records(&[record]).unwrap();
        assert_eq!(samples[0].vector, EmotionVector::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn rfc3339_and_epoch_timestamps_agree() {
        let text = RawEmotionRecord::flat(
            RawTimestamp::Text("2023-11-14T22:13:20Z".to_string()),
            0.0,
            0.0,
            0.0,
        );
        let epoch = RawEmotionRecord::flat(RawTimestamp::Epoch(1_700_000_000), 0.0, 0.0, 0.0);
        let millis =
            RawEmotionRecord::flat(RawTimestamp::Epoch(1_700_000_000_000), 0.0, 0.0, 0.0);

        let samples = normalize_records(&[text, epoch, millis]).unwrap();
        assert_eq!(samples[0].timestamp, samples[1].timestamp);
        assert_eq!(samples[1].timestamp, samples[2].timestamp);
    }

    #[test]
    fn unsorted_input_is_sorted() {
        let records = vec![
            RawEmotionRecord::flat(RawTimestamp::Epoch(1_700_000_120), 0.3, 0.0, 0.0),
            RawEmotionRecord::flat(RawTimestamp::Epoch(1_700_000_000), 0.1, 0.0, 0.0),
            RawEmotionRecord::flat(RawTimestamp::Epoch(1_700_000_060), 0.2, 0.0, 0.0),
        ];

        let samples = normalize_records(&records).unwrap();
        let valences: Vec<f32> = samples.iter().map(|s| s.vector.valence).collect();
        assert_eq!(valences, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn malformed_timestamp_is_a_hard_error() {
        let record = RawEmotionRecord::flat(
            RawTimestamp::Text("yesterday-ish".to_string()),
            0.0,
            0.0,
            0.0,
        );
        let result = normalize_records(&[record]);
        assert_eq!(
            result,
            Err(NormalizeError::InvalidTimestamp {
                value: "yesterday-ish".to_string()
            })
        );
    }

    #[test]
    fn records_deserialize_from_both_json_shapes() {
        let flat: RawEmotionRecord =
            serde_json::from_str(r#"{"timestamp": 1700000000, "valence": 0.5}"#).unwrap();
        let nested: RawEmotionRecord = serde_json::from_str(
            r#"{"timestamp": "2023-11-14T22:13:20Z", "vector": {"valence": 0.5}}"#,
        )
        .unwrap();

        let samples = normalize_records(&[flat, nested]).unwrap();
        assert_eq!(samples[0], samples[1]);
    }
}
