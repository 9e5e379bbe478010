use affect_cognition_core::config::ConfigError;
use affect_cognition_core::{
    analyze_patterns, detect_temporal_patterns_with_config, logging, normalize_records,
    EngineConfig, RawEmotionRecord, RawTimestamp,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;

    // A synthetic session mixing both raw record shapes: a mood that
    // climbs steadily while energy swings back and forth.
    let mut records = Vec::new();
    for idx in 0..24i64 {
        let timestamp = RawTimestamp::Epoch(1_700_000_000 + idx * 300);
        let valence = -0.5 + idx as f32 * 0.04;
        let arousal = if idx % 2 == 0 { 0.45 } else { -0.45 };
        let record = if idx % 2 == 0 {
            RawEmotionRecord::flat(timestamp, valence, arousal, 0.1)
        } else {
            RawEmotionRecord::nested(timestamp, valence, arousal, 0.1)
        };
        records.push(record);
    }

    let samples = normalize_records(&records)?;
    let patterns = detect_temporal_patterns_with_config(&samples, &config);

    println!(
        "Analyzed {} samples, found {} patterns:",
        samples.len(),
        patterns.len()
    );
    for pattern in &patterns {
        println!("  [{:.2}] {}", pattern.strength(), pattern.description());
    }

    println!("\nInsights:");
    for insight in analyze_patterns(&patterns) {
        println!("  - {}", insight);
    }

    logging::log_analysis(&samples, &patterns)?;
    Ok(())
}

fn load_config() -> Result<EngineConfig, ConfigError> {
    EngineConfig::load_from_file("config/engine.toml").or_else(|err| {
        if matches!(err, ConfigError::Io(_)) {
            Ok(EngineConfig::default())
        } else {
            Err(err)
        }
    })
}
