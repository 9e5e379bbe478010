//! Insight rendering over detected patterns.
//!
//! Insights are derived strings regenerated on every call; they carry no
//! identity of their own. Grouping keeps first-seen order and the
//! strongest pattern wins each group, with strict comparison so detection
//! order breaks ties.

use crate::detect::{Pattern, PatternKind};
use crate::sample::Dimension;

/// Render prioritized natural-language insights for a pattern list.
///
/// One insight per (kind, dimension) group present, using the strongest
/// pattern's description. Dominance insights append a fixed
/// clinical-style annotation for their dimension. Quadrant movement is
/// rendered last through the transition summarizer: the cycle summary
/// outranks individual transitions when it exists.
///
/// Total and deterministic: an empty pattern list yields an empty vector.
pub fn analyze_patterns(patterns: &[Pattern]) -> Vec<String> {
    let mut insights = Vec::new();

    let mut groups: Vec<((PatternKind, Option<Dimension>), usize)> = Vec::new();
    for (idx, pattern) in patterns.iter().enumerate() {
        let kind = pattern.kind();
        if matches!(
            kind,
            PatternKind::QuadrantTransition | PatternKind::QuadrantCycle
        ) {
            continue;
        }
        let key = (kind, pattern.dimension());
        match groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, strongest)) => {
                if pattern.strength() > patterns[*strongest].strength() {
                    *strongest = idx;
                }
            }
            None => groups.push((key, idx)),
        }
    }

    for ((kind, dimension), idx) in groups {
        let pattern = &patterns[idx];
        let mut insight = pattern.description().to_string();
        if kind == PatternKind::DimensionDominance {
            if let Some(dimension) = dimension {
                insight.push(' ');
                insight.push_str(clinical_annotation(dimension));
            }
        }
        insights.push(insight);
    }

    if let Some(cycle) = patterns
        .iter()
        .find(|pattern| pattern.kind() == PatternKind::QuadrantCycle)
    {
        insights.push(cycle.description().to_string());
    } else if let Some(strongest) = patterns
        .iter()
        .filter(|pattern| pattern.kind() == PatternKind::QuadrantTransition)
        .reduce(|best, pattern| {
            if pattern.strength() > best.strength() {
                pattern
            } else {
                best
            }
        })
    {
        insights.push(strongest.description().to_string());
    }

    insights
}

/// Fixed clinical-style reading of a dominance pattern.
///
/// Descriptive signal only, never a diagnosis.
pub fn clinical_annotation(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Valence => {
            "Mood polarity is the leading signal; shifts in emotional tone outweigh changes in activation or perceived control."
        }
        Dimension::Arousal => {
            "Activation level is the leading signal; energy shifts outweigh changes in emotional tone or perceived control."
        }
        Dimension::Dominance => {
            "Perceived control is the leading signal; shifts in the sense of agency outweigh changes in tone or energy."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{
        generate_dominant_sequence, generate_quadrant_cycle_sequence, generate_trending_sequence,
    };
    use crate::detect::detect_temporal_patterns;

    #[test]
    fn empty_patterns_yield_no_insights() {
        assert!(analyze_patterns(&[]).is_empty());
    }

    #[test]
    fn dominance_insight_carries_the_annotation() {
        let samples = generate_dominant_sequence(Dimension::Arousal, 0.6, 10);
        let insights = analyze_patterns(&detect_temporal_patterns(&samples));

        assert_eq!(insights.len(), 1);
        assert!(insights[0].contains("arousal dominates"));
        assert!(insights[0].contains(clinical_annotation(Dimension::Arousal)));
    }

    #[test]
    fn cycle_summary_outranks_single_transitions() {
        let samples = generate_quadrant_cycle_sequence(8);
        let patterns = detect_temporal_patterns(&samples);
        let insights = analyze_patterns(&patterns);

        // Exactly one quadrant insight, taken from the cycle summary.
        let quadrant_insights: Vec<&String> = insights
            .iter()
            .filter(|text| text.contains("quadrant") || text.contains("shifted"))
            .collect();
        assert_eq!(quadrant_insights.len(), 1);
        assert!(quadrant_insights[0].contains("frequently cycles"));
    }

    #[test]
    fn strongest_pattern_wins_its_group() {
        let weak = generate_trending_sequence(Dimension::Valence, 0.0, 0.3, 5);
        let strong = generate_trending_sequence(Dimension::Valence, -0.4, 0.5, 5);

        let mut patterns = detect_temporal_patterns(&weak);
        patterns.extend(detect_temporal_patterns(&strong));
        let insights = analyze_patterns(&patterns);

        let trend_insight = insights
            .iter()
            .find(|text| text.contains("increasing"))
            .unwrap();
        assert!(trend_insight.contains("+0.90"));
    }

    #[test]
    fn ties_keep_the_earlier_pattern() {
        let samples = generate_trending_sequence(Dimension::Valence, 0.0, 0.5, 5);
        let patterns = detect_temporal_patterns(&samples);
        let doubled: Vec<_> = patterns.iter().chain(patterns.iter()).cloned().collect();

        assert_eq!(analyze_patterns(&patterns), analyze_patterns(&doubled));
    }
}
