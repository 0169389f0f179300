//! # Classifier
//!
//! Picks the archetype whose keyword list best matches the context text.
//!
//! Scoring is a plain count of registry keywords that occur as substrings of
//! [`AnalysisContext::searchable_text`]. The highest score wins; ties go to
//! the archetype declared first in the registry. A winning score below
//! [`MIN_KEYWORD_MATCHES`] is overridden to `landing-waitlist`: an idea that
//! does not clearly describe functionality gets a validation page, not a
//! guess at a product.

use crate::archetype::{self, ArchetypeId};
use crate::context::AnalysisContext;
use serde::Serialize;
use tracing::debug;

/// Winning score below this falls back to `landing-waitlist`.
pub const MIN_KEYWORD_MATCHES: usize = 2;

/// Number of keyword hits that maps to 100% confidence.
pub const FULL_CONFIDENCE_MATCHES: usize = 5;

/// Keyword score of a single archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArchetypeScore {
    pub archetype: ArchetypeId,
    pub score: usize,
}

/// Result of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub archetype: ArchetypeId,
    /// 0..=100
    pub confidence: u8,
    /// Keyword hits of the returned archetype, before any override
    pub score: usize,
    /// Whether the low-score fallback replaced the top scorer
    pub fallback: bool,
}

/// Score every archetype, in registry order.
pub fn score_all(ctx: &AnalysisContext) -> Vec<ArchetypeScore> {
    let text = ctx.searchable_text();
    archetype::all()
        .iter()
        .map(|def| ArchetypeScore {
            archetype: def.id,
            score: def.keywords.iter().filter(|kw| text.contains(*kw)).count(),
        })
        .collect()
}

/// Confidence for a keyword count: `min(100, round(count / 5 * 100))`.
pub fn confidence_for(matches: usize) -> u8 {
    let pct = (matches as f64 / FULL_CONFIDENCE_MATCHES as f64 * 100.0).round();
    pct.min(100.0) as u8
}

/// Select one archetype for `ctx`. Pure and deterministic.
pub fn classify(ctx: &AnalysisContext) -> Classification {
    let scores = score_all(ctx);
    classify_scores(&scores)
}

fn classify_scores(scores: &[ArchetypeScore]) -> Classification {
    // Strictly-greater comparison keeps the earliest archetype on ties.
    let mut best = ArchetypeScore {
        archetype: ArchetypeId::ALL[0],
        score: 0,
    };
    for (idx, candidate) in scores.iter().enumerate() {
        if idx == 0 || candidate.score > best.score {
            best = *candidate;
        }
    }

    let fallback = best.score < MIN_KEYWORD_MATCHES && best.archetype != ArchetypeId::LandingWaitlist;
    let chosen = if best.score < MIN_KEYWORD_MATCHES {
        scores
            .iter()
            .find(|s| s.archetype == ArchetypeId::LandingWaitlist)
            .copied()
            .unwrap_or(ArchetypeScore {
                archetype: ArchetypeId::LandingWaitlist,
                score: 0,
            })
    } else {
        best
    };

    debug!(
        top = %best.archetype,
        top_score = best.score,
        chosen = %chosen.archetype,
        fallback,
        scores = ?scores,
        "classified context"
    );

    Classification {
        archetype: chosen.archetype,
        confidence: confidence_for(chosen.score),
        score: chosen.score,
        fallback,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    fn scores(values: [usize; 4]) -> Vec<ArchetypeScore> {
        ArchetypeId::ALL
            .iter()
            .zip(values)
            .map(|(id, score)| ArchetypeScore {
                archetype: *id,
                score,
            })
            .collect()
    }

    #[test]
    fn test_confidence_for() {
        assert_eq!(confidence_for(0), 0);
        assert_eq!(confidence_for(1), 20);
        assert_eq!(confidence_for(2), 40);
        assert_eq!(confidence_for(5), 100);
        assert_eq!(confidence_for(9), 100);
    }

    #[test]
    fn test_tie_goes_to_first_declared() {
        let result = classify_scores(&scores([0, 3, 3, 0]));
        assert_eq!(result.archetype, ArchetypeId::Calculator);
        assert_eq!(result.confidence, 60);
        assert!(!result.fallback);
    }

    #[test]
    fn test_strictly_highest_wins() {
        let result = classify_scores(&scores([2, 2, 4, 0]));
        assert_eq!(result.archetype, ArchetypeId::Dashboard);
    }

    #[test]
    fn test_below_threshold_falls_back_to_landing() {
        let result = classify_scores(&scores([1, 1, 0, 0]));
        assert_eq!(result.archetype, ArchetypeId::LandingWaitlist);
        assert_eq!(result.confidence, 0);
        assert!(result.fallback);

        // Confidence reflects the returned archetype's own pre-override score.
        let result = classify_scores(&scores([0, 1, 0, 1]));
        assert_eq!(result.archetype, ArchetypeId::LandingWaitlist);
        assert_eq!(result.score, 1);
        assert_eq!(result.confidence, 20);
    }

    #[test]
    fn test_landing_can_win_on_score() {
        let result = classify_scores(&scores([0, 0, 1, 2]));
        assert_eq!(result.archetype, ArchetypeId::LandingWaitlist);
        assert_eq!(result.confidence, 40);
        assert!(!result.fallback);
    }

    #[test]
    fn test_score_all_counts_distinct_keywords() {
        let ctx = AnalysisContext::from_title("Idea")
            .with_main_pain("отзывы отзывы отзывы и анализ");
        let all = score_all(&ctx);
        assert_eq!(all[0].archetype, ArchetypeId::AiTool);
        assert_eq!(all[0].score, 2);
    }
}
