//! Overall result-confidence heuristic.
//!
//! Blends completion rate, top match score, and the score spread between
//! the top two matches into a 0-100 number. This is a heuristic, not a
//! statistical confidence interval.

use crate::matcher::PathwayMatch;

const COMPLETION_WEIGHT: f64 = 0.3;
const TOP_SCORE_WEIGHT: f64 = 0.5;
const SPREAD_WEIGHT: f64 = 0.2;

/// Compute the 0-100 confidence score.
///
/// `answered` is the number of distinct questions with a usable response;
/// an empty question list yields a completion rate of 0.
pub fn score(matches: &[PathwayMatch], answered: usize, total_questions: usize) -> f64 {
    let completion = if total_questions > 0 {
        (answered as f64 / total_questions as f64).min(1.0)
    } else {
        0.0
    };
    let top_score = matches.first().map(|m| m.match_score).unwrap_or(0.0);
    let spread = match matches {
        [first, second, ..] => first.match_score - second.match_score,
        _ => 0.0,
    };

    ((completion * COMPLETION_WEIGHT + top_score * TOP_SCORE_WEIGHT + spread * SPREAD_WEIGHT)
        * 100.0)
        .min(100.0)
}
