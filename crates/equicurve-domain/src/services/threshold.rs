/// Collapses a continuous prediction score to the binary signal domain.
/// Scores at or below the threshold mean hold cash.
pub fn signal_from_score(score: f64, threshold: f64) -> f64 {
    if score <= threshold {
        0.0
    } else {
        1.0
    }
}

pub fn apply_threshold(scores: &[f64], threshold: f64) -> Vec<f64> {
    scores
        .iter()
        .map(|score| signal_from_score(*score, threshold))
        .collect()
}
