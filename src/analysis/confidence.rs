//! Confidence scoring for the tempo estimate

use crate::features::period::TempoCandidate;

/// Share of all votes held by the best ranked candidate
///
/// Returns 0.0 when there are no votes.
pub fn vote_share(ranked: &[TempoCandidate], total_votes: usize) -> f32 {
    match ranked.first() {
        Some(best) if total_votes > 0 => (best.count as f32 / total_votes as f32).min(1.0),
        _ => 0.0,
    }
}

/// True if the two best ranked candidates have the same count
pub fn is_multimodal(ranked: &[TempoCandidate]) -> bool {
    matches!(ranked, [first, second, ..] if first.count == second.count)
}
