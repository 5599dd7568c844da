//! Candidate ranking

use super::TempoCandidate;

/// Rank candidates by vote count, highest first, and keep the top `limit`
///
/// The sort is stable, so equal counts keep the order the candidates were
/// created in.
///
/// # Example
///
/// ```
/// use peak_tempo::features::period::ranking::rank_candidates;
/// use peak_tempo::features::period::TempoCandidate;
///
/// let ranked = rank_candidates(
///     vec![
///         TempoCandidate { tempo: 96, count: 2 },
///         TempoCandidate { tempo: 120, count: 7 },
///         TempoCandidate { tempo: 160, count: 2 },
///     ],
///     2,
/// );
/// assert_eq!(ranked[0].tempo, 120);
/// assert_eq!(ranked[1].tempo, 96);
/// ```
pub fn rank_candidates(mut candidates: Vec<TempoCandidate>, limit: usize) -> Vec<TempoCandidate> {
    candidates.sort_by(|a, b| b.count.cmp(&a.count));
    candidates.truncate(limit);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(tempo: u32, count: u32) -> TempoCandidate {
        TempoCandidate { tempo, count }
    }

    #[test]
    fn test_ties_keep_creation_order() {
        let ranked = rank_candidates(
            vec![candidate(150, 3), candidate(100, 5), candidate(90, 3), candidate(170, 5)],
            4,
        );
        let tempos: Vec<u32> = ranked.iter().map(|c| c.tempo).collect();
        assert_eq!(tempos, vec![100, 170, 150, 90]);
    }

    #[test]
    fn test_limit_truncates() {
        let candidates: Vec<TempoCandidate> = (0..8).map(|i| candidate(90 + i, i)).collect();
        let ranked = rank_candidates(candidates, 5);
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0], candidate(97, 7));
        assert_eq!(ranked[4], candidate(93, 3));
    }

    #[test]
    fn test_fewer_than_limit() {
        assert!(rank_candidates(vec![], 5).is_empty());
        assert_eq!(rank_candidates(vec![candidate(120, 1)], 5).len(), 1);
    }
}
