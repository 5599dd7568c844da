//! Interval voting over time-ordered peaks
//!
//! Every peak is paired with the peaks that follow it inside a bounded
//! neighborhood. Each pair's interval is converted to a tempo, folded into
//! the tempo band, rounded, and counted as one vote for that tempo. The tempo
//! with the most votes is the best estimate.
//!
//! # Algorithm
//!
//! For peak `i` and each `k` in `1..=neighborhood` with `i + k < len`:
//!
//! 1. `raw = 60 * sample_rate / (position[i + k] - position[i])`
//! 2. Fold `raw` into `[min_tempo, max_tempo]` and round
//! 3. Increment the candidate for that tempo, creating it on first sight
//!
//! Candidates are returned in the order their tempo was first seen, which is
//! the tie-break order used by ranking.
//!
//! # Example
//!
//! ```
//! use peak_tempo::features::peaks::Peak;
//! use peak_tempo::features::period::interval_voting::vote_tempos;
//!
//! let peaks = vec![
//!     Peak { position: 0, volume: 1.0 },
//!     Peak { position: 11025, volume: 1.0 },
//! ];
//! let candidates = vote_tempos(&peaks);
//! assert_eq!(candidates.len(), 1);
//! assert_eq!(candidates[0].tempo, 120);
//! assert_eq!(candidates[0].count, 1);
//! ```

use std::collections::HashMap;

use super::octave::fold_and_round;
use super::TempoCandidate;
use crate::config::TempoConfig;
use crate::features::peaks::Peak;

/// Votes cast by one pass over a peak sequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntervalTally {
    /// Candidates in first-seen order
    pub candidates: Vec<TempoCandidate>,

    /// Pairs that cast a vote
    pub pairs_voted: usize,

    /// Pairs skipped because the later peak was not after the earlier one
    pub pairs_skipped: usize,
}

impl IntervalTally {
    /// Sum of all candidate counts
    pub fn total_votes(&self) -> usize {
        self.candidates.iter().map(|c| c.count as usize).sum()
    }
}

/// Vote for tempos using the default configuration
///
/// See [`tally_intervals`]. Returns candidates in first-seen order.
pub fn vote_tempos(peaks: &[Peak]) -> Vec<TempoCandidate> {
    tally_intervals(peaks, &TempoConfig::default()).candidates
}

/// Vote for tempos over every peak pair inside the forward neighborhood
///
/// # Arguments
///
/// * `peaks` - Peaks in ascending position order
/// * `config` - Uses `sample_rate`, `neighborhood`, `min_tempo` and `max_tempo`
///
/// # Returns
///
/// The candidates plus counts of voting and skipped pairs. Fewer than two
/// peaks produce an empty tally.
///
/// A pair whose later position is not strictly greater than the earlier one
/// has no defined tempo and is skipped.
pub fn tally_intervals(peaks: &[Peak], config: &TempoConfig) -> IntervalTally {
    let beat_samples = 60.0 * config.sample_rate as f64;

    let mut tally = IntervalTally::default();
    let mut index_by_tempo: HashMap<u32, usize> = HashMap::new();

    for (i, peak) in peaks.iter().enumerate() {
        for next in peaks.iter().skip(i + 1).take(config.neighborhood) {
            if next.position <= peak.position {
                tally.pairs_skipped += 1;
                continue;
            }

            let raw = beat_samples / (next.position - peak.position) as f64;
            let Some(tempo) = fold_and_round(raw, config.min_tempo, config.max_tempo) else {
                tally.pairs_skipped += 1;
                continue;
            };

            match index_by_tempo.get(&tempo) {
                Some(&idx) => tally.candidates[idx].count += 1,
                None => {
                    index_by_tempo.insert(tempo, tally.candidates.len());
                    tally.candidates.push(TempoCandidate { tempo, count: 1 });
                }
            }
            tally.pairs_voted += 1;
        }
    }

    if tally.pairs_skipped > 0 {
        log::warn!(
            "Skipped {} peak pairs with non-positive intervals",
            tally.pairs_skipped
        );
    }

    log::debug!(
        "Interval voting: {} peaks, {} votes across {} tempos",
        peaks.len(),
        tally.pairs_voted,
        tally.candidates.len()
    );

    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peaks_at(positions: &[usize]) -> Vec<Peak> {
        positions
            .iter()
            .map(|&position| Peak { position, volume: 1.0 })
            .collect()
    }

    #[test]
    fn test_empty_and_single_peak() {
        assert!(vote_tempos(&[]).is_empty());
        assert!(vote_tempos(&peaks_at(&[500])).is_empty());
    }

    #[test]
    fn test_one_second_interval_is_120() {
        let candidates = vote_tempos(&peaks_at(&[0, 22050]));
        assert_eq!(candidates, vec![TempoCandidate { tempo: 120, count: 1 }]);
    }

    #[test]
    fn test_quarter_second_interval_folds_to_120() {
        let candidates = vote_tempos(&peaks_at(&[0, 11025]));
        assert_eq!(candidates, vec![TempoCandidate { tempo: 120, count: 1 }]);
    }

    #[test]
    fn test_equal_positions_are_skipped() {
        let tally = tally_intervals(&peaks_at(&[0, 0]), &TempoConfig::default());
        assert!(tally.candidates.is_empty());
        assert_eq!(tally.pairs_skipped, 1);
        assert_eq!(tally.pairs_voted, 0);
    }

    #[test]
    fn test_skipped_pair_does_not_disturb_others() {
        // (0, 0) is skipped; (0, 22050) twice vote 120
        let tally = tally_intervals(&peaks_at(&[0, 0, 22050]), &TempoConfig::default());
        assert_eq!(tally.candidates, vec![TempoCandidate { tempo: 120, count: 2 }]);
        assert_eq!(tally.pairs_voted, 2);
        assert_eq!(tally.pairs_skipped, 1);
    }

    #[test]
    fn test_descending_positions_are_skipped() {
        let tally = tally_intervals(&peaks_at(&[22050, 0]), &TempoConfig::default());
        assert!(tally.candidates.is_empty());
        assert_eq!(tally.pairs_skipped, 1);
    }

    #[test]
    fn test_neighborhood_bound() {
        // Eleven evenly spaced peaks: pairs per distance k are 11 - k for k in 1..=9
        let positions: Vec<usize> = (0..11).map(|i| i * 22050).collect();
        let tally = tally_intervals(&peaks_at(&positions), &TempoConfig::default());
        let expected: usize = (1..=9).map(|k| 11 - k).sum();
        assert_eq!(tally.pairs_voted, expected);
        assert_eq!(tally.total_votes(), expected);

        let narrow = TempoConfig {
            neighborhood: 1,
            ..TempoConfig::default()
        };
        let tally = tally_intervals(&peaks_at(&positions), &narrow);
        assert_eq!(tally.pairs_voted, 10);
        assert_eq!(tally.candidates, vec![TempoCandidate { tempo: 120, count: 10 }]);
    }

    #[test]
    fn test_first_seen_order() {
        // Distances 1..=9 beats at 120 BPM fold to 120, 120, 160, 120, 96, 160, 137, 120, 107
        let positions: Vec<usize> = (0..10).map(|i| i * 22050).collect();
        let candidates = vote_tempos(&peaks_at(&positions));
        let tempos: Vec<u32> = candidates.iter().map(|c| c.tempo).collect();
        assert_eq!(tempos, vec![120, 160, 96, 137, 107]);
    }

    #[test]
    fn test_candidates_stay_in_band() {
        let positions: Vec<usize> = (0..40).map(|i| i * 9973 + (i * i * 37) % 4001).collect();
        let tally = tally_intervals(&peaks_at(&positions), &TempoConfig::default());
        assert!(!tally.candidates.is_empty());
        for candidate in &tally.candidates {
            assert!((90..=180).contains(&candidate.tempo), "{:?}", candidate);
        }
        assert_eq!(tally.total_votes(), tally.pairs_voted);
    }

    #[test]
    fn test_deterministic() {
        let positions: Vec<usize> = (0..25).map(|i| i * 20000 + (i % 3) * 777).collect();
        let peaks = peaks_at(&positions);
        assert_eq!(vote_tempos(&peaks), vote_tempos(&peaks));
    }
}
