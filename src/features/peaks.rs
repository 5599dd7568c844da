//! Window peak extraction
//!
//! Splits the excerpt into fixed windows, takes the loudest sample of each
//! window as that window's likely beat, and keeps only the loudest share of
//! those peaks so that breaks and quiet passages do not vote.
//!
//! # Algorithm
//!
//! 1. For each complete window, find the first sample with the highest
//!    `max(|L|, |R|)` volume
//! 2. Sort the window peaks by volume (loudest first, stable)
//! 3. Keep `floor(N * retain_ratio)` of them
//! 4. Re-sort the kept peaks by position
//!
//! # Example
//!
//! ```
//! use peak_tempo::features::peaks::extract_peaks;
//!
//! let mut left = vec![0.0f32; 44100];
//! left[100] = 0.9;
//! left[22050 + 100] = 0.5;
//! let right = vec![0.0f32; 44100];
//!
//! let peaks = extract_peaks(&left, &right);
//! assert_eq!(peaks.len(), 1);
//! assert_eq!(peaks[0].position, 100);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::TempoConfig;
use crate::preprocessing::channel_mixer::{sample_volume, ChannelMixMode};

/// Loudest sample found in one analysis window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    /// Absolute sample index in the buffer
    pub position: usize,

    /// Volume at that sample (non-negative)
    pub volume: f32,
}

/// Extract the loudest half of the window peaks using the default configuration
///
/// See [`extract_peaks_with`].
pub fn extract_peaks(left: &[f32], right: &[f32]) -> Vec<Peak> {
    extract_peaks_with(left, right, &TempoConfig::default())
}

/// Extract window peaks, keep the loudest share and return them in time order
///
/// # Arguments
///
/// * `left` - Left channel samples
/// * `right` - Right channel samples (same length as `left`)
/// * `config` - Uses `window_size`, `retain_ratio` and `channel_mix`
///
/// # Returns
///
/// Peaks with strictly increasing positions. Input shorter than one window
/// yields an empty vector.
///
/// If the channels differ in length only the common prefix is scanned.
pub fn extract_peaks_with(left: &[f32], right: &[f32], config: &TempoConfig) -> Vec<Peak> {
    if left.len() != right.len() {
        log::warn!(
            "Channel length mismatch (left={}, right={}), scanning common prefix",
            left.len(),
            right.len()
        );
    }

    let len = left.len().min(right.len());
    let window_peaks = window_maxima(
        &left[..len],
        &right[..len],
        config.window_size,
        config.channel_mix,
    );
    let window_count = window_peaks.len();

    let mut peaks = retain_loudest(window_peaks, config.retain_ratio);
    peaks.sort_by_key(|peak| peak.position);

    log::debug!(
        "Extracted {} window peaks from {} samples, kept {}",
        window_count,
        len,
        peaks.len()
    );

    peaks
}

/// Loudest sample of every complete window, in window order
///
/// Ties inside a window keep the earliest sample. A window of silence still
/// reports its first sample with volume 0.
pub(crate) fn window_maxima(
    left: &[f32],
    right: &[f32],
    window_size: usize,
    mode: ChannelMixMode,
) -> Vec<Peak> {
    if window_size == 0 {
        return vec![];
    }

    let window_count = left.len().min(right.len()) / window_size;
    let mut peaks = Vec::with_capacity(window_count);

    for window in 0..window_count {
        let start = window * window_size;
        let mut loudest: Option<Peak> = None;

        for position in start..start + window_size {
            let volume = sample_volume(left[position], right[position], mode);
            match loudest {
                Some(peak) if volume <= peak.volume => {}
                // NaN never beats an existing maximum
                Some(_) if volume.is_nan() => {}
                _ => loudest = Some(Peak { position, volume }),
            }
        }

        if let Some(peak) = loudest {
            peaks.push(peak);
        }
    }

    peaks
}

/// Keep the loudest `floor(len * ratio)` peaks
///
/// Equal volumes keep their incoming order. The result is ordered by volume.
pub(crate) fn retain_loudest(mut peaks: Vec<Peak>, ratio: f64) -> Vec<Peak> {
    let keep = ((peaks.len() as f64) * ratio).floor() as usize;

    peaks.sort_by(|a, b| b.volume.total_cmp(&a.volume));
    peaks.truncate(keep.min(peaks.len()));
    peaks
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: usize = 22050;

    fn silent(len: usize) -> Vec<f32> {
        vec![0.0; len]
    }

    #[test]
    fn test_shorter_than_one_window_is_empty() {
        let left = silent(WINDOW - 1);
        let right = silent(WINDOW - 1);
        assert!(extract_peaks(&left, &right).is_empty());
        assert!(extract_peaks(&[], &[]).is_empty());
    }

    #[test]
    fn test_single_window_keeps_nothing() {
        // floor(1 * 0.5) = 0
        let left = silent(WINDOW);
        assert!(extract_peaks(&left, &left).is_empty());
    }

    #[test]
    fn test_one_second_of_silence_keeps_first_window() {
        let left = silent(2 * WINDOW);
        let peaks = extract_peaks(&left, &left);
        assert_eq!(peaks, vec![Peak { position: 0, volume: 0.0 }]);
    }

    #[test]
    fn test_tie_keeps_first_window() {
        let mut left = silent(2 * WINDOW);
        left[100] = 0.9;
        left[WINDOW + 100] = 0.9;
        let right = silent(2 * WINDOW);

        let peaks = extract_peaks(&left, &right);
        assert_eq!(peaks, vec![Peak { position: 100, volume: 0.9 }]);
    }

    #[test]
    fn test_louder_window_wins() {
        let mut left = silent(2 * WINDOW);
        left[100] = 0.9;
        let mut right = silent(2 * WINDOW);
        right[WINDOW + 100] = -0.95;

        let peaks = extract_peaks(&left, &right);
        assert_eq!(peaks, vec![Peak { position: WINDOW + 100, volume: 0.95 }]);
    }

    #[test]
    fn test_silent_window_reports_first_sample() {
        let left = silent(2 * WINDOW);
        let maxima = window_maxima(&left, &left, WINDOW, ChannelMixMode::Dominant);
        assert_eq!(
            maxima,
            vec![
                Peak { position: 0, volume: 0.0 },
                Peak { position: WINDOW, volume: 0.0 },
            ]
        );
    }

    #[test]
    fn test_window_maxima_keeps_first_of_equal_samples() {
        let mut left = silent(WINDOW);
        left[10] = 0.5;
        left[20] = -0.5;
        let maxima = window_maxima(&left, &silent(WINDOW), WINDOW, ChannelMixMode::Dominant);
        assert_eq!(maxima[0].position, 10);
    }

    #[test]
    fn test_trailing_partial_window_not_scanned() {
        let mut left = silent(3 * WINDOW - 1);
        left[2 * WINDOW + 5] = 1.0;
        let maxima = window_maxima(&left, &left, WINDOW, ChannelMixMode::Dominant);
        assert_eq!(maxima.len(), 2);
        assert!(maxima.iter().all(|peak| peak.position < 2 * WINDOW));
    }

    #[test]
    fn test_odd_count_floors_and_restores_time_order() {
        // Five windows with volumes 0.1, 0.5, 0.3, 0.9, 0.7: keep floor(2.5) = 2
        let volumes = [0.1, 0.5, 0.3, 0.9, 0.7];
        let mut left = silent(5 * WINDOW);
        for (window, volume) in volumes.iter().enumerate() {
            left[window * WINDOW + 7] = *volume;
        }

        let peaks = extract_peaks(&left, &left);
        let positions: Vec<usize> = peaks.iter().map(|peak| peak.position).collect();
        assert_eq!(positions, vec![3 * WINDOW + 7, 4 * WINDOW + 7]);
    }

    #[test]
    fn test_output_count_and_strict_ordering() {
        for windows in [1usize, 2, 3, 8, 13, 60] {
            let left: Vec<f32> = (0..windows * WINDOW + 321)
                .map(|i| ((i * 7919) % 1000) as f32 / 1000.0)
                .collect();
            let right: Vec<f32> = left.iter().rev().copied().collect();

            let peaks = extract_peaks(&left, &right);
            assert_eq!(peaks.len(), windows / 2);
            assert!(peaks.windows(2).all(|pair| pair[0].position < pair[1].position));
        }
    }

    #[test]
    fn test_retain_loudest_is_stable() {
        let peaks = vec![
            Peak { position: 0, volume: 0.2 },
            Peak { position: 1, volume: 0.8 },
            Peak { position: 2, volume: 0.2 },
            Peak { position: 3, volume: 0.8 },
        ];
        let kept = retain_loudest(peaks, 0.75);
        let positions: Vec<usize> = kept.iter().map(|peak| peak.position).collect();
        assert_eq!(positions, vec![1, 3, 0]);
    }

    #[test]
    fn test_mismatched_channels_use_common_prefix() {
        let mut left = silent(2 * WINDOW + 500);
        left[WINDOW + 1] = 0.4;
        let right = silent(2 * WINDOW);
        let peaks = extract_peaks(&left, &right);
        assert_eq!(peaks, vec![Peak { position: WINDOW + 1, volume: 0.4 }]);
    }

    #[test]
    fn test_mono_mix_mode() {
        let mut left = silent(2 * WINDOW);
        let mut right = silent(2 * WINDOW);
        // Out of phase in the first window, in phase in the second
        left[50] = 0.8;
        right[50] = -0.8;
        left[WINDOW + 50] = 0.4;
        right[WINDOW + 50] = 0.4;

        let config = TempoConfig {
            channel_mix: ChannelMixMode::Mono,
            ..TempoConfig::default()
        };
        let peaks = extract_peaks_with(&left, &right, &config);
        assert_eq!(peaks, vec![Peak { position: WINDOW + 50, volume: 0.4 }]);
    }
}
