//! Channel mixing utilities (stereo to per-sample volume)

use serde::{Deserialize, Serialize};

/// How two channels are combined into a single volume value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChannelMixMode {
    /// Keep the louder channel: max(|L|, |R|)
    #[default]
    Dominant,
    /// Simple average: |L + R| / 2
    Mono,
}

/// Volume of one stereo sample
///
/// # Example
///
/// ```
/// use peak_tempo::preprocessing::channel_mixer::{sample_volume, ChannelMixMode};
///
/// assert_eq!(sample_volume(-0.8, 0.2, ChannelMixMode::Dominant), 0.8);
/// assert_eq!(sample_volume(-0.8, 0.2, ChannelMixMode::Mono), 0.3);
/// ```
#[inline]
pub fn sample_volume(left: f32, right: f32, mode: ChannelMixMode) -> f32 {
    match mode {
        ChannelMixMode::Dominant => left.abs().max(right.abs()),
        ChannelMixMode::Mono => ((left + right) * 0.5).abs(),
    }
}
