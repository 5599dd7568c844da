//! Configuration parameters for tempo analysis

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::preprocessing::channel_mixer::ChannelMixMode;

/// Sample rate the default configuration is tuned for (Hz)
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Default analysis window: 0.5 s at 44.1 kHz
pub const DEFAULT_WINDOW_SIZE: usize = 22050;

/// Tempo analysis configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TempoConfig {
    /// Sample rate of the analysed buffer in Hz (default: 44100)
    pub sample_rate: u32,

    // Peak extraction
    /// Samples per analysis window (default: 22050)
    pub window_size: usize,

    /// Fraction of window peaks kept, loudest first (default: 0.5)
    /// The kept count is floored, so 7 peaks at 0.5 keep 3
    pub retain_ratio: f64,

    /// How the two channels are combined into one volume per sample
    /// (default: Dominant)
    pub channel_mix: ChannelMixMode,

    // Interval voting
    /// Number of following peaks paired with each peak (default: 9)
    pub neighborhood: usize,

    /// Lower edge of the octave-folding band in BPM (default: 90.0)
    pub min_tempo: f64,

    /// Upper edge of the octave-folding band in BPM (default: 180.0)
    pub max_tempo: f64,

    // Ranking
    /// Number of ranked candidates reported (default: 5)
    pub max_candidates: usize,
}

impl Default for TempoConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            window_size: DEFAULT_WINDOW_SIZE,
            retain_ratio: 0.5,
            channel_mix: ChannelMixMode::Dominant,
            neighborhood: 9,
            min_tempo: 90.0,
            max_tempo: 180.0,
            max_candidates: 5,
        }
    }
}

impl TempoConfig {
    /// Default configuration for another sample rate
    ///
    /// The window keeps its 0.5 s duration.
    ///
    /// # Example
    ///
    /// ```
    /// use peak_tempo::TempoConfig;
    ///
    /// let config = TempoConfig::for_sample_rate(48000);
    /// assert_eq!(config.window_size, 24000);
    /// ```
    pub fn for_sample_rate(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            window_size: (sample_rate / 2) as usize,
            ..Self::default()
        }
    }

    /// Check that the parameters describe a usable analysis
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` naming the first bad parameter.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.sample_rate == 0 {
            return Err(AnalysisError::InvalidInput(
                "Invalid sample rate: 0".to_string(),
            ));
        }

        if self.window_size == 0 {
            return Err(AnalysisError::InvalidInput(
                "Invalid window size: 0".to_string(),
            ));
        }

        if !(self.retain_ratio > 0.0 && self.retain_ratio <= 1.0) {
            return Err(AnalysisError::InvalidInput(format!(
                "Retain ratio must be in (0, 1], got {}",
                self.retain_ratio
            )));
        }

        if self.neighborhood == 0 {
            return Err(AnalysisError::InvalidInput(
                "Invalid neighborhood: 0".to_string(),
            ));
        }

        if !self.min_tempo.is_finite()
            || !self.max_tempo.is_finite()
            || self.min_tempo <= 0.0
            || self.max_tempo <= 0.0
        {
            return Err(AnalysisError::InvalidInput(format!(
                "Invalid tempo band: [{:.1}, {:.1}]",
                self.min_tempo, self.max_tempo
            )));
        }

        // Halving from just above max must land at or above min
        if self.max_tempo < 2.0 * self.min_tempo {
            return Err(AnalysisError::InvalidInput(format!(
                "Tempo band [{:.1}, {:.1}] is narrower than one octave",
                self.min_tempo, self.max_tempo
            )));
        }

        if self.max_candidates == 0 {
            return Err(AnalysisError::InvalidInput(
                "Invalid candidate limit: 0".to_string(),
            ));
        }

        Ok(())
    }
}
