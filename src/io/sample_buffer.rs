//! Decoded stereo sample buffer

use crate::error::AnalysisError;

/// Two equal-length channels of decoded audio at a fixed sample rate
///
/// The buffer is immutable once built; the analysis stages only borrow it.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    left: Vec<f32>,
    right: Vec<f32>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Create a buffer from separate channels
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if the channels differ in length
    /// or the sample rate is zero.
    pub fn new(left: Vec<f32>, right: Vec<f32>, sample_rate: u32) -> Result<Self, AnalysisError> {
        if left.len() != right.len() {
            return Err(AnalysisError::InvalidInput(format!(
                "Channel length mismatch: left={}, right={}",
                left.len(),
                right.len()
            )));
        }

        if sample_rate == 0 {
            return Err(AnalysisError::InvalidInput(
                "Invalid sample rate: 0".to_string(),
            ));
        }

        Ok(Self {
            left,
            right,
            sample_rate,
        })
    }

    /// Create a buffer from interleaved samples
    ///
    /// Mono input is copied into both channels; stereo input is de-interleaved.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` for channel counts other than 1 or 2,
    /// or when a stereo stream ends in the middle of a frame.
    ///
    /// # Example
    ///
    /// ```
    /// use peak_tempo::SampleBuffer;
    ///
    /// let buffer = SampleBuffer::from_interleaved(&[0.1, -0.2, 0.3, -0.4], 2, 44100)?;
    /// assert_eq!(buffer.left(), &[0.1, 0.3]);
    /// assert_eq!(buffer.right(), &[-0.2, -0.4]);
    /// # Ok::<(), peak_tempo::AnalysisError>(())
    /// ```
    pub fn from_interleaved(
        samples: &[f32],
        channels: u16,
        sample_rate: u32,
    ) -> Result<Self, AnalysisError> {
        match channels {
            1 => Self::new(samples.to_vec(), samples.to_vec(), sample_rate),
            2 => {
                if samples.len() % 2 != 0 {
                    return Err(AnalysisError::InvalidInput(format!(
                        "Interleaved stereo stream has odd length {}",
                        samples.len()
                    )));
                }
                let (left, right) = samples.chunks_exact(2).map(|frame| (frame[0], frame[1])).unzip();
                Self::new(left, right, sample_rate)
            }
            n => Err(AnalysisError::InvalidInput(format!(
                "Unsupported channel count: {}",
                n
            ))),
        }
    }

    /// Left channel samples
    pub fn left(&self) -> &[f32] {
        &self.left
    }

    /// Right channel samples
    pub fn right(&self) -> &[f32] {
        &self.right
    }

    /// Samples per channel
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// True if the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Duration in seconds
    pub fn duration_seconds(&self) -> f32 {
        self.len() as f32 / self.sample_rate as f32
    }

    /// Number of complete windows of `window_size` samples
    ///
    /// A trailing partial window is not counted.
    pub fn window_count(&self, window_size: usize) -> usize {
        if window_size == 0 {
            return 0;
        }
        self.len() / window_size
    }
}
