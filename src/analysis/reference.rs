//! Comparison against an externally reported tempo
//!
//! Catalog services often report a tempo for a track. That value may sit an
//! octave away from ours, so it is folded into the same band first.

use serde::{Deserialize, Serialize};

use crate::config::TempoConfig;
use crate::error::AnalysisError;
use crate::features::period::octave::fold_tempo;

/// Estimated tempo measured against a reference tempo
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceComparison {
    /// Reference tempo as reported
    pub reference_bpm: f64,

    /// Reference folded into the analysis band
    pub folded_reference: f64,

    /// `estimate - folded_reference` in BPM
    pub difference: f64,

    /// True if the reported reference lay outside the band and had to be folded
    pub octave_related: bool,
}

impl ReferenceComparison {
    /// True if the estimate is within `tolerance` BPM of the folded reference
    pub fn agrees_within(&self, tolerance: f64) -> bool {
        self.difference.abs() <= tolerance
    }
}

/// Compare an estimated tempo with a reference tempo
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the reference is not a positive
/// finite number.
///
/// # Example
///
/// ```
/// use peak_tempo::analysis::reference::compare_to_reference;
/// use peak_tempo::TempoConfig;
///
/// let comparison = compare_to_reference(120, 60.2, &TempoConfig::default())?;
/// assert!(comparison.octave_related);
/// assert!(comparison.agrees_within(1.0));
/// # Ok::<(), peak_tempo::AnalysisError>(())
/// ```
pub fn compare_to_reference(
    estimate: u32,
    reference_bpm: f64,
    config: &TempoConfig,
) -> Result<ReferenceComparison, AnalysisError> {
    if !reference_bpm.is_finite() || reference_bpm <= 0.0 {
        return Err(AnalysisError::InvalidInput(format!(
            "Invalid reference tempo: {}",
            reference_bpm
        )));
    }

    let folded_reference = fold_tempo(reference_bpm, config.min_tempo, config.max_tempo);

    Ok(ReferenceComparison {
        reference_bpm,
        folded_reference,
        difference: estimate as f64 - folded_reference,
        octave_related: folded_reference != reference_bpm,
    })
}
