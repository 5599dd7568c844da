//! Analysis result types

use serde::{Deserialize, Serialize};

use crate::features::peaks::Peak;
use crate::features::period::TempoCandidate;

/// Analysis flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisFlag {
    /// Too few peaks or intervals to produce any candidate
    InsufficientSignal,
    /// The two best candidates have the same vote count
    MultimodalTempo,
}

/// Complete tempo analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempoResult {
    /// Estimated tempo in BPM, `None` when no interval voted
    pub bpm: Option<u32>,

    /// Share of all votes held by the estimate (0.0-1.0)
    pub confidence: f32,

    /// Ranked candidates, best first
    pub candidates: Vec<TempoCandidate>,

    /// Retained peaks in time order
    pub peaks: Vec<Peak>,

    /// Analysis metadata
    pub metadata: AnalysisMetadata,
}

impl TempoResult {
    /// Ranked candidates after the estimate
    pub fn alternatives(&self) -> &[TempoCandidate] {
        self.candidates.get(1..).unwrap_or(&[])
    }

    /// Peak positions in seconds, for timeline display
    pub fn peak_times(&self) -> Vec<f32> {
        let rate = self.metadata.sample_rate as f32;
        self.peaks
            .iter()
            .map(|peak| peak.position as f32 / rate)
            .collect()
    }

    /// True if the given flag was raised
    pub fn has_flag(&self, flag: AnalysisFlag) -> bool {
        self.metadata.flags.contains(&flag)
    }
}

/// Analysis metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Audio duration in seconds
    pub duration_seconds: f32,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Complete windows scanned
    pub window_count: usize,

    /// Peaks kept after the loudness filter
    pub peaks_retained: usize,

    /// Peak pairs that cast a vote
    pub pairs_voted: usize,

    /// Peak pairs skipped for a non-positive interval
    pub pairs_skipped: usize,

    /// Distinct tempos that received votes (before truncation to the top N)
    pub distinct_tempos: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: f32,

    /// Algorithm version
    pub algorithm_version: String,

    /// Analysis flags
    pub flags: Vec<AnalysisFlag>,
}
