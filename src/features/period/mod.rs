//! Period estimation modules
//!
//! Convert time-ordered peaks to tempo candidates using:
//! - Octave folding into a one-octave band
//! - Interval voting over a bounded forward neighborhood
//! - Ranking by vote count

pub mod interval_voting;
pub mod octave;
pub mod ranking;

use serde::{Deserialize, Serialize};

/// Folded tempo with the number of intervals that voted for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TempoCandidate {
    /// Tempo in whole BPM, inside the folding band
    pub tempo: u32,

    /// Number of peak pairs whose interval folded to this tempo
    pub count: u32,
}
