//! # Peak Tempo
//!
//! Tempo (BPM) estimation for short decoded stereo excerpts, based on window
//! peaks and interval voting.
//!
//! ## Features
//!
//! - **Peak Extraction**: loudest sample per half-second window, loudest half kept
//! - **Interval Voting**: forward-neighborhood intervals folded into one octave
//! - **Ranking**: best tempo plus runner-up alternatives with vote counts
//!
//! ## Quick Start
//!
//! ```no_run
//! use peak_tempo::{analyze_tempo, SampleBuffer, TempoConfig};
//!
//! // Decoded stereo samples, 44.1 kHz
//! let left: Vec<f32> = vec![]; // Your audio data
//! let right: Vec<f32> = vec![];
//! let buffer = SampleBuffer::new(left, right, 44100)?;
//!
//! let result = analyze_tempo(&buffer, &TempoConfig::default())?;
//!
//! match result.bpm {
//!     Some(bpm) => println!("BPM: {} (confidence: {:.2})", bpm, result.confidence),
//!     None => println!("Not enough signal"),
//! }
//! # Ok::<(), peak_tempo::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! SampleBuffer → Peak Extraction → Interval Voting → Ranking → TempoResult
//! ```
//!
//! Both stages are pure functions of their input and can run on many
//! buffers in parallel (see `analyze_batch` with the `parallel` feature).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod preprocessing;

// Re-export main types
pub use analysis::result::{AnalysisFlag, AnalysisMetadata, TempoResult};
pub use config::TempoConfig;
pub use error::AnalysisError;
pub use features::peaks::{extract_peaks, Peak};
pub use features::period::interval_voting::vote_tempos;
pub use features::period::ranking::rank_candidates;
pub use features::period::TempoCandidate;
pub use io::sample_buffer::SampleBuffer;

/// Main analysis function
///
/// Extracts window peaks, votes for tempos over peak intervals and ranks the
/// result.
///
/// # Arguments
///
/// * `buffer` - Decoded stereo samples
/// * `config` - Analysis configuration parameters
///
/// # Returns
///
/// `TempoResult` with the estimate, ranked alternatives, retained peaks and
/// metadata. A buffer too short to produce any interval is not an error: the
/// result has `bpm: None` and the `InsufficientSignal` flag.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the configuration is invalid or
/// the buffer's sample rate differs from `config.sample_rate`.
///
/// # Example
///
/// ```
/// use peak_tempo::{analyze_tempo, SampleBuffer, TempoConfig};
///
/// let silence = vec![0.0f32; 44100];
/// let buffer = SampleBuffer::new(silence.clone(), silence, 44100)?;
/// let result = analyze_tempo(&buffer, &TempoConfig::default())?;
/// assert_eq!(result.bpm, None);
/// # Ok::<(), peak_tempo::AnalysisError>(())
/// ```
pub fn analyze_tempo(
    buffer: &SampleBuffer,
    config: &TempoConfig,
) -> Result<TempoResult, AnalysisError> {
    use std::time::Instant;
    let start_time = Instant::now();

    config.validate()?;

    if buffer.sample_rate() != config.sample_rate {
        return Err(AnalysisError::InvalidInput(format!(
            "Buffer sample rate {} Hz does not match configured {} Hz",
            buffer.sample_rate(),
            config.sample_rate
        )));
    }

    log::debug!(
        "Starting tempo analysis: {} samples at {} Hz",
        buffer.len(),
        buffer.sample_rate()
    );

    // Stage 1: Peak extraction
    use features::peaks::extract_peaks_with;
    let peaks = extract_peaks_with(buffer.left(), buffer.right(), config);

    // Stage 2: Interval voting
    use features::period::interval_voting::tally_intervals;
    let tally = tally_intervals(&peaks, config);
    let total_votes = tally.total_votes();
    let distinct_tempos = tally.candidates.len();

    // Stage 3: Ranking
    let ranked = rank_candidates(tally.candidates, config.max_candidates);

    use analysis::confidence::{is_multimodal, vote_share};
    let confidence = vote_share(&ranked, total_votes);

    let mut flags = Vec::new();
    if ranked.is_empty() {
        log::warn!(
            "No tempo candidates from {} retained peaks, signal too short or sparse",
            peaks.len()
        );
        flags.push(AnalysisFlag::InsufficientSignal);
    } else if is_multimodal(&ranked) {
        flags.push(AnalysisFlag::MultimodalTempo);
    }

    let bpm = ranked.first().map(|candidate| candidate.tempo);
    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    log::debug!(
        "Tempo analysis done: bpm={:?}, confidence={:.3}, {:.2} ms",
        bpm,
        confidence,
        processing_time_ms
    );

    Ok(TempoResult {
        bpm,
        confidence,
        metadata: AnalysisMetadata {
            duration_seconds: buffer.duration_seconds(),
            sample_rate: buffer.sample_rate(),
            window_count: buffer.window_count(config.window_size),
            peaks_retained: peaks.len(),
            pairs_voted: tally.pairs_voted,
            pairs_skipped: tally.pairs_skipped,
            distinct_tempos,
            processing_time_ms,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
            flags,
        },
        candidates: ranked,
        peaks,
    })
}

/// Analyze several buffers in parallel
///
/// Results are returned in input order, one per buffer.
#[cfg(feature = "parallel")]
pub fn analyze_batch(
    buffers: &[SampleBuffer],
    config: &TempoConfig,
) -> Vec<Result<TempoResult, AnalysisError>> {
    use rayon::prelude::*;

    log::debug!("Analyzing batch of {} buffers", buffers.len());

    buffers
        .par_iter()
        .map(|buffer| analyze_tempo(buffer, config))
        .collect()
}
