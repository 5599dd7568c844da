//! Example: Analyze a synthetic click track
//!
//! Builds a 30 second stereo click track at the tempo given on the command
//! line (default 124 BPM) and prints the ranked estimate.
//!
//! ```text
//! RUST_LOG=debug cargo run --example analyze_click_track -- 96
//! ```

use peak_tempo::{analyze_tempo, SampleBuffer, TempoConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let bpm: f64 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 124.0,
    };

    let sample_rate = 44100u32;
    let len = sample_rate as usize * 30;
    let period = 60.0 * sample_rate as f64 / bpm;

    let mut left = vec![0.0f32; len];
    let mut right = vec![0.0f32; len];
    let mut beat = 0usize;
    loop {
        let position = (beat as f64 * period).round() as usize;
        if position >= len {
            break;
        }
        // Alternate channels so both contribute to the volume envelope
        if beat % 2 == 0 {
            left[position] = 0.9;
        } else {
            right[position] = -0.9;
        }
        beat += 1;
    }

    let buffer = SampleBuffer::new(left, right, sample_rate)?;
    let result = analyze_tempo(&buffer, &TempoConfig::default())?;

    println!("Analysis Results:");
    match result.bpm {
        Some(estimate) => println!("  BPM: {} (confidence: {:.2})", estimate, result.confidence),
        None => println!("  BPM: not enough signal"),
    }
    for candidate in result.alternatives() {
        println!("  Alternative: {} BPM ({} votes)", candidate.tempo, candidate.count);
    }
    println!("  Peaks kept: {}", result.metadata.peaks_retained);
    println!("  Processing time: {:.2} ms", result.metadata.processing_time_ms);

    Ok(())
}
