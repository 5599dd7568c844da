//! Octave folding of raw tempo values
//!
//! A beat sensed at half or double rate is the same tempo for our purposes,
//! so every raw interval tempo is moved into one canonical octave.

/// Double `tempo` while it is below `min`, then halve it while above `max`
///
/// Non-positive or non-finite input is returned unchanged.
///
/// # Example
///
/// ```
/// use peak_tempo::features::period::octave::fold_tempo;
///
/// assert_eq!(fold_tempo(240.0, 90.0, 180.0), 120.0);
/// assert_eq!(fold_tempo(40.0, 90.0, 180.0), 160.0);
/// ```
pub fn fold_tempo(tempo: f64, min: f64, max: f64) -> f64 {
    if !tempo.is_finite() || tempo <= 0.0 {
        return tempo;
    }

    let mut folded = tempo;
    while folded < min {
        folded *= 2.0;
    }
    while folded > max {
        folded /= 2.0;
    }
    folded
}

/// Fold and round to the nearest whole BPM
///
/// Returns `None` for a tempo that cannot be folded.
pub fn fold_and_round(tempo: f64, min: f64, max: f64) -> Option<u32> {
    let folded = fold_tempo(tempo, min, max);
    if !folded.is_finite() || folded <= 0.0 {
        return None;
    }
    Some(folded.round() as u32)
}
