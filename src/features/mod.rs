//! Feature extraction modules
//!
//! This module contains the two analysis stages:
//! - Window peak extraction
//! - Period estimation (interval voting, octave folding, ranking)

pub mod peaks;
pub mod period;
