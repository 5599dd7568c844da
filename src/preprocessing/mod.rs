//! Preprocessing modules
//!
//! - Channel mixing (stereo to per-sample volume)

pub mod channel_mixer;
