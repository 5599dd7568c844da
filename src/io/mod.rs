//! Audio buffer types
//!
//! Decoding is left to the caller; this module holds the decoded PCM.

pub mod sample_buffer;
