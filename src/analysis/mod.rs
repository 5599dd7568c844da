//! Analysis and result aggregation modules
//!
//! Combines the stage outputs into the final analysis:
//! - Confidence scoring
//! - Reference tempo comparison
//! - Result types

pub mod confidence;
pub mod reference;
pub mod result;
