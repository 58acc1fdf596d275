//! Text analysis for witness readings.
//!
//! - **Normalizer**: folds case, collapses whitespace and optionally strips
//!   diacritics and punctuation before readings are compared

pub mod normalizer;

pub use normalizer::{NormalizerConfig, TextNormalizer};
