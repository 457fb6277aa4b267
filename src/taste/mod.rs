//! # Taste Scoring Module
//!
//! This module implements the scoring core of the application: turning a
//! sequence of recently played tracks into a numeric taste score, a spirit
//! animal category, and an influence keyword.
//!
//! The computation is a single-pass, stateless transform. Genre weights,
//! artist bonus rules, and the category threshold ladder all come from a
//! [`crate::types::TasteProfile`] loaded once at startup; the only other
//! input is a caller-provided random source used to sample the influence
//! keyword, so tests can pin the seed and assert exact outputs.
//!
//! - [`scorer`] - score aggregation and keyword sampling
//! - [`profile`] - profile defaults, validation, and category lookup

pub mod profile;
pub mod scorer;

pub use profile::{category_for, default_profile, validate_profile};
pub use scorer::{GenreContribution, ScoreError, compute_score, genre_contributions};
