//! Pairwise sequence alignment under an affine gap model.
//!
//! The two entry points are [`align_global`] (Needleman-Wunsch) and [`align_local`] (Smith-Waterman).
//! Both take the scoring parameters explicitly per call.

pub mod aligner;
pub mod alignment_matrix;
pub mod alignment_result;
pub mod error;
mod io;
pub mod score;
pub mod scoring_model;
pub mod traceback;

pub use aligner::{AlignmentMode, align_global, align_local};
pub use alignment_result::AlignmentResult;
pub use scoring_model::ScoringModel;
