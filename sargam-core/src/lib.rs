// sargam-core/src/lib.rs

//! The core logic for the sargam tonic finder.
//! This crate converts a scale written in Hindustani notation into Western
//! pitches, scores each of the 12 pitches as the instrument's tonic, and
//! ranks them. It is completely headless and contains no GUI code.

pub mod convert;
pub mod error;
pub mod evaluate;
pub mod notation;
pub mod rank;
pub mod report;

use serde::Serialize;

pub use convert::{convert, Scale};
pub use error::{Error, Result};
pub use evaluate::{evaluate, Evaluation, PresenceVector, PREFERENCE_MASK};
pub use notation::{PitchClass, ScaleDegree, DEGREE_OFFSET, WESTERN_NAMES};
pub use rank::{rank_all, CandidateResult};

/// Represents the result of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The scale as entered, in sargam.
    pub scale: Scale,
    /// Pitch the scale was entered against.
    pub base_pitch: PitchClass,
    /// The scale restated in Western pitches, in entry order.
    pub western: Vec<PitchClass>,
    /// All 12 candidate tonics, best first.
    pub candidates: Vec<CandidateResult>,
}

/// Validates the raw inputs and runs the full analysis.
///
/// Both inputs are checked before anything is computed: scale tokens first,
/// then the base pitch. On error no partial result exists.
///
/// # Arguments
/// * `scale_input` - Whitespace-separated sargam symbols, e.g. "S R G P D"
/// * `base_pitch_input` - A Western pitch name, e.g. "C" or "F#"
///
/// # Returns
/// * `Ok(Analysis)` - Converted scale and ranked candidates
/// * `Err(Error)` - The first invalid token
pub fn analyze(scale_input: &str, base_pitch_input: &str) -> Result<Analysis> {
    tracing::debug!(scale = scale_input, base_pitch = base_pitch_input, "starting analysis");

    let validated = Scale::parse(scale_input)
        .and_then(|scale| Ok((scale, convert::parse_base_pitch(base_pitch_input)?)));
    let (scale, base_pitch) = match validated {
        Ok(pair) => pair,
        Err(e) => {
            tracing::debug!("input rejected: {}", e);
            return Err(e);
        }
    };

    let western = convert(&scale, base_pitch);
    let candidates = rank_all(&western, base_pitch);

    Ok(Analysis {
        scale,
        base_pitch,
        western,
        candidates,
    })
}
