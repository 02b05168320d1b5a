//! # Ranking Module
//!
//! Evaluates every Western pitch as a candidate tonic for a scale and orders
//! the candidates by score.

use serde::Serialize;

use crate::evaluate::{evaluate, PresenceVector};
use crate::notation::{PitchClass, ScaleDegree};

/// Ranked result for one candidate tonic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateResult {
    /// The instrument pitch being tried as tonic.
    pub tonic: PitchClass,
    pub score: u8,
    pub presence: PresenceVector,
    /// The scale degree the base pitch falls on when `tonic` is the
    /// instrument's Sa ("Raga's S").
    pub sa_means: ScaleDegree,
}

impl CandidateResult {
    /// Sargam symbols of the occupied slots of this candidate's row.
    pub fn indian_notation(&self) -> Vec<ScaleDegree> {
        self.presence.degrees()
    }
}

/// Finds which degree of `candidate` the base pitch lands on.
///
/// This is the position of `base_pitch` in the chromatic row starting at
/// `candidate`, i.e. `(base_pitch - candidate) mod 12`. Every offset in
/// `0..12` names a degree, so the lookup is total.
pub fn sa_means(candidate: PitchClass, base_pitch: PitchClass) -> ScaleDegree {
    ScaleDegree::from_offset(base_pitch.interval_from(candidate) as usize)
}

/// Evaluates all 12 candidate tonics and sorts them by score, highest first.
///
/// Candidates are generated in alphabet order (C first) and the sort is
/// stable, so equal scores stay in ascending pitch order.
///
/// # Arguments
/// * `western_pitches` - The scale in absolute pitch classes
/// * `base_pitch` - Pitch the scale was entered against
///
/// # Returns
/// * Exactly 12 results, one per pitch class
pub fn rank_all(western_pitches: &[PitchClass], base_pitch: PitchClass) -> Vec<CandidateResult> {
    let mut results: Vec<CandidateResult> = PitchClass::all()
        .map(|tonic| {
            let evaluation = evaluate(tonic, western_pitches);
            CandidateResult {
                tonic,
                score: evaluation.score,
                presence: evaluation.presence,
                sa_means: sa_means(tonic, base_pitch),
            }
        })
        .collect();

    // `sort_by` is stable; ties keep candidate order.
    results.sort_by(|a, b| b.score.cmp(&a.score));

    if let Some(best) = results.first() {
        tracing::debug!(
            "ranked {} candidates, best {} with score {}",
            results.len(),
            best.tonic,
            best.score
        );
    }
    results
}
