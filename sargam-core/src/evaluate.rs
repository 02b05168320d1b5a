//! # Pitch Evaluation Module
//!
//! Scores one candidate tonic for a scale: which of the 12 slots the scale
//! occupies, and how many of those slots the preference mask rewards.

use serde::Serialize;

use crate::notation::{PitchClass, ScaleDegree, SEMITONES};

/// Slots rewarded when occupied. Indexed like `PresenceVector`.
pub const PREFERENCE_MASK: [u8; SEMITONES] = [1, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1];

/// Occupancy of the 12 slots of a candidate row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "[u8; 12]")]
pub struct PresenceVector([bool; SEMITONES]);

impl PresenceVector {
    pub fn set(&mut self, slot: usize) {
        self.0[slot % SEMITONES] = true;
    }

    pub fn is_set(&self, slot: usize) -> bool {
        self.0[slot % SEMITONES]
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// The vector as 0/1 values, the way it is printed.
    pub fn bits(&self) -> [u8; SEMITONES] {
        self.0.map(u8::from)
    }

    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&set| set).count()
    }

    /// Sargam symbols of the occupied slots, in slot order.
    pub fn degrees(&self) -> Vec<ScaleDegree> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(|(slot, _)| ScaleDegree::from_offset(slot))
            .collect()
    }
}

impl From<PresenceVector> for [u8; SEMITONES] {
    fn from(presence: PresenceVector) -> Self {
        presence.bits()
    }
}

/// Score and presence vector for one candidate tonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Occupied slots that the mask rewards, in `0..=12`.
    pub score: u8,
    pub presence: PresenceVector,
}

/// Evaluates `candidate` as the tonic for a scale given in Western pitches.
///
/// Each pitch `p` marks slot `(candidate + p) mod 12`. Note this is a sum,
/// not the interval `p - candidate`; the two agree only for C and F#.
/// Existing scores and rankings depend on the sum.
///
/// # Arguments
/// * `candidate` - Candidate tonic
/// * `western_pitches` - The scale in absolute pitch classes; order and repeats are irrelevant
///
/// # Returns
/// * `Evaluation` - Presence vector and the count of rewarded occupied slots
pub fn evaluate(candidate: PitchClass, western_pitches: &[PitchClass]) -> Evaluation {
    let mut presence = PresenceVector::default();
    for pitch in western_pitches {
        presence.set(candidate.index() + pitch.index());
    }

    let score = presence
        .iter()
        .zip(PREFERENCE_MASK)
        .map(|(set, weight)| u8::from(set) * weight)
        .sum();

    Evaluation { score, presence }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pitches(indices: &[usize]) -> Vec<PitchClass> {
        indices.iter().copied().map(PitchClass::new).collect()
    }

    #[test]
    fn pentatonic_on_c_scores_five() {
        let eval = evaluate(PitchClass::new(0), &pitches(&[0, 2, 4, 7, 9]));
        assert_eq!(eval.presence.bits(), [1, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0]);
        assert_eq!(eval.score, 5);
    }

    #[test]
    fn slots_use_sum_of_candidate_and_pitch() {
        // D (2) against E (4) lands in slot 6, not the interval slot 2.
        let eval = evaluate(PitchClass::new(2), &pitches(&[4]));
        assert!(eval.presence.is_set(6));
        assert!(!eval.presence.is_set(2));
    }

    #[test]
    fn duplicates_count_once() {
        let eval = evaluate(PitchClass::new(0), &pitches(&[7, 7, 7]));
        assert_eq!(eval.presence.count(), 1);
        assert_eq!(eval.score, 1);
    }

    #[test]
    fn empty_scale_scores_zero() {
        for candidate in PitchClass::all() {
            assert_eq!(evaluate(candidate, &[]).score, 0);
        }
    }

    #[test]
    fn chromatic_scale_scores_mask_total() {
        let all: Vec<_> = PitchClass::all().collect();
        let total: u8 = PREFERENCE_MASK.iter().sum();
        for candidate in PitchClass::all() {
            assert_eq!(evaluate(candidate, &all).score, total);
        }
    }

    #[test]
    fn score_stays_within_bounds() {
        let scale = pitches(&[0, 1, 3, 5, 6, 8, 10, 11]);
        for candidate in PitchClass::all() {
            let eval = evaluate(candidate, &scale);
            assert!(eval.score as usize <= eval.presence.count());
            assert!(eval.score <= 12);
        }
    }

    #[test]
    fn degrees_follow_slot_order() {
        let eval = evaluate(PitchClass::new(0), &pitches(&[9, 0, 4]));
        let symbols: Vec<_> = eval.presence.degrees().iter().map(|d| d.symbol()).collect();
        assert_eq!(symbols, vec!["S", "G", "D"]);
    }
}
