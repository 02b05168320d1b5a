//! # Scale Conversion Module
//!
//! Parses a scale written in sargam and restates it as absolute Western
//! pitch classes over a chosen base pitch.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::notation::{PitchClass, ScaleDegree};

/// A scale as entered by the user.
///
/// Order and duplicates are kept for display. Scoring only looks at which
/// pitch classes occur.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Scale {
    degrees: Vec<ScaleDegree>,
}

impl Scale {
    pub fn new(degrees: Vec<ScaleDegree>) -> Self {
        Self { degrees }
    }

    /// Parses whitespace-separated sargam symbols, e.g. "S R G P D".
    ///
    /// Validation is all-or-nothing: the first unknown token aborts parsing.
    ///
    /// # Returns
    /// * `Ok(Scale)` - Every token was a known symbol
    /// * `Err(Error::InvalidNote)` - Carries the first unknown token
    pub fn parse(input: &str) -> Result<Self> {
        Self::from_tokens(input.split_whitespace())
    }

    /// Builds a scale from already-split tokens.
    pub fn from_tokens<I, T>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let degrees = tokens
            .into_iter()
            .map(|token| ScaleDegree::from_symbol(token.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { degrees })
    }

    pub fn degrees(&self) -> &[ScaleDegree] {
        &self.degrees
    }

    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Symbols in entry order, e.g. `["S", "R", "G"]`.
    pub fn symbols(&self) -> Vec<&'static str> {
        self.degrees.iter().map(|d| d.symbol()).collect()
    }
}

/// Parses a base pitch token. Surrounding whitespace is ignored.
pub fn parse_base_pitch(token: &str) -> Result<PitchClass> {
    PitchClass::from_name(token.trim())
}

/// Restates `scale` in Western pitch classes with Sa on `base_pitch`.
///
/// Each degree maps to `(base_pitch + offset) mod 12`. Output order follows
/// the scale and duplicates are preserved.
pub fn convert(scale: &Scale, base_pitch: PitchClass) -> Vec<PitchClass> {
    scale
        .degrees
        .iter()
        .map(|degree| base_pitch.transpose(degree.offset()))
        .collect()
}

/// Validates raw tokens and converts them in one step.
///
/// Scale tokens are checked before the base pitch; nothing is converted
/// unless both pass.
pub fn convert_tokens<T: AsRef<str>>(scale_tokens: &[T], base_pitch: &str) -> Result<Vec<PitchClass>> {
    let scale = Scale::from_tokens(scale_tokens)?;
    let base = parse_base_pitch(base_pitch)?;
    Ok(convert(&scale, base))
}

/// Western names of `pitches`, joined with ", ".
pub fn western_names_of(pitches: &[PitchClass]) -> String {
    pitches.iter().map(|p| p.name()).collect::<Vec<_>>().join(", ")
}

impl TryFrom<&str> for Scale {
    type Error = Error;

    fn try_from(input: &str) -> Result<Self> {
        Self::parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(pitches: &[PitchClass]) -> Vec<&'static str> {
        pitches.iter().map(|p| p.name()).collect()
    }

    #[test]
    fn converts_pentatonic_on_c() {
        let scale = Scale::parse("S R G P D").unwrap();
        let western = convert(&scale, PitchClass::from_name("C").unwrap());
        assert_eq!(names(&western), vec!["C", "D", "E", "G", "A"]);
    }

    #[test]
    fn wraps_past_b() {
        let scale = Scale::parse("S G P N").unwrap();
        let western = convert(&scale, PitchClass::from_name("A").unwrap());
        assert_eq!(names(&western), vec!["A", "C#", "E", "G#"]);
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let scale = Scale::parse("P S P m").unwrap();
        let western = convert(&scale, PitchClass::from_name("D").unwrap());
        assert_eq!(names(&western), vec!["A", "D", "A", "G"]);
    }

    #[test]
    fn extra_whitespace_is_ignored() {
        let scale = Scale::parse("  S   r\tG ").unwrap();
        assert_eq!(scale.symbols(), vec!["S", "r", "G"]);
    }

    #[test]
    fn first_bad_token_is_reported() {
        assert_eq!(Scale::parse("S X Y"), Err(Error::InvalidNote("X".into())));
    }

    #[test]
    fn scale_is_checked_before_base_pitch() {
        assert_eq!(
            convert_tokens(&["S", "Q"][..], "H"),
            Err(Error::InvalidNote("Q".into()))
        );
        assert_eq!(
            convert_tokens(&["S", "R"][..], "H"),
            Err(Error::InvalidBasePitch("H".into()))
        );
    }

    #[test]
    fn base_pitch_is_trimmed() {
        assert_eq!(parse_base_pitch(" F# ").unwrap().index(), 6);
    }
}
