//! # Text Report Module
//!
//! Plain-text rendering of an `Analysis`, used by the console front end and
//! for the figure/block titles in the GUI.

use std::fmt;

use crate::convert::western_names_of;
use crate::notation::ScaleDegree;
use crate::rank::CandidateResult;
use crate::Analysis;

/// Joins degree symbols with ", ".
pub fn join_degrees(degrees: &[ScaleDegree]) -> String {
    degrees.iter().map(|d| d.symbol()).collect::<Vec<_>>().join(", ")
}

/// "Keys to play the scale S, R, G at pitch C"
pub fn figure_title(analysis: &Analysis) -> String {
    format!(
        "Keys to play the scale {} at pitch {}",
        join_degrees(analysis.scale.degrees()),
        analysis.base_pitch
    )
}

/// "Instrument base pitch: D (Score: 5)"
pub fn candidate_title(result: &CandidateResult) -> String {
    format!("Instrument base pitch: {} (Score: {})", result.tonic, result.score)
}

/// "Raga's S = R on instrument"
pub fn sa_means_line(result: &CandidateResult) -> String {
    format!("Raga's S = {} on instrument", result.sa_means)
}

/// "Scale notes in Western notation based on C: C, D, E"
pub fn western_scale_line(analysis: &Analysis) -> String {
    format!(
        "Scale notes in Western notation based on {}: {}",
        analysis.base_pitch,
        western_names_of(&analysis.western)
    )
}

/// Full console report of an analysis.
///
/// Candidates are listed in ranked order; `limit` caps how many are shown.
pub struct Report<'a> {
    analysis: &'a Analysis,
    limit: usize,
}

impl<'a> Report<'a> {
    pub fn new(analysis: &'a Analysis) -> Self {
        Self {
            analysis,
            limit: analysis.candidates.len(),
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", western_scale_line(self.analysis))?;
        writeln!(f)?;
        write!(
            f,
            "Base notes and corresponding series of 0s and 1s sorted by the number of good notes:"
        )?;

        for result in self.analysis.candidates.iter().take(self.limit) {
            let bits = result
                .presence
                .bits()
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(", ");

            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "Base pitch for instrument: {}", result.tonic)?;
            writeln!(f, "Keys to play series: [{bits}]")?;
            writeln!(f, "Score (number of good notes): {}", result.score)?;
            writeln!(f, "Indian notation: {}", join_degrees(&result.indian_notation()))?;
            write!(f, "{}", sa_means_line(result))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;
    use pretty_assertions::assert_eq;

    #[test]
    fn titles() {
        let analysis = analyze("S R G P D", "C").unwrap();
        assert_eq!(figure_title(&analysis), "Keys to play the scale S, R, G, P, D at pitch C");
        assert_eq!(
            western_scale_line(&analysis),
            "Scale notes in Western notation based on C: C, D, E, G, A"
        );
        assert_eq!(candidate_title(&analysis.candidates[0]), "Instrument base pitch: C (Score: 5)");
        assert_eq!(sa_means_line(&analysis.candidates[0]), "Raga's S = S on instrument");
    }

    #[test]
    fn report_lists_first_candidate_block() {
        let analysis = analyze("S R G P D", "C").unwrap();
        let text = Report::new(&analysis).with_limit(1).to_string();
        let expected = "\
Scale notes in Western notation based on C: C, D, E, G, A

Base notes and corresponding series of 0s and 1s sorted by the number of good notes:

Base pitch for instrument: C
Keys to play series: [1, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0]
Score (number of good notes): 5
Indian notation: S, R, G, P, D
Raga's S = S on instrument";
        assert_eq!(text, expected);
    }

    #[test]
    fn report_shows_all_candidates_by_default() {
        let analysis = analyze("S g m P n", "A").unwrap();
        let text = Report::new(&analysis).to_string();
        assert_eq!(text.matches("Base pitch for instrument:").count(), 12);
    }
}
