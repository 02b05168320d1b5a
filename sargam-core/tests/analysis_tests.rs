//! End-to-end tests for `analyze`
//!
//! Covers conversion, scoring, ranking and input rejection through the
//! public entry point.

use pretty_assertions::assert_eq;
use sargam_core::{analyze, convert, evaluate, rank_all, Error, PitchClass, Scale, WESTERN_NAMES};

fn names(pitches: &[PitchClass]) -> Vec<&'static str> {
    pitches.iter().map(|p| p.name()).collect()
}

#[test]
fn test_pentatonic_on_c_converts_to_western() {
    let analysis = analyze("S R G P D", "C").unwrap();
    assert_eq!(names(&analysis.western), vec!["C", "D", "E", "G", "A"]);
}

#[test]
fn test_c_candidate_scores_five() {
    let analysis = analyze("S R G P D", "C").unwrap();
    let c = analysis
        .candidates
        .iter()
        .find(|r| r.tonic.name() == "C")
        .unwrap();

    let occupied: Vec<usize> = (0..12).filter(|&i| c.presence.is_set(i)).collect();
    assert_eq!(occupied, vec![0, 2, 4, 7, 9]);
    assert_eq!(c.score, 5);
}

#[test]
fn test_invalid_scale_token_aborts() {
    let err = analyze("S X G", "C").unwrap_err();
    assert_eq!(err, Error::InvalidNote("X".to_string()));
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains('X'));
}

#[test]
fn test_invalid_base_pitch_lists_alphabet() {
    let err = analyze("S R G P D", "H").unwrap_err();
    assert_eq!(err, Error::InvalidBasePitch("H".to_string()));
    let msg = err.to_string();
    for name in WESTERN_NAMES {
        assert!(msg.contains(name), "message should list {name}: {msg}");
    }
}

#[test]
fn test_always_twelve_distinct_candidates() {
    for (scale, base) in [("S", "C"), ("S r g m P d n", "G#"), ("", "B"), ("N N N", "E")] {
        let analysis = analyze(scale, base).unwrap();
        assert_eq!(analysis.candidates.len(), 12);
        let mut tonics: Vec<_> = analysis.candidates.iter().map(|r| r.tonic).collect();
        tonics.sort();
        tonics.dedup();
        assert_eq!(tonics.len(), 12);
    }
}

#[test]
fn test_equal_scores_keep_pitch_order() {
    let analysis = analyze("S m P", "D").unwrap();
    for pair in analysis.candidates.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            assert!(pair[0].tonic.index() < pair[1].tonic.index());
        }
    }
}

#[test]
fn test_conversion_offsets_round_trip() {
    let scale = Scale::parse("S r R g G m M P d D n N").unwrap();
    for k in 0..12 {
        let base = PitchClass::from_name(WESTERN_NAMES[k]).unwrap();
        let western = convert(&scale, base);
        for (degree, pitch) in scale.degrees().iter().zip(&western) {
            assert_eq!(pitch.index(), (degree.offset() as usize + k) % 12);
            assert_eq!(pitch.interval_from(base), degree.offset());
        }
    }
}

#[test]
fn test_rank_all_agrees_with_evaluate() {
    let scale = Scale::parse("S R g m P D n").unwrap();
    let base = PitchClass::from_name("E").unwrap();
    let western = convert(&scale, base);
    for result in rank_all(&western, base) {
        let eval = evaluate(result.tonic, &western);
        assert_eq!(result.score, eval.score);
        assert_eq!(result.presence, eval.presence);
    }
}

#[test]
fn test_analysis_serializes_with_names_and_symbols() {
    let analysis = analyze("S G P", "D").unwrap();
    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["scale"], serde_json::json!(["S", "G", "P"]));
    assert_eq!(json["base_pitch"], "D");
    assert_eq!(json["western"], serde_json::json!(["D", "F#", "A"]));
    assert_eq!(json["candidates"].as_array().unwrap().len(), 12);
    assert_eq!(json["candidates"][0]["presence"].as_array().unwrap().len(), 12);
}
