//! # Notation Module
//!
//! This module holds the two fixed alphabets the rest of the crate works in:
//! the 12 Western chromatic pitch names and the 12 Hindustani scale-degree
//! symbols (sargam), each with its semitone offset from Sa.
//!
//! ## Features
//! - `PitchClass`: a chromatic pitch always reduced modulo 12
//! - `ScaleDegree`: the 12 swaras, from symbol or from offset
//! - Reverse lookup from offset to degree, built once and checked for totality
//! - Rotated name rows for grid labelling

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Number of chromatic classes in an octave.
pub const SEMITONES: usize = 12;

/// Western pitch names. Index = `PitchClass`.
pub const WESTERN_NAMES: [&str; SEMITONES] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Sargam symbols and their semitone offset from Sa.
///
/// Symbols are case-sensitive: lowercase marks the komal (flat) form of
/// r, g, d, n and uppercase `M` is tivra (sharp) Ma.
pub const DEGREE_OFFSET: [(&str, u8); SEMITONES] = [
    ("S", 0),
    ("r", 1),
    ("R", 2),
    ("g", 3),
    ("G", 4),
    ("m", 5),
    ("M", 6),
    ("P", 7),
    ("d", 8),
    ("D", 9),
    ("n", 10),
    ("N", 11),
];

/// A Western chromatic pitch class in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Builds a pitch class, reducing `index` modulo 12.
    pub fn new(index: usize) -> Self {
        Self((index % SEMITONES) as u8)
    }

    /// Iterates all 12 pitch classes in alphabet order.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..SEMITONES).map(PitchClass::new)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn name(self) -> &'static str {
        WESTERN_NAMES[self.index()]
    }

    /// Looks up a pitch by its exact Western name (e.g. "C#").
    ///
    /// # Returns
    /// * `Ok(PitchClass)` - The pitch with that name
    /// * `Err(Error::InvalidBasePitch)` - The name is not one of `WESTERN_NAMES`
    pub fn from_name(name: &str) -> Result<Self> {
        WESTERN_NAMES
            .iter()
            .position(|&n| n == name)
            .map(PitchClass::new)
            .ok_or_else(|| Error::InvalidBasePitch(name.to_string()))
    }

    /// Moves the pitch up by `semitones`, wrapping at the octave.
    pub fn transpose(self, semitones: u8) -> Self {
        Self::new(self.index() + semitones as usize)
    }

    /// Semitones from `from` up to `self`, in `0..12`.
    pub fn interval_from(self, from: PitchClass) -> u8 {
        ((self.index() + SEMITONES - from.index()) % SEMITONES) as u8
    }

    /// The 12 Western names starting at this pitch.
    pub fn rotated_names(self) -> [&'static str; SEMITONES] {
        std::array::from_fn(|i| WESTERN_NAMES[(self.index() + i) % SEMITONES])
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl Serialize for PitchClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// One of the 12 Hindustani scale degrees (swaras).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleDegree {
    Sa,
    KomalRe,
    Re,
    KomalGa,
    Ga,
    Ma,
    TivraMa,
    Pa,
    KomalDha,
    Dha,
    KomalNi,
    Ni,
}

/// Degrees indexed by semitone offset, derived from `DEGREE_OFFSET`.
///
/// Built on first use; `validate_tables` guarantees every slot is filled by
/// exactly one symbol, so lookups through this table are total.
static DEGREE_BY_OFFSET: Lazy<[ScaleDegree; SEMITONES]> = Lazy::new(|| {
    let mut table = [ScaleDegree::Sa; SEMITONES];
    for degree in ScaleDegree::ALL {
        table[degree.offset() as usize] = degree;
    }
    table
});

impl ScaleDegree {
    /// All degrees in symbol-table order, which is also ascending offset.
    pub const ALL: [ScaleDegree; SEMITONES] = [
        Self::Sa,
        Self::KomalRe,
        Self::Re,
        Self::KomalGa,
        Self::Ga,
        Self::Ma,
        Self::TivraMa,
        Self::Pa,
        Self::KomalDha,
        Self::Dha,
        Self::KomalNi,
        Self::Ni,
    ];

    fn table_index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> &'static str {
        DEGREE_OFFSET[self.table_index()].0
    }

    /// Semitones above Sa.
    pub fn offset(self) -> u8 {
        DEGREE_OFFSET[self.table_index()].1
    }

    /// Looks up a degree by its exact symbol.
    pub fn from_symbol(symbol: &str) -> Result<Self> {
        DEGREE_OFFSET
            .iter()
            .position(|&(s, _)| s == symbol)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| Error::InvalidNote(symbol.to_string()))
    }

    /// The degree sitting `offset` semitones above Sa. Offsets wrap at 12.
    pub fn from_offset(offset: usize) -> Self {
        DEGREE_BY_OFFSET[offset % SEMITONES]
    }
}

impl fmt::Display for ScaleDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ScaleDegree {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_symbol(s)
    }
}

impl Serialize for ScaleDegree {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// Symbols joined for user-facing messages, e.g. "S, r, R, ...".
pub fn degree_symbols() -> String {
    DEGREE_OFFSET.iter().map(|(s, _)| *s).collect::<Vec<_>>().join(", ")
}

/// Western names joined for user-facing messages.
pub fn western_names() -> String {
    WESTERN_NAMES.join(", ")
}

/// Checks that both alphabets are total bijections onto `0..12`.
///
/// The tables are constants, so this can only fail after a bad edit to them.
/// Binaries call it once at startup.
///
/// # Returns
/// * `Ok(())` - Every offset has exactly one symbol and all names are distinct
/// * `Err(message)` - Description of the first violation found
pub fn validate_tables() -> std::result::Result<(), String> {
    let mut seen = [false; SEMITONES];
    for (symbol, offset) in DEGREE_OFFSET {
        let slot = seen
            .get_mut(offset as usize)
            .ok_or_else(|| format!("degree {symbol} has offset {offset} outside 0..12"))?;
        if *slot {
            return Err(format!("offset {offset} is assigned to more than one degree"));
        }
        *slot = true;
    }

    for (i, (symbol, _)) in DEGREE_OFFSET.iter().enumerate() {
        if DEGREE_OFFSET[..i].iter().any(|(s, _)| s == symbol) {
            return Err(format!("degree symbol {symbol} appears twice"));
        }
    }

    for (i, name) in WESTERN_NAMES.iter().enumerate() {
        if WESTERN_NAMES[..i].contains(name) {
            return Err(format!("pitch name {name} appears twice"));
        }
    }

    tracing::trace!("notation tables validated");
    Ok(())
}
