/// Pitch classes and the note name codec.
///
/// Only sharp spellings are known. "Db" and friends do not resolve to anything.
use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::error::TheoryError;

/// The twelve pitch class names, indexed 0 (C) through 11 (B).
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// One of the twelve pitch classes (0-11, where 0 = C)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Build a pitch class from any integer, wrapping modulo 12.
    ///
    /// Negative values wrap downwards, so `-1` is B and `-13` is B as well.
    pub fn new(index: i32) -> Self {
        PitchClass(index.rem_euclid(12) as u8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Canonical (uppercase, sharp-spelled) name.
    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.index()]
    }

    /// Move up by `semitones` (or down if negative).
    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass::new(self.0 as i32 + semitones)
    }

    /// Ascending interval in semitones (0-11) from `root` up to `self`.
    pub fn interval_from(self, root: PitchClass) -> u8 {
        (self.0 + 12 - root.0) % 12
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        note_to_index(s).ok_or_else(|| TheoryError::InvalidNote(s.to_string()))
    }
}

/// Look up a note name, ignoring case.
///
/// No whitespace trimming and no flat-to-sharp normalization happen here.
/// Returns `None` for anything that is not exactly one of [`NOTE_NAMES`].
pub fn note_to_index(name: &str) -> Option<PitchClass> {
    let upper = name.to_uppercase();
    let found = NOTE_NAMES
        .iter()
        .position(|&n| n == upper)
        .map(|i| PitchClass(i as u8));
    if found.is_none() {
        trace!("'{name}' is not a known note name");
    }
    found
}

/// Name of the pitch class at `index`, wrapping modulo 12 in both directions.
pub fn index_to_note(index: i32) -> &'static str {
    PitchClass::new(index).name()
}
