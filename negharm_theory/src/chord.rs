/// Chord construction from symbols and chord identification from notes
use std::collections::HashMap;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::error::{Result, TheoryError};
use crate::pitch::{note_to_index, PitchClass};

/// Returned by [`identify_chord`] when no quality matches the notes.
pub const UNIDENTIFIED_CHORD: &str = "Unidentified chord";

/// Quality used when a symbol carries only a root, e.g. "C".
pub const DEFAULT_QUALITY: &str = "maj";

/// Every known chord quality with its semitone offsets from the root.
///
/// Offsets are written ascending and may exceed an octave (9ths, 11ths, 13ths
/// and altered tensions).
pub const CHORD_QUALITIES: &[(&str, &[u8])] = &[
    ("maj", &[0, 4, 7]),
    ("m", &[0, 3, 7]),
    ("7", &[0, 4, 7, 10]),
    ("maj7", &[0, 4, 7, 11]),
    ("m7", &[0, 3, 7, 10]),
    ("6", &[0, 4, 7, 9]),
    ("m6", &[0, 3, 7, 9]),
    ("9", &[0, 4, 7, 10, 14]),
    ("m9", &[0, 3, 7, 10, 14]),
    ("maj9", &[0, 4, 7, 11, 14]),
    ("11", &[0, 4, 7, 10, 14, 17]),
    ("m11", &[0, 3, 7, 10, 14, 17]),
    ("13", &[0, 4, 7, 10, 14, 21]),
    ("m13", &[0, 3, 7, 10, 14, 21]),
    ("sus2", &[0, 2, 7]),
    ("sus4", &[0, 5, 7]),
    ("dim", &[0, 3, 6]),
    ("aug", &[0, 4, 8]),
    ("7b9", &[0, 4, 7, 10, 13]),
    ("7#9", &[0, 4, 7, 10, 15]),
    ("7#11", &[0, 4, 7, 10, 18]),
    ("7b13", &[0, 4, 7, 10, 20]),
    ("m7b5", &[0, 3, 6, 10]),
    ("dim7", &[0, 3, 6, 9]),
];

lazy_static! {
    static ref CHORD_SYMBOL: Regex = Regex::new(r"(?s)^([A-Ga-g][b#]?)(.*)$").unwrap();

    /// Interval signature ("0,4,7") -> quality name, derived from [`CHORD_QUALITIES`].
    static ref QUALITY_BY_SIGNATURE: HashMap<String, &'static str> = CHORD_QUALITIES
        .iter()
        .map(|(name, offsets)| (signature(offsets), *name))
        .collect();
}

/// Comma-joined interval list used as the identification key.
fn signature(intervals: &[u8]) -> String {
    intervals
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Offsets for a quality name. Names are case-sensitive ("M7" is not "m7").
pub fn quality_offsets(quality: &str) -> Option<&'static [u8]> {
    CHORD_QUALITIES
        .iter()
        .find(|(name, _)| *name == quality)
        .map(|(_, offsets)| *offsets)
}

/// A chord symbol split into its root spelling and quality name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordSymbol {
    /// Root as written, uppercased ("C", "F#", "DB")
    pub root: String,
    /// Quality name, [`DEFAULT_QUALITY`] if the symbol had none
    pub quality: String,
}

impl ChordSymbol {
    /// Notes of the chord in offset order.
    ///
    /// Each offset is reduced to its pitch class, so extensions lose their
    /// octave and duplicates can appear. An unknown quality, or a root that is
    /// not one of the sharp-spelled note names (e.g. "Db"), yields no notes.
    pub fn notes(&self) -> Vec<&'static str> {
        let Some(root) = note_to_index(&self.root) else {
            debug!("chord root '{}' does not resolve to a pitch class", self.root);
            return Vec::new();
        };
        let Some(offsets) = quality_offsets(&self.quality) else {
            debug!("unknown chord quality '{}'", self.quality);
            return Vec::new();
        };

        offsets
            .iter()
            .map(|&offset| root.transpose(offset as i32).name())
            .collect()
    }
}

/// Split a chord symbol like "F#m7" into root and quality.
///
/// The root is a letter A-G in either case, optionally followed by one `b`
/// or `#`. Everything after it is the quality.
pub fn parse_chord_symbol(symbol: &str) -> Result<ChordSymbol> {
    let caps = CHORD_SYMBOL
        .captures(symbol)
        .ok_or_else(|| TheoryError::InvalidChordSymbol(symbol.to_string()))?;

    let root = caps[1].to_uppercase();
    let quality = match &caps[2] {
        "" => DEFAULT_QUALITY.to_string(),
        q => q.to_string(),
    };

    Ok(ChordSymbol { root, quality })
}

/// Notes of the chord named by `symbol`, e.g. "Am7" -> A C E G.
///
/// Fails only when the symbol has no root letter; see [`ChordSymbol::notes`]
/// for the cases that produce an empty chord.
pub fn build_chord(symbol: &str) -> Result<Vec<&'static str>> {
    Ok(parse_chord_symbol(symbol)?.notes())
}

/// Name the chord formed by `notes`, taking the last note as the root.
///
/// Intervals above the root are sorted (duplicates kept) and looked up by
/// signature. Returns [`UNIDENTIFIED_CHORD`] when nothing matches, including
/// for empty input. Any note that is not a known name is an error.
///
/// Intervals are always below an octave, so qualities with extensions past
/// 11 semitones (9, 11, 13, 7#11, ...) are never reported.
pub fn identify_chord<S: AsRef<str>>(notes: &[S]) -> Result<String> {
    let Some(last) = notes.last() else {
        return Ok(UNIDENTIFIED_CHORD.to_string());
    };
    let tonic = resolve(last.as_ref())?;

    let mut intervals = notes
        .iter()
        .map(|note| resolve(note.as_ref()).map(|pc| pc.interval_from(tonic)))
        .collect::<Result<Vec<u8>>>()?;
    intervals.sort_unstable();

    let key = signature(&intervals);
    match QUALITY_BY_SIGNATURE.get(&key) {
        Some(quality) => Ok(format!("{tonic}{quality}")),
        None => {
            debug!("no chord quality with intervals [{key}] above {tonic}");
            Ok(UNIDENTIFIED_CHORD.to_string())
        }
    }
}

fn resolve(note: &str) -> Result<PitchClass> {
    note_to_index(note).ok_or_else(|| TheoryError::InvalidNote(note.to_string()))
}
