/// Reharmonization of a note line and a chord into negative harmony.
///
/// This ties the codec, the transposer, the chord builder and the identifier
/// together: validate the tonic, mirror every note, then mirror the chord and
/// name the result.
use std::fmt;

use log::{debug, info};

use crate::chord::{build_chord, identify_chord};
use crate::error::{Result, TheoryError};
use crate::negative::transpose;
use crate::pitch::{note_to_index, PitchClass};

/// Raw text inputs. Each field is trimmed before use; a blank `notes` or
/// `chord` field is skipped.
#[derive(Debug, Clone, Default)]
pub struct ReharmonizeRequest {
    pub tonic: String,
    /// Whitespace-separated note names
    pub notes: String,
    /// Chord symbol such as "G7"
    pub chord: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordReharmonization {
    /// Identified name of the mirrored chord, or the unidentified sentinel
    pub name: String,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reharmonization {
    pub tonic: PitchClass,
    /// Mirrored note line, `None` if no notes were given
    pub notes: Option<Vec<String>>,
    /// Mirrored chord, `None` if no chord was given
    pub chord: Option<ChordReharmonization>,
}

impl fmt::Display for Reharmonization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(notes) = &self.notes {
            writeln!(f, "Transposed notes: {}", notes.join(" "))?;
        }
        if let Some(chord) = &self.chord {
            writeln!(f, "Transposed chord: {} ({})", chord.name, chord.notes.join(" "))?;
        }
        Ok(())
    }
}

/// Mirror a single chord symbol around `tonic` and name what comes out.
pub fn reharmonize_chord(symbol: &str, tonic: PitchClass) -> Result<ChordReharmonization> {
    let notes: Vec<String> = build_chord(symbol)?
        .into_iter()
        .map(|note| transpose(note, tonic))
        .collect();
    let name = identify_chord(&notes)?;
    debug!("{symbol} around {tonic} -> {name}");

    Ok(ChordReharmonization { name, notes })
}

/// Run a full reharmonization request.
///
/// An unknown tonic is the only input that aborts the whole request. Unknown
/// names in the note line are passed through unchanged.
pub fn reharmonize(request: &ReharmonizeRequest) -> Result<Reharmonization> {
    let tonic_name = request.tonic.trim();
    let tonic = note_to_index(tonic_name)
        .ok_or_else(|| TheoryError::InvalidTonic(tonic_name.to_string()))?;
    info!("reharmonizing around {tonic}");

    let notes_input = request.notes.trim();
    let notes = (!notes_input.is_empty()).then(|| {
        notes_input
            .split_whitespace()
            .map(|note| transpose(note, tonic))
            .collect()
    });

    let chord_input = request.chord.trim();
    let chord = if chord_input.is_empty() {
        None
    } else {
        Some(reharmonize_chord(chord_input, tonic)?)
    };

    Ok(Reharmonization {
        tonic,
        notes,
        chord,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::UNIDENTIFIED_CHORD;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn request(tonic: &str, notes: &str, chord: &str) -> ReharmonizeRequest {
        ReharmonizeRequest {
            tonic: tonic.to_string(),
            notes: notes.to_string(),
            chord: chord.to_string(),
        }
    }

    #[test]
    fn test_dominant_becomes_minor_subdominant_family() {
        init_logging();
        // G7 around C: G B D F -> C G# F D
        let out = reharmonize_chord("G7", PitchClass::C).unwrap();
        assert_eq!(out.notes, vec!["C", "G#", "F", "D"]);
        // root-last reading of C G# F D is D [0,3,6,10]
        assert_eq!(out.name, "Dm7b5");
    }

    #[test]
    fn test_major_triad_becomes_minor() {
        // C E G -> G D# C, identified with C as root
        let out = reharmonize_chord("Cmaj", PitchClass::C).unwrap();
        assert_eq!(out.notes, vec!["G", "D#", "C"]);
        assert_eq!(out.name, "Cm");
    }

    #[test]
    fn test_full_request() {
        init_logging();
        let out = reharmonize(&request(" c ", "C E  G xyz\n", "Cmaj")).unwrap();
        assert_eq!(out.tonic, PitchClass::C);
        assert_eq!(out.notes.as_deref().unwrap(), ["G", "D#", "C", "xyz"]);
        assert_eq!(out.chord.as_ref().unwrap().name, "Cm");
        assert_eq!(
            out.to_string(),
            "Transposed notes: G D# C xyz\nTransposed chord: Cm (G D# C)\n"
        );
    }

    #[test]
    fn test_blank_fields_are_skipped() {
        let out = reharmonize(&request("A", "  ", "")).unwrap();
        assert!(out.notes.is_none());
        assert!(out.chord.is_none());
        assert_eq!(out.to_string(), "");
    }

    #[test]
    fn test_invalid_tonic_aborts() {
        assert_eq!(
            reharmonize(&request("Bb", "C E G", "C")),
            Err(TheoryError::InvalidTonic("Bb".to_string()))
        );
        assert_eq!(
            reharmonize(&request("", "C", "")),
            Err(TheoryError::InvalidTonic(String::new()))
        );
    }

    #[test]
    fn test_malformed_chord_is_an_error() {
        assert_eq!(
            reharmonize(&request("C", "C", "xm7")),
            Err(TheoryError::InvalidChordSymbol("xm7".to_string()))
        );
    }

    #[test]
    fn test_unknown_quality_gives_empty_unidentified_chord() {
        let out = reharmonize(&request("C", "", "Cxyz")).unwrap();
        let chord = out.chord.unwrap();
        assert!(chord.notes.is_empty());
        assert_eq!(chord.name, UNIDENTIFIED_CHORD);
        assert_eq!(out.notes, None);
    }
}
