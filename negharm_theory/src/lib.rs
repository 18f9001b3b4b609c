pub mod chord;
pub mod error;
pub mod negative;
pub mod pitch;
pub mod reharmonize;

pub use chord::{
    build_chord, identify_chord, parse_chord_symbol, quality_offsets, ChordSymbol, CHORD_QUALITIES,
    UNIDENTIFIED_CHORD,
};
pub use error::{Result, TheoryError};
pub use negative::{reflect, transpose};
pub use pitch::{index_to_note, note_to_index, PitchClass, NOTE_NAMES};
pub use reharmonize::{
    reharmonize, reharmonize_chord, ChordReharmonization, Reharmonization, ReharmonizeRequest,
};
