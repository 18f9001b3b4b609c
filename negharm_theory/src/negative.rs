/// Negative harmony: reflection of notes across the tonic/fifth axis.
use log::{debug, trace};

use crate::pitch::{note_to_index, PitchClass};

/// Interval above the tonic -> interval it is reflected to.
///
/// Every interval 0-11 appears exactly once on the left, and the pairing is
/// `i -> (7 - i) mod 12`.
pub const TRANSPOSITION_RULES: [(u8, u8); 12] = [
    (0, 7),   // tonic -> fifth
    (1, 6),   // minor second -> tritone
    (2, 5),   // second -> fourth
    (3, 4),   // minor third -> major third
    (4, 3),   // major third -> minor third
    (5, 2),   // fourth -> second
    (7, 0),   // fifth -> tonic
    (6, 1),   // tritone -> minor second
    (9, 10),  // sixth -> minor seventh
    (8, 11),  // minor sixth -> major seventh
    (10, 9),  // minor seventh -> sixth
    (11, 8),  // major seventh -> minor sixth
];

fn mirrored_interval(interval: u8) -> Option<u8> {
    TRANSPOSITION_RULES
        .iter()
        .find(|(from, _)| *from == interval)
        .map(|(_, to)| *to)
}

/// Reflect a pitch class around `tonic`.
pub fn reflect(note: PitchClass, tonic: PitchClass) -> PitchClass {
    let interval = note.interval_from(tonic);
    match mirrored_interval(interval) {
        Some(mapped) => {
            let result = tonic.transpose(mapped as i32);
            trace!("{note} is {interval} above {tonic}, mirrored to {mapped}: {result}");
            result
        }
        // unreachable with the full table, kept as a no-op
        None => note,
    }
}

/// Transpose a note name into negative harmony around `tonic`.
///
/// Names that are not known notes are returned unchanged so that a partially
/// invalid note list still produces output. The tonic is not validated here;
/// callers are expected to hold a real [`PitchClass`] for it.
pub fn transpose(note: &str, tonic: PitchClass) -> String {
    match note_to_index(note) {
        Some(pc) => reflect(pc, tonic).name().to_string(),
        None => {
            debug!("passing through unknown note '{note}'");
            note.to_string()
        }
    }
}
