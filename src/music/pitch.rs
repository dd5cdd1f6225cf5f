use super::MusicError;

/// Default column pitches: G3 through F5, one per reference column.
pub const DEFAULT_NOTES: [u8; 14] = [55, 57, 59, 60, 62, 64, 65, 67, 69, 71, 72, 74, 76, 77];

/// Ordered, read-only table of MIDI note numbers, one per column.
///
/// The mapping is total over any column index: columns beyond the table
/// length wrap via modulo and reuse pitches. The row index never participates;
/// every live cell in a column sounds the same pitch regardless of row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchTable {
    notes: Vec<u8>,
}

impl PitchTable {
    pub fn new(notes: Vec<u8>) -> Result<Self, MusicError> {
        if notes.is_empty() {
            return Err(MusicError::EmptyTable);
        }
        Ok(Self { notes })
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn notes(&self) -> &[u8] {
        &self.notes
    }

    /// Pitch for a column: `notes[col % len]`.
    pub fn pitch_for_column(&self, col: usize) -> u8 {
        self.notes[col % self.notes.len()]
    }

    /// Human-readable labels for the first `cols` columns.
    pub fn labels(&self, cols: usize) -> Vec<String> {
        (0..cols).map(|col| note_name(self.pitch_for_column(col))).collect()
    }
}

impl Default for PitchTable {
    fn default() -> Self {
        Self {
            notes: DEFAULT_NOTES.to_vec(),
        }
    }
}

/// Note name with octave for a MIDI number (60 -> "C4").
pub fn note_name(pitch: u8) -> String {
    const NAMES: [&str; 12] = [
        "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
    ];
    let octave = i32::from(pitch / 12) - 1;
    format!("{}{}", NAMES[usize::from(pitch % 12)], octave)
}
