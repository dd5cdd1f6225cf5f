use tracing::info;

use crate::music::pitch::note_name;

/// Boundary to whatever actually produces sound.
///
/// The playback worker drives a sink one note at a time and calls
/// `stop_all_notes` exactly once after the sequence is exhausted or
/// cancelled. The engine has no opinion about the sound technology behind it.
pub trait NoteSink: Send {
    fn play_note(&mut self, pitch: u8);
    fn stop_all_notes(&mut self);
}

/// Sink that logs notes instead of sounding them.
#[derive(Debug, Default)]
pub struct TracingSink;

impl NoteSink for TracingSink {
    fn play_note(&mut self, pitch: u8) {
        info!(pitch, note = %note_name(pitch), "note on");
    }

    fn stop_all_notes(&mut self) {
        info!("all notes off");
    }
}
