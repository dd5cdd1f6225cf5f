use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, bounded};
use tracing::debug;

use super::sink::NoteSink;

/// Where a playback worker is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
    Completed,
    Cancelled,
}

/// Handle to a background playback worker.
///
/// The worker iterates a detached pitch sequence on its own named thread,
/// waiting `note_gap` between notes, so the thread that owns the grid is
/// never blocked by an in-progress audition. Cancellation is cooperative: a
/// shared flag is checked between notes. The worker is joined when the handle
/// drops, so it cannot outlive the owning session.
pub struct Player {
    cancel: Arc<AtomicBool>,
    done_rx: Receiver<PlaybackState>,
    state: PlaybackState,
    handle: Option<thread::JoinHandle<()>>,
}

impl Player {
    /// Spawn a worker that plays `sequence` into `sink`.
    ///
    /// `stop_all_notes` is invoked exactly once per playback, after the last
    /// note or after cancellation takes effect, even for an empty sequence.
    pub fn play<S>(sequence: Vec<u8>, mut sink: S, note_gap: Duration) -> Self
    where
        S: NoteSink + 'static,
    {
        let cancel = Arc::new(AtomicBool::new(false));
        let cancel_worker = cancel.clone();
        let (done_tx, done_rx) = bounded::<PlaybackState>(1);

        let handle = thread::Builder::new()
            .name("playback".into())
            .spawn(move || {
                let mut cancelled = false;
                for &pitch in &sequence {
                    if cancel_worker.load(Ordering::SeqCst) {
                        cancelled = true;
                        break;
                    }
                    sink.play_note(pitch);
                    thread::sleep(note_gap);
                }
                sink.stop_all_notes();
                let terminal = if cancelled {
                    PlaybackState::Cancelled
                } else {
                    PlaybackState::Completed
                };
                debug!(?terminal, notes = sequence.len(), "playback worker done");
                let _ = done_tx.send(terminal);
            })
            .expect("spawn playback worker");

        Self {
            cancel,
            done_rx,
            state: PlaybackState::Playing,
            handle: Some(handle),
        }
    }

    /// Ask the worker to stop before the next note.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::SeqCst);
    }

    /// Latest observed state; never blocks.
    pub fn state(&mut self) -> PlaybackState {
        while let Ok(terminal) = self.done_rx.try_recv() {
            self.state = terminal;
        }
        self.state
    }

    pub fn is_finished(&mut self) -> bool {
        matches!(
            self.state(),
            PlaybackState::Completed | PlaybackState::Cancelled
        )
    }

    /// Block until the worker reports its terminal state.
    pub fn wait(mut self) -> PlaybackState {
        if let Ok(terminal) = self.done_rx.recv() {
            self.state = terminal;
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        self.state
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
