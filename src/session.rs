use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info};

use crate::board::grid::Grid;
use crate::board::rule;
use crate::board::BoardError;
use crate::config::AppConfig;
use crate::music::pitch::PitchTable;
use crate::music::sequencer::{self, Traversal};
use crate::music::MusicError;
use crate::playback::player::{PlaybackState, Player};
use crate::playback::sink::NoteSink;

/// Errors raised while building a session from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    Board(BoardError),
    Music(MusicError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Board(err) => write!(f, "{err}"),
            SessionError::Music(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        SessionError::Board(err)
    }
}

impl From<MusicError> for SessionError {
    fn from(err: MusicError) -> Self {
        SessionError::Music(err)
    }
}

/// Owning layer around one grid: the editing gate, generation stepping, and
/// playback hand-off.
///
/// Sessions start paused, in editing mode. Edits,
/// randomization, clearing, and audition are only honored while paused; the
/// run-loop collaborator flips the gate and calls [`Session::advance`] on its
/// own cadence. Note sequences handed to playback are detached copies, so the
/// grid stays free to mutate while a worker plays.
pub struct Session {
    grid: Grid,
    pitches: PitchTable,
    paused: bool,
    generation: u64,
    note_gap: Duration,
    fill_density: f64,
    player: Option<Player>,
}

impl Session {
    pub fn from_config(config: &AppConfig) -> Result<Self, SessionError> {
        let grid = Grid::new(config.grid.rows, config.grid.cols)?;
        let pitches = PitchTable::new(config.pitches.notes.clone())?;
        Ok(Self {
            grid,
            pitches,
            paused: true,
            generation: 0,
            note_gap: config.playback.note_gap(),
            fill_density: config.playback.fill_density,
            player: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pitches(&self) -> &PitchTable {
        &self.pitches
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            info!(paused, "session gate");
        }
        self.paused = paused;
    }

    /// Flip one cell; honored only while paused.
    ///
    /// Returns whether the edit was applied. Coordinates are still
    /// range-checked while running, so a bad caller hears about it either way.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, BoardError> {
        if !self.paused {
            self.grid.is_alive(row, col)?;
            return Ok(false);
        }
        self.grid.toggle(row, col)?;
        Ok(true)
    }

    /// Advance one generation: compute the next buffer from the pre-step
    /// state, then replace the current buffer wholesale.
    pub fn advance(&mut self) {
        let next = rule::step(&self.grid);
        self.grid = next;
        self.generation += 1;
        debug!(
            generation = self.generation,
            live = self.grid.live_count(),
            "advanced"
        );
    }

    /// Bernoulli refill of the whole grid; honored only while paused.
    pub fn randomize(&mut self, seed: u64) -> bool {
        if !self.paused {
            return false;
        }
        let mut rng = SmallRng::seed_from_u64(seed);
        self.grid.randomize(&mut rng, self.fill_density);
        info!(seed, live = self.grid.live_count(), "randomized");
        true
    }

    /// Kill every cell; honored only while paused.
    pub fn clear(&mut self) -> bool {
        if !self.paused {
            return false;
        }
        self.grid.clear();
        info!("cleared");
        true
    }

    /// Pitch sequence for the current grid snapshot.
    pub fn collect(&self, traversal: Traversal) -> Vec<u8> {
        sequencer::collect(&self.grid, &self.pitches, traversal)
    }

    /// Audition the current grid through `sink`; honored only while paused.
    ///
    /// Starting a new audition replaces a previous one: the old worker is
    /// cancelled and joined before the new sequence begins.
    pub fn play<S>(&mut self, traversal: Traversal, sink: S) -> bool
    where
        S: NoteSink + 'static,
    {
        if !self.paused {
            return false;
        }
        // Dropping the previous handle cancels and joins its worker.
        drop(self.player.take());
        let sequence = self.collect(traversal);
        info!(notes = sequence.len(), ?traversal, "audition start");
        self.player = Some(Player::play(sequence, sink, self.note_gap));
        true
    }

    pub fn playback_state(&mut self) -> PlaybackState {
        match self.player.as_mut() {
            None => PlaybackState::Idle,
            Some(player) => player.state(),
        }
    }

    /// Request cancellation of an in-progress audition, if any.
    pub fn cancel_playback(&self) {
        if let Some(player) = &self.player {
            player.cancel();
        }
    }
}
