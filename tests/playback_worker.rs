use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use cellsong::playback::player::{PlaybackState, Player};
use cellsong::playback::sink::NoteSink;

/// Test sink that records everything it is asked to do.
#[derive(Clone, Default)]
struct CaptureSink {
    notes: Arc<Mutex<Vec<u8>>>,
    stops: Arc<AtomicUsize>,
}

impl NoteSink for CaptureSink {
    fn play_note(&mut self, pitch: u8) {
        self.notes.lock().unwrap().push(pitch);
    }

    fn stop_all_notes(&mut self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn plays_sequence_then_stops_exactly_once() {
    let sink = CaptureSink::default();
    let notes = sink.notes.clone();
    let stops = sink.stops.clone();

    let player = Player::play(vec![60, 62, 64], sink, Duration::ZERO);
    assert_eq!(player.wait(), PlaybackState::Completed);

    assert_eq!(*notes.lock().unwrap(), vec![60, 62, 64]);
    assert_eq!(stops.load(Ordering::SeqCst), 1);
}

#[test]
fn empty_sequence_still_stops_once() {
    let sink = CaptureSink::default();
    let notes = sink.notes.clone();
    let stops = sink.stops.clone();

    let player = Player::play(Vec::new(), sink, Duration::from_millis(50));
    assert_eq!(player.wait(), PlaybackState::Completed);

    assert!(notes.lock().unwrap().is_empty());
    assert_eq!(stops.load(Ordering::SeqCst), 1);
}

#[test]
fn cancel_interrupts_between_notes() {
    let sink = CaptureSink::default();
    let notes = sink.notes.clone();
    let stops = sink.stops.clone();

    let sequence = vec![60; 100];
    let mut player = Player::play(sequence, sink, Duration::from_millis(20));
    assert_eq!(player.state(), PlaybackState::Playing);
    assert!(!player.is_finished());

    player.cancel();
    assert_eq!(player.wait(), PlaybackState::Cancelled);

    let played = notes.lock().unwrap().len();
    assert!(played < 100, "cancellation should cut the sequence short");
    assert_eq!(stops.load(Ordering::SeqCst), 1, "stop still fires once");
}

#[test]
fn dropping_the_handle_cancels_and_joins() {
    let sink = CaptureSink::default();
    let notes = sink.notes.clone();
    let stops = sink.stops.clone();

    let player = Player::play(vec![60; 100], sink, Duration::from_millis(20));
    drop(player);

    // Drop joined the worker, so the sink has already seen its stop call.
    assert_eq!(stops.load(Ordering::SeqCst), 1);
    assert!(notes.lock().unwrap().len() < 100);
}
