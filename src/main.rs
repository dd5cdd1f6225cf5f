// Entry point: headless demo that evolves a random grid and auditions it.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cellsong::cli::Args;
use cellsong::config::AppConfig;
use cellsong::music::sequencer::Traversal;
use cellsong::playback::player::PlaybackState;
use cellsong::playback::sink::TracingSink;
use cellsong::render;
use cellsong::session::Session;

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = AppConfig::load_or_default(&args.config);
    let mut session = match Session::from_config(&cfg) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Invalid config {}: {err}", args.config);
            std::process::exit(1);
        }
    };

    let stop_flag = Arc::new(AtomicBool::new(false));
    let stop_flag_for_ctrlc = stop_flag.clone();
    ctrlc::set_handler(move || {
        stop_flag_for_ctrlc.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    session.randomize(args.seed);
    println!("{}", render::render_with_labels(session.grid(), session.pitches()));

    // Evolve on the animation cadence.
    session.set_paused(false);
    let period = cfg.playback.generation_period();
    let mut next_deadline = Instant::now();
    for _ in 0..args.generations {
        if stop_flag.load(Ordering::SeqCst) {
            break;
        }
        next_deadline += period;
        session.advance();
        if args.show_steps {
            println!("generation {}", session.generation());
            println!("{}", render::render_grid(session.grid()));
        }
        let now = Instant::now();
        if now < next_deadline {
            thread::sleep(next_deadline - now);
        } else {
            next_deadline = now;
        }
    }
    session.set_paused(true);

    println!("generation {}", session.generation());
    println!("{}", render::render_with_labels(session.grid(), session.pitches()));

    if args.no_play || stop_flag.load(Ordering::SeqCst) {
        return;
    }

    let traversal = if args.column_order {
        Traversal::ColumnMajor
    } else {
        Traversal::RowMajor
    };
    session.play(traversal, TracingSink);

    loop {
        match session.playback_state() {
            PlaybackState::Playing => {
                if stop_flag.load(Ordering::SeqCst) {
                    session.cancel_playback();
                }
                thread::sleep(Duration::from_millis(10));
            }
            terminal => {
                info!(?terminal, "audition over");
                break;
            }
        }
    }
}
