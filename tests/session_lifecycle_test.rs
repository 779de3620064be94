//! Integration test: session lifecycle through START, PLAYING and GAMEOVER
//!
//! Covers the phase transitions, what each one shows the host, resetting
//! after a crash, and driving the session from a frame clock the way the
//! binary does.

mod support;

use flappy::render::Overlay;
use flappy::{FrameClock, FrameRequest, GameConfig, GamePhase, GameSession};
use std::time::{Duration, Instant};
use support::{autopilot_wants_flap, new_game, Recorder};

fn crash<R: rand::Rng>(session: &mut GameSession, ui: &mut Recorder, rng: &mut R) {
    while session.frame(rng, ui) == FrameRequest::Next {}
    assert_eq!(session.phase(), GamePhase::GameOver);
}

// =============================================================================
// Presentation
// =============================================================================

#[test]
fn test_present_shows_start_screen() {
    let (session, mut ui, _) = new_game(1);
    session.present(&mut ui);

    assert!(ui.overlay(Overlay::Start));
    assert!(!ui.overlay(Overlay::GameOver));
    assert_eq!(ui.scores, vec![0]);
    assert_eq!(ui.redraws, 1);
    assert!(!ui.scene.is_empty());
}

#[test]
fn test_frames_do_nothing_before_start() {
    let (mut session, mut ui, mut rng) = new_game(1);

    assert_eq!(session.frame(&mut rng, &mut ui), FrameRequest::Halt);
    assert_eq!(session.frames(), 0);
    assert_eq!(session.bird().y, session.bird().start_y);
    assert!(session.pipes().is_empty());
    assert_eq!(ui.redraws, 0);
}

// =============================================================================
// Full lifecycle
// =============================================================================

#[test]
fn test_start_crash_reset_replay() {
    let (mut session, mut ui, mut rng) = new_game(3);
    session.present(&mut ui);

    assert!(session.action(&mut ui));
    assert_eq!(session.phase(), GamePhase::Playing);
    assert!(!ui.overlay(Overlay::Start));
    assert!(session.bird().velocity < 0.0);

    crash(&mut session, &mut ui, &mut rng);
    assert!(ui.overlay(Overlay::GameOver));
    assert_eq!(ui.final_scores, vec![0]);

    // Input during GAMEOVER is ignored
    let frames = session.frames();
    assert!(!session.action(&mut ui));
    assert_eq!(session.frame(&mut rng, &mut ui), FrameRequest::Halt);
    assert_eq!(session.frames(), frames);

    session.reset_game(&mut ui);
    assert_eq!(session.phase(), GamePhase::Start);
    assert_eq!(session.score(), 0);
    assert_eq!(session.frames(), 0);
    assert!(session.pipes().is_empty());
    assert_eq!(session.bird().y, session.bird().start_y);
    assert_eq!(session.bird().velocity, 0.0);
    assert_eq!(session.ground().offset, 0.0);
    assert!(ui.overlay(Overlay::Start));
    assert!(!ui.overlay(Overlay::GameOver));
    assert_eq!(ui.scores.last(), Some(&0));

    // Second run behaves like the first: pipe spawned on its first frame
    assert!(session.action(&mut ui));
    assert_eq!(session.frame(&mut rng, &mut ui), FrameRequest::Next);
    assert_eq!(session.pipes().len(), 1);
    assert_eq!(session.frames(), 1);
}

#[test]
fn test_reset_after_scoring_clears_score() {
    let (mut session, mut ui, mut rng) = new_game(17);
    session.action(&mut ui);

    while session.score() < 2 {
        if autopilot_wants_flap(&session) {
            session.action(&mut ui);
        }
        assert_eq!(session.frame(&mut rng, &mut ui), FrameRequest::Next);
    }

    crash(&mut session, &mut ui, &mut rng);
    assert_eq!(ui.final_scores, vec![session.score()]);
    assert!(session.score() >= 2);

    session.reset_game(&mut ui);
    assert_eq!(session.score(), 0);
    assert_eq!(ui.scores.last(), Some(&0));
    assert!(session.pipes().is_empty());
}

#[test]
fn test_reset_ignored_mid_run() {
    let (mut session, mut ui, mut rng) = new_game(4);
    session.action(&mut ui);
    for _ in 0..10 {
        session.frame(&mut rng, &mut ui);
    }
    let y = session.bird().y;

    session.reset_game(&mut ui);

    assert_eq!(session.phase(), GamePhase::Playing);
    assert_eq!(session.frames(), 10);
    assert_eq!(session.bird().y, y);
    assert_eq!(session.pipes().len(), 1);
}

#[test]
fn test_reset_from_start_redraws_start_screen() {
    let (mut session, mut ui, _) = new_game(4);

    session.reset_game(&mut ui);

    assert_eq!(session.phase(), GamePhase::Start);
    assert!(ui.overlay(Overlay::Start));
    assert_eq!(ui.redraws, 1);
}

// =============================================================================
// Driving from the frame clock
// =============================================================================

/// Host loop in miniature: run every due frame, stop the clock on Halt.
fn pump<R: rand::Rng>(
    clock: &mut FrameClock,
    now: Instant,
    session: &mut GameSession,
    ui: &mut Recorder,
    rng: &mut R,
) -> u32 {
    let mut ran = 0;
    for _ in 0..clock.due_frames(now) {
        ran += 1;
        if session.frame(rng, ui) == FrameRequest::Halt {
            clock.stop();
            break;
        }
    }
    ran
}

#[test]
fn test_clock_runs_one_frame_per_interval() {
    let (mut session, mut ui, mut rng) = new_game(8);
    let mut clock = FrameClock::new(&GameConfig::default().timing);
    let t0 = Instant::now();

    session.action(&mut ui);
    clock.start(t0);

    let mut now = t0;
    for _ in 0..20 {
        assert_eq!(pump(&mut clock, now, &mut session, &mut ui, &mut rng), 1);
        now += clock.interval();
    }
    assert_eq!(session.frames(), 20);

    // Halfway to the next deadline nothing is due
    let half_way = now - clock.interval() / 2;
    assert_eq!(
        pump(&mut clock, half_way, &mut session, &mut ui, &mut rng),
        0
    );
}

#[test]
fn test_clock_stall_is_capped() {
    let (mut session, mut ui, mut rng) = new_game(8);
    let config = GameConfig::default();
    let mut clock = FrameClock::new(&config.timing);
    let t0 = Instant::now();

    session.action(&mut ui);
    clock.start(t0);

    let ran = pump(
        &mut clock,
        t0 + Duration::from_secs(1),
        &mut session,
        &mut ui,
        &mut rng,
    );

    assert_eq!(ran, config.timing.max_catch_up_frames);
    assert_eq!(session.frames(), ran as u64);
}

#[test]
fn test_clock_stops_on_game_over() {
    let (mut session, mut ui, mut rng) = new_game(8);
    let mut clock = FrameClock::new(&GameConfig::default().timing);
    let mut now = Instant::now();

    session.action(&mut ui);
    clock.start(now);

    let mut ticks = 0;
    while clock.is_running() {
        pump(&mut clock, now, &mut session, &mut ui, &mut rng);
        now += clock.interval();
        ticks += 1;
        assert!(ticks < 500);
    }

    assert_eq!(session.phase(), GamePhase::GameOver);
    assert_eq!(session.frames(), ticks);
    assert_eq!(clock.due_frames(now + Duration::from_secs(5)), 0);

    // A new run re-arms it
    session.reset_game(&mut ui);
    session.action(&mut ui);
    clock.start(now);
    assert_eq!(pump(&mut clock, now, &mut session, &mut ui, &mut rng), 1);
}
