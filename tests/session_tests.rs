use std::collections::VecDeque;
use std::time::{Duration, Instant};

use anyhow::Result;
use tui_blocks::core::{Engine, Randomizer};
use tui_blocks::input::{InputEvent, InputSource};
use tui_blocks::types::{GameAction, ShapeKind};
use tui_blocks::{GameConfig, Session, StepOutcome, TopOutPolicy};

/// Replays a fixed list of events, one per poll.
struct ScriptedInput {
    events: VecDeque<Option<InputEvent>>,
}

impl ScriptedInput {
    fn new(events: impl IntoIterator<Item = Option<InputEvent>>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll_event(&mut self) -> Result<Option<InputEvent>> {
        Ok(self.events.pop_front().flatten())
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn session(seed: u64, t0: Instant) -> Session {
    Session::new(
        Engine::new(Randomizer::with_seed(seed)),
        GameConfig::default(),
        t0,
    )
}

#[test]
fn test_start_ticks_once_and_requests_frame() {
    let t0 = Instant::now();
    let mut s = session(1, t0);

    let outcome = s.start(t0);
    assert!(outcome.ticked);
    assert!(outcome.render);
    assert_eq!(outcome.lock, None);
    assert_eq!(s.engine().current_shape().position.y, 1);
    assert!(s.running());
}

#[test]
fn test_idle_step_before_frame_interval_does_nothing() {
    let t0 = Instant::now();
    let mut s = session(1, t0);
    s.start(t0);

    assert_eq!(s.step(None, t0 + ms(10)), StepOutcome::default());
    assert_eq!(s.engine().current_shape().position.y, 1);
}

#[test]
fn test_gravity_follows_tick_rate() {
    let t0 = Instant::now();
    let mut s = session(1, t0);
    s.start(t0);

    let frame = s.step(None, t0 + ms(500));
    assert!(frame.render);
    assert!(!frame.ticked);
    assert_eq!(s.engine().current_shape().position.y, 1);

    let tick = s.step(None, t0 + ms(1000));
    assert!(tick.render);
    assert!(tick.ticked);
    assert_eq!(s.engine().current_shape().position.y, 2);
}

#[test]
fn test_input_applies_immediately_without_frame() {
    let t0 = Instant::now();
    let mut s = session(1, t0);
    s.start(t0);
    let x = s.engine().current_shape().position.x;

    let outcome = s.step(Some(InputEvent::Action(GameAction::MoveLeft)), t0 + ms(1));
    assert!(!outcome.render);
    assert_eq!(s.engine().current_shape().position.x, x - 1);
}

#[test]
fn test_hard_drop_reports_lock() {
    let t0 = Instant::now();
    let mut s = session(1, t0);
    s.start(t0);
    let kind = s.engine().current_shape().kind();

    let outcome = s.step(Some(InputEvent::Action(GameAction::HardDrop)), t0 + ms(1));
    let lock = outcome.lock.expect("hard drop locks the piece");
    assert_eq!(lock.kind, kind);
    assert!(lock.spawned);
}

#[test]
fn test_hold_forces_redraw() {
    let t0 = Instant::now();
    let mut s = session(1, t0);
    s.start(t0);

    let outcome = s.step(Some(InputEvent::Action(GameAction::Hold)), t0 + ms(1));
    assert!(outcome.render);
    assert!(!outcome.ticked);
    assert!(s.engine().held_shape().is_valid());

    // The hint is consumed; the next iteration is gated again.
    assert!(!s.step(None, t0 + ms(2)).render);
}

#[test]
fn test_resize_forces_redraw() {
    let t0 = Instant::now();
    let mut s = session(1, t0);
    s.start(t0);

    assert!(s.step(Some(InputEvent::Resize), t0 + ms(1)).render);
}

#[test]
fn test_quit_stops_session() {
    let t0 = Instant::now();
    let mut s = session(1, t0);
    s.start(t0);

    s.step(Some(InputEvent::Quit), t0 + ms(1));
    assert!(!s.running());
}

fn tiny_session(policy: TopOutPolicy, t0: Instant) -> Session {
    // A 4x2 board tops out as soon as any non-I piece locks.
    let engine = Engine::with_size(4, 2, Randomizer::with_seed(8));
    let config = GameConfig {
        top_out: policy,
        ..GameConfig::default()
    };
    Session::new(engine, config, t0)
}

#[test]
fn test_end_session_policy_stops_on_board_full() {
    let t0 = Instant::now();
    let mut s = tiny_session(TopOutPolicy::EndSession, t0);
    s.start(t0);

    for _ in 0..20 {
        if !s.running() {
            break;
        }
        s.step(Some(InputEvent::Action(GameAction::HardDrop)), t0);
    }
    assert!(s.engine().is_board_full());
    assert!(!s.running());
}

#[test]
fn test_ignore_policy_keeps_running_on_board_full() {
    let t0 = Instant::now();
    let mut s = tiny_session(TopOutPolicy::Ignore, t0);
    s.start(t0);

    for _ in 0..20 {
        s.step(Some(InputEvent::Action(GameAction::HardDrop)), t0);
    }
    assert!(s.engine().is_board_full());
    assert!(s.running());
}

#[test]
fn test_scripted_loop_runs_until_quit() {
    let t0 = Instant::now();
    let mut s = session(3, t0);
    s.start(t0);

    let mut input = ScriptedInput::new([
        Some(InputEvent::Action(GameAction::MoveRight)),
        None,
        Some(InputEvent::Action(GameAction::RotateCw)),
        None,
        Some(InputEvent::Action(GameAction::HardDrop)),
        Some(InputEvent::Quit),
        Some(InputEvent::Action(GameAction::HardDrop)),
    ]);

    let mut now = t0;
    let mut locks = 0;
    let mut iterations = 0;
    while s.running() {
        now += ms(50);
        let outcome = s.step(input.poll_event().unwrap(), now);
        locks += usize::from(outcome.lock.is_some());
        iterations += 1;
    }

    assert_eq!(iterations, 6);
    assert_eq!(locks, 1);
    assert_eq!(
        s.engine().board().cells().iter().filter(|&&c| c != 0).count(),
        4
    );
    assert!(ShapeKind::ALL.contains(&s.engine().current_shape().kind().unwrap()));
}
