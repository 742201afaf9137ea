//! Full power-up cycles on a live board with forced rolls.

use flappy_board::core::{Board, CollisionPolicy, Phase, ScriptedDice};
use flappy_board::engine::Autopilot;
use flappy_board::types::{
    BoardEvent, PowerUp, BASE_GRAVITY, BASE_PIPE_SPEED, BOOST_PIPE_SPEED, SHIELD_TICKS,
};

fn step(board: &mut Board<ScriptedDice>, pilot: &Autopilot) -> Vec<BoardEvent> {
    if let Some(direction) = pilot.decide(board) {
        board.move_bird(direction);
    }
    board.tick();
    board.take_events().into_iter().collect()
}

#[test]
fn bird_boost_runs_shield_then_returns_to_normal() {
    // Roll 0 starts a bird boost; the next roll picks 200 + 40 ticks.
    let duration = 240;
    let mut board = Board::with_dice(ScriptedDice::new().with_rolls([0, 40]));
    let pilot = Autopilot::new();

    let events = step(&mut board, &pilot);
    assert!(events.contains(&BoardEvent::BirdChanged(PowerUp::BirdBoost)));
    assert_eq!(board.pipe_speed(), BOOST_PIPE_SPEED);
    assert_eq!(board.policy(), CollisionPolicy::Intangible);
    assert!(board.power_ups().is_disabled());

    let mut last_score = board.score();
    for tick in 2..=duration + SHIELD_TICKS + 1 {
        step(&mut board, &pilot);
        assert!(!board.game_over(), "died at tick {}", tick);
        assert!(board.score() >= last_score);
        last_score = board.score();

        if tick < duration {
            assert_eq!(board.pipe_speed(), BOOST_PIPE_SPEED);
            assert_eq!(board.power_ups().phase(), Phase::Boosted(PowerUp::BirdBoost));
        } else if tick == duration {
            assert_eq!(board.pipe_speed(), BASE_PIPE_SPEED);
            assert_eq!(board.policy(), CollisionPolicy::Intangible);
            assert_eq!(board.power_ups().phase(), Phase::Shielded);
            // One point per 60 boosted ticks, no pipe points at boost speed
            assert_eq!(board.score(), 4);
        } else if tick <= duration + SHIELD_TICKS {
            assert_eq!(board.power_ups().phase(), Phase::Shielded);
            assert!(board.power_ups().is_disabled());
        }
    }

    // Back to normal `duration + SHIELD_TICKS` ticks after activation
    assert_eq!(board.power_ups().phase(), Phase::Idle);
    assert_eq!(board.policy(), CollisionPolicy::Default);
    assert_eq!(board.bird().regime(), PowerUp::Normal);
    assert!(!board.power_ups().is_disabled());
}

#[test]
fn gravity_boost_swaps_gravity_and_policy() {
    // Roll 2499 starts a gravity boost of 100 ticks.
    let mut board = Board::with_dice(ScriptedDice::new().with_rolls([2499, 0]));
    let pilot = Autopilot::new();

    let events = step(&mut board, &pilot);
    assert!(events.contains(&BoardEvent::BirdChanged(PowerUp::GravityBoost)));
    assert_eq!(board.policy(), CollisionPolicy::UpperPipeIntangible);
    assert!((board.gravity() - 1.5).abs() < f64::EPSILON);
    assert_eq!(board.pipe_speed(), BASE_PIPE_SPEED);

    let mut regimes = Vec::new();
    for _ in 0..100 + SHIELD_TICKS {
        for e in step(&mut board, &pilot) {
            if let BoardEvent::BirdChanged(r) = e {
                regimes.push(r);
            }
        }
        assert!(!board.game_over());
    }
    assert_eq!(regimes, vec![PowerUp::BirdBoost, PowerUp::Normal]);
    assert_eq!(board.gravity(), BASE_GRAVITY);
    assert_eq!(board.policy(), CollisionPolicy::Default);
}

#[test]
fn no_second_boost_while_first_runs() {
    // Every queued roll would start a boost if it were consumed.
    let mut board = Board::with_dice(ScriptedDice::new().with_rolls([0, 0, 0, 0, 0]));
    let pilot = Autopilot::new();

    step(&mut board, &pilot);
    for _ in 0..150 {
        let events = step(&mut board, &pilot);
        assert!(!events
            .iter()
            .any(|e| matches!(e, BoardEvent::BirdChanged(_))));
    }
    assert_eq!(board.dice_mut().pending_rolls(), 3);
}
