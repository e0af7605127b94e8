use careerpaths::{AdaptiveEngine, Adjustment, PerformanceWindow};

/// Drives the engine through the documented promotion/demotion scenarios
/// using only the public API.

fn play(engine: &mut AdaptiveEngine, answers: &[bool]) -> Vec<Adjustment> {
    answers.iter().map(|&a| engine.record_answer(a)).collect()
}

#[test]
fn four_right_one_wrong_is_not_enough() {
    let mut engine = AdaptiveEngine::new();
    play(&mut engine, &[true, true, true, true, false]);
    assert_eq!(engine.level(), 0);
    assert_eq!(
        engine.window(),
        PerformanceWindow {
            correct: 4,
            incorrect: 1
        }
    );
}

#[test]
fn five_right_promotes() {
    let mut engine = AdaptiveEngine::new();
    play(&mut engine, &[true; 5]);
    assert_eq!(engine.level(), 1);
    assert_eq!(engine.window(), PerformanceWindow::default());
}

#[test]
fn mostly_wrong_demotes_by_one() {
    let mut engine = AdaptiveEngine::new().with_level(2);
    play(&mut engine, &[true, false, false, false, false]);
    assert_eq!(engine.level(), 1);
    assert_eq!(engine.window(), PerformanceWindow::default());
}

#[test]
fn all_wrong_at_floor_keeps_window() {
    let mut engine = AdaptiveEngine::new();
    play(&mut engine, &[false; 5]);
    assert_eq!(engine.level(), 0);
    assert_eq!(
        engine.window(),
        PerformanceWindow {
            correct: 0,
            incorrect: 5
        }
    );
}

#[test]
fn four_wrong_is_below_sample_size() {
    let mut engine = AdaptiveEngine::new();
    let adjustments = play(&mut engine, &[false; 4]);
    assert!(adjustments.iter().all(|a| !a.changed_level()));
    assert_eq!(engine.level(), 0);
    assert_eq!(engine.window().total(), 4);
}

#[test]
fn long_run_keeps_invariants() {
    let mut engine = AdaptiveEngine::new();
    // deterministic pseudo-random stream
    let mut state: u32 = 12345;
    for _ in 0..2_000 {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let correct = (state >> 16) % 3 != 0;

        let before = engine.level();
        let total_before = engine.window().total();
        let adjustment = engine.record_answer(correct);

        match adjustment {
            Adjustment::Promoted { from, to } => {
                assert_eq!((from, to), (before, before + 1));
                assert_eq!(engine.window().total(), 0);
            }
            Adjustment::Demoted { from, to } => {
                assert!(before > 0);
                assert_eq!((from, to), (before, before - 1));
                assert_eq!(engine.window().total(), 0);
            }
            Adjustment::Unchanged => {
                assert_eq!(engine.level(), before);
                assert_eq!(engine.window().total(), total_before + 1);
            }
        }
    }
}
