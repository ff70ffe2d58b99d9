// Integration tests for the playback controller, driven by a manual clock

use sortty::algorithms::Algorithm;
use sortty::playback::{Controller, ManualClock, PlaybackState};
use std::time::Duration;

const INPUT: [i32; 6] = [6, 2, 9, 1, 5, 3];

fn controller(speed: u32) -> (Controller<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let mut ctl = Controller::with_clock(INPUT.to_vec(), clock.clone());
    ctl.set_speed(speed);
    (ctl, clock)
}

/// Advance the clock one interval at a time, polling after each
fn run_ticks(ctl: &mut Controller<ManualClock>, clock: &ManualClock, ticks: usize) -> usize {
    let mut advanced = 0;
    for _ in 0..ticks {
        clock.advance(ctl.interval());
        if ctl.poll() {
            advanced += 1;
        }
    }
    advanced
}

#[test]
fn test_start_installs_run_at_step_zero() {
    let (mut ctl, _) = controller(10);
    assert!(ctl.start(Algorithm::QuickSort, &INPUT));

    let expected = Algorithm::QuickSort.generate(&INPUT);
    assert_eq!(ctl.total_steps(), expected.len());
    assert_eq!(ctl.current_step(), 0);
    assert_eq!(ctl.state(), PlaybackState::Running);
    assert!(ctl.is_sorting());
    assert!(!ctl.is_paused());
    assert_eq!(ctl.displayed_state(), expected.first().unwrap());
}

#[test]
fn test_auto_advance_finishes_on_last_step() {
    let (mut ctl, clock) = controller(20);
    ctl.start(Algorithm::BubbleSort, &INPUT);
    let total = ctl.total_steps();

    assert_eq!(run_ticks(&mut ctl, &clock, total), total);

    assert_eq!(ctl.state(), PlaybackState::Finished);
    assert!(!ctl.is_sorting());
    assert_eq!(ctl.current_step(), total - 1);
    assert!(!ctl.has_pending_tick());

    let shown = ctl.displayed_state();
    assert_eq!(shown.array, vec![1, 2, 3, 5, 6, 9]);
    assert_eq!(shown.sorted.len(), INPUT.len());

    // Nothing left to deliver
    assert_eq!(run_ticks(&mut ctl, &clock, 5), 0);
}

#[test]
fn test_one_step_per_tick() {
    let (mut ctl, clock) = controller(4);
    ctl.start(Algorithm::HeapSort, &INPUT);

    // Short of the interval: nothing happens
    clock.advance(Duration::from_millis(249));
    assert!(!ctl.poll());
    assert_eq!(ctl.current_step(), 0);

    clock.advance(Duration::from_millis(1));
    assert!(ctl.poll());
    assert_eq!(ctl.current_step(), 1);

    // A late poll still only advances once
    clock.advance(Duration::from_secs(3));
    assert!(ctl.poll());
    assert!(!ctl.poll());
    assert_eq!(ctl.current_step(), 2);
}

#[test]
fn test_start_ignored_while_running() {
    let (mut ctl, clock) = controller(10);
    ctl.start(Algorithm::BubbleSort, &INPUT);
    run_ticks(&mut ctl, &clock, 3);

    assert!(!ctl.start(Algorithm::MergeSort, &[1, 2]));
    assert_eq!(ctl.algorithm(), Some(Algorithm::BubbleSort));
    assert_eq!(ctl.current_step(), 3);
}

#[test]
fn test_restart_from_paused_discards_run() {
    let (mut ctl, clock) = controller(10);
    ctl.start(Algorithm::BubbleSort, &INPUT);
    run_ticks(&mut ctl, &clock, 3);
    ctl.pause();

    assert!(ctl.start(Algorithm::MergeSort, &[2, 1]));
    assert_eq!(ctl.algorithm(), Some(Algorithm::MergeSort));
    assert_eq!(ctl.current_step(), 0);
    assert_eq!(ctl.total_steps(), Algorithm::MergeSort.generate(&[2, 1]).len());
    assert_eq!(ctl.input(), &[2, 1]);
}

#[test]
fn test_pause_then_step_to_boundary() {
    let (mut ctl, _) = controller(10);
    ctl.start(Algorithm::SelectionSort, &INPUT);
    assert!(ctl.pause());
    let total = ctl.total_steps();

    for _ in 0..total - 1 {
        assert!(ctl.step_forward());
    }
    assert_eq!(ctl.current_step(), total - 1);

    assert!(!ctl.step_forward());
    assert_eq!(ctl.current_step(), total - 1);
    assert_eq!(ctl.state(), PlaybackState::Paused);
}

#[test]
fn test_step_backward_never_below_zero() {
    let (mut ctl, _) = controller(10);
    ctl.start(Algorithm::MergeSort, &INPUT);
    ctl.pause();
    ctl.step_forward();
    ctl.step_forward();

    for _ in 0..10 {
        ctl.step_backward();
    }
    assert_eq!(ctl.current_step(), 0);
}

#[test]
fn test_paused_ignores_time_and_resume_continues() {
    let (mut ctl, clock) = controller(10);
    ctl.start(Algorithm::BubbleSort, &INPUT);
    run_ticks(&mut ctl, &clock, 2);
    ctl.pause();

    clock.advance(Duration::from_secs(10));
    assert!(!ctl.poll());
    assert_eq!(ctl.current_step(), 2);

    ctl.step_forward();
    assert!(ctl.resume());
    assert_eq!(run_ticks(&mut ctl, &clock, 1), 1);
    assert_eq!(ctl.current_step(), 4);
}

#[test]
fn test_manual_steps_only_while_paused() {
    let (mut ctl, _) = controller(10);
    ctl.start(Algorithm::BubbleSort, &INPUT);

    assert!(!ctl.step_forward());
    assert!(!ctl.step_backward());
    assert!(!ctl.resume());
    assert_eq!(ctl.current_step(), 0);
}

#[test]
fn test_reset_from_any_state() {
    let (mut ctl, clock) = controller(50);
    ctl.start(Algorithm::HeapSort, &INPUT);
    run_ticks(&mut ctl, &clock, 4);

    ctl.reset(vec![10, 20, 30]);
    assert_eq!(ctl.state(), PlaybackState::Idle);
    assert_eq!(ctl.total_steps(), 0);
    assert_eq!(ctl.current_step(), 0);
    assert!(!ctl.has_pending_tick());
    assert_eq!(ctl.displayed_state().array, vec![10, 20, 30]);
    assert!(ctl.displayed_state().sorted.is_empty());
    assert_eq!(ctl.algorithm(), None);

    // Reset after finishing as well
    ctl.start(Algorithm::BubbleSort, &[2, 1]);
    let total = ctl.total_steps();
    run_ticks(&mut ctl, &clock, total);
    assert!(ctl.is_finished());
    ctl.reset(vec![2, 1]);
    assert_eq!(ctl.state(), PlaybackState::Idle);
}

#[test]
fn test_speed_change_rearms_pending_tick() {
    let (mut ctl, clock) = controller(1);
    ctl.start(Algorithm::BubbleSort, &INPUT);

    clock.advance(Duration::from_millis(900));
    ctl.set_speed(100);
    assert_eq!(ctl.time_until_tick(), Some(Duration::from_millis(10)));

    clock.advance(Duration::from_millis(10));
    assert!(ctl.poll());
    assert_eq!(ctl.current_step(), 1);
    assert_eq!(ctl.time_until_tick(), Some(Duration::from_millis(10)));
}

#[test]
fn test_speed_change_while_paused_arms_nothing() {
    let (mut ctl, _) = controller(10);
    ctl.start(Algorithm::BubbleSort, &INPUT);
    ctl.pause();
    ctl.set_speed(200);
    assert!(!ctl.has_pending_tick());
    assert_eq!(ctl.interval(), Duration::from_millis(5));
}

#[test]
fn test_finished_run_can_be_started_again() {
    let (mut ctl, clock) = controller(100);
    ctl.start(Algorithm::QuickSort, &[2, 1]);
    let total = ctl.total_steps();
    run_ticks(&mut ctl, &clock, total);
    assert!(ctl.is_finished());

    // Cursor stays clamped; pause/step are ignored once finished
    assert!(!ctl.pause());
    assert!(!ctl.step_backward());
    assert_eq!(ctl.current_step(), total - 1);

    assert!(ctl.start(Algorithm::QuickSort, &[2, 1]));
    assert_eq!(ctl.current_step(), 0);
    assert_eq!(ctl.state(), PlaybackState::Running);
}
