use sparkdeck::config::CounterConfig;
use sparkdeck::frame::CountingScheduler;
use sparkdeck::widgets::AnimatedCounter;
use sparkdeck::Easing;

fn config() -> CounterConfig {
    CounterConfig {
        duration_secs: 1.0,
        delay_secs: 0.0,
        easing: Easing::CubicOut,
        decimals: 0,
    }
}

#[test]
fn first_frame_starts_from_zero_and_ends_on_target() {
    let spy = CountingScheduler::new();
    let mut counter = AnimatedCounter::new(config());

    let frame = counter.pump(100.0, 0.0, false, &spy);
    assert_eq!(frame.display, 0.0, "elapsed=0 must display the start value");
    assert!(!frame.completed);

    let frame = counter.pump(100.0, 1.0, false, &spy);
    assert_eq!(frame.display, 100.0, "elapsed>=duration must display exactly the target");
    assert!(frame.completed);

    let frame = counter.pump(100.0, 2.0, false, &spy);
    assert_eq!(frame.display, 100.0);
    assert!(!frame.completed, "completion fires once, on the edge");
}

#[test]
fn schedules_frames_only_while_animating() {
    let spy = CountingScheduler::new();
    let mut counter = AnimatedCounter::new(config());

    counter.pump(100.0, 0.0, false, &spy);
    counter.pump(100.0, 0.5, false, &spy);
    assert_eq!(spy.count(), 2, "in-flight animation requests one frame per pump");

    counter.pump(100.0, 1.0, false, &spy);
    counter.pump(100.0, 1.5, false, &spy);
    assert_eq!(spy.count(), 2, "a finished animation must stop scheduling");
}

#[test]
fn same_target_retrigger_is_monotone_and_continuous() {
    let spy = CountingScheduler::new();
    let mut counter = AnimatedCounter::new(config());

    let mut prev = counter.pump(100.0, 0.0, false, &spy).display;
    for i in 1..=20 {
        let now = i as f64 * 0.05;
        let frame = counter.pump(100.0, now, false, &spy);
        assert!(!frame.retargeted, "same target must not restart the animation");
        assert!(
            frame.display >= prev,
            "sequence must be monotone non-decreasing across re-triggers"
        );
        prev = frame.display;
    }
    assert_eq!(prev, 100.0);
}

#[test]
fn retarget_chains_without_discontinuity() {
    let spy = CountingScheduler::new();
    let mut counter = AnimatedCounter::new(config());

    counter.pump(100.0, 0.0, false, &spy);
    let mid = counter.pump(100.0, 0.4, false, &spy).display;

    let frame = counter.pump(250.0, 0.4, false, &spy);
    assert!(frame.retargeted);
    assert_eq!(
        frame.display, mid,
        "retrigger must continue from the displayed value, not jump"
    );

    let frame = counter.pump(250.0, 1.4, false, &spy);
    assert_eq!(frame.display, 250.0);
    assert!(frame.completed);
}

#[test]
fn reduced_motion_skips_interpolation() {
    let spy = CountingScheduler::new();
    let mut counter = AnimatedCounter::new(config());

    let frame = counter.pump(100.0, 0.0, true, &spy);
    assert_eq!(frame.display, 100.0, "reduced motion emits the final value immediately");
    assert_eq!(spy.count(), 0, "reduced motion never schedules frames");

    let frame = counter.pump(42.0, 0.1, true, &spy);
    assert_eq!(frame.display, 42.0);
    assert_eq!(spy.count(), 0);
}

#[test]
fn teardown_stops_scheduling() {
    let spy = CountingScheduler::new();
    let mut counter = AnimatedCounter::new(config());

    counter.pump(100.0, 0.0, false, &spy);
    let before = spy.count();
    assert!(before > 0);

    counter.teardown();
    assert!(counter.is_torn_down());
    counter.pump(500.0, 0.1, false, &spy);
    counter.pump(500.0, 0.2, false, &spy);
    assert_eq!(
        spy.count(),
        before,
        "no frame callbacks may fire after teardown"
    );
}

#[test]
fn delay_is_respected() {
    let spy = CountingScheduler::new();
    let mut counter = AnimatedCounter::new(CounterConfig {
        delay_secs: 0.5,
        ..config()
    });

    counter.pump(10.0, 0.0, false, &spy);
    let frame = counter.pump(10.0, 0.25, false, &spy);
    assert_eq!(frame.display, 0.0, "nothing moves during the delay");
    let frame = counter.pump(10.0, 1.5, false, &spy);
    assert_eq!(frame.display, 10.0);
}
