use slideshow_core::config::MomentumParams;
use slideshow_core::{
    Direction, DragTracker, HeadlessSurface, Momentum, SlideshowConfig, SlideshowController,
};

fn build_controller() -> SlideshowController<HeadlessSurface> {
    let surface = HeadlessSurface::new(400.0, vec![300.0; 8]);
    let mut controller = SlideshowController::new(surface, SlideshowConfig::default(), 11);
    controller.attach();
    controller
}

fn run_to_stop(momentum: &mut Momentum) -> u32 {
    let mut ticks = 0;
    loop {
        ticks += 1;
        assert!(ticks < 10_000, "momentum did not stop");
        if momentum.step().done {
            return ticks;
        }
    }
}

#[test]
fn direction_follows_last_nonzero_delta() {
    let mut controller = build_controller();
    controller.drag_start(500.0);
    for x in [490.0, 470.0, 470.0, 440.0] {
        controller.drag_move(x);
    }
    assert_eq!(controller.direction(), Direction::Forward);

    for x in [450.0, 450.0, 480.0] {
        controller.drag_move(x);
    }
    assert_eq!(controller.direction(), Direction::Backward);

    controller.drag_move(480.0);
    assert_eq!(controller.direction(), Direction::Backward);
}

#[test]
fn drag_moves_track_pointer_one_to_one() {
    let mut controller = build_controller();
    controller.surface_mut().scroll_to(600.0);
    controller.drag_start(300.0);
    assert!(controller.surface().dragging);
    assert_eq!(controller.drag_move(260.0), Some(40.0));
    assert_eq!(controller.surface().offset, 640.0);
    assert_eq!(controller.drag_move(290.0), Some(-30.0));
    assert_eq!(controller.surface().offset, 610.0);
}

#[test]
fn moves_outside_a_drag_are_ignored() {
    let mut tracker = DragTracker::new();
    assert_eq!(tracker.update(10.0), None);
    assert_eq!(tracker.release(), None);
    tracker.start(100.0);
    assert_eq!(tracker.update(80.0), Some(20.0));
    assert_eq!(tracker.release(), Some(20.0));
    assert_eq!(tracker.release(), None);
    assert!(!tracker.session().active);
}

#[test]
fn release_reports_the_final_move_only() {
    let mut tracker = DragTracker::new();
    tracker.start(100.0);
    assert_eq!(tracker.update(80.0), Some(20.0));
    assert_eq!(tracker.update(80.0), Some(0.0));
    assert_eq!(tracker.release(), None);

    tracker.start(100.0);
    tracker.update(120.0);
    tracker.update(90.0);
    assert_eq!(tracker.release(), Some(30.0));
}

#[test]
fn release_after_fast_drag_clamps_and_decays() {
    let mut controller = build_controller();
    controller.drag_start(200.0);
    controller.drag_move(150.0);
    assert_eq!(controller.direction(), Direction::Forward);
    assert!(controller.drag_end());
    assert!(!controller.surface().dragging);
    assert_eq!(controller.momentum().map(|m| m.velocity()), Some(25.0));

    let mut previous = 25.0;
    let mut ticks = 0;
    while controller.momentum_tick() {
        ticks += 1;
        let velocity = controller.momentum().map(|m| m.velocity()).unwrap_or(0.0);
        assert!((previous - velocity - 0.2).abs() < 1e-9);
        previous = velocity;
    }
    ticks += 1;
    assert_eq!(ticks, 125);
    assert!(controller.momentum().is_none());
}

#[test]
fn release_without_movement_starts_nothing() {
    let mut controller = build_controller();
    controller.drag_start(200.0);
    controller.drag_move(200.0);
    assert!(!controller.drag_end());
    assert!(controller.momentum().is_none());
    assert!(!controller.drag_end());
}

#[test]
fn momentum_moves_offset_in_release_direction() {
    let mut controller = build_controller();
    controller.surface_mut().scroll_to(1000.0);
    controller.drag_start(100.0);
    controller.drag_move(110.0);
    assert_eq!(controller.direction(), Direction::Backward);
    assert!(controller.drag_end());
    let before = controller.surface().offset;
    controller.momentum_tick();
    assert_eq!(controller.surface().offset, before - 10.0);
    controller.momentum_tick();
    assert!((controller.surface().offset - (before - 10.0 - 9.8)).abs() < 1e-9);
}

#[test]
fn momentum_stops_within_bounded_ticks() {
    let params = MomentumParams::default();
    for velocity in [25.0, -25.0, 10.0, -10.0, 3.3, -0.5, 0.6, 0.1] {
        let direction = if velocity > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        let mut momentum =
            Momentum::from_release(velocity, direction, &params).expect("nonzero release");
        let bound = (f64::abs(velocity) / params.decay_per_tick).ceil() as u32;
        let ticks = run_to_stop(&mut momentum);
        assert!(ticks <= bound.max(1), "velocity {velocity}: {ticks} ticks > {bound}");
        assert!(momentum.step().done);
        assert_eq!(momentum.step().delta, 0.0);
    }
}

#[test]
fn zero_release_has_no_momentum() {
    let params = MomentumParams::default();
    assert!(Momentum::from_release(0.0, Direction::Forward, &params).is_none());
    assert!(Momentum::from_release(f64::NAN, Direction::Forward, &params).is_none());
}

#[test]
fn drag_start_cancels_running_momentum() {
    let mut controller = build_controller();
    controller.surface_mut().scroll_to(900.0);
    controller.drag_start(300.0);
    controller.drag_move(280.0);
    assert!(controller.drag_end());
    assert!(controller.momentum_tick());

    assert!(controller.drag_start(280.0));
    assert!(controller.momentum().is_none());
    let offset = controller.surface().offset;
    assert!(!controller.momentum_tick());
    assert_eq!(controller.surface().offset, offset);
}
