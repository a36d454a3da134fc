use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slideshow_core::{
    Direction, Gallery, HeadlessSurface, ScrollMetrics, SlideshowConfig, SlideshowController,
};

fn build_controller(container_width: f64, widths: &[f64]) -> SlideshowController<HeadlessSurface> {
    let surface = HeadlessSurface::new(container_width, widths.to_vec());
    let mut controller = SlideshowController::new(surface, SlideshowConfig::default(), 7);
    controller.attach();
    controller
}

fn push_forward(controller: &mut SlideshowController<HeadlessSurface>) {
    controller.drag_start(200.0);
    controller.drag_move(199.0);
    controller.drag_end();
    controller.cancel_momentum();
}

#[test]
fn attach_sets_document_order_and_initial_offset() {
    let controller = build_controller(100.0, &[100.0, 100.0, 100.0]);
    assert_eq!(controller.gallery().orders(), vec![0, 1, 2]);
    assert_eq!(controller.surface().offset, 1.0);
    assert_eq!(controller.surface().orders(), vec![Some(0), Some(1), Some(2)]);
    assert_eq!(controller.surface().perspective, Some(50.0));
    assert!(controller.surface().visible);
    assert_eq!(controller.direction(), Direction::Backward);
}

#[test]
fn forward_midpoint_crossing_moves_first_image_to_the_end() {
    let mut controller = build_controller(100.0, &[100.0, 100.0, 100.0]);
    push_forward(&mut controller);
    assert_eq!(controller.direction(), Direction::Forward);

    controller.surface_mut().scroll_to(160.0);
    let relocation = controller.run_frame().expect("relocation");
    assert_eq!(relocation.index, 0);
    assert_eq!(relocation.direction, Direction::Forward);
    assert_eq!(controller.surface().offset, 60.0);
    assert_eq!(controller.gallery().orders(), vec![2, 0, 1]);
    assert_eq!(controller.surface().orders(), vec![Some(2), Some(0), Some(1)]);
}

#[test]
fn backward_crossing_moves_last_image_to_the_front() {
    let mut controller = build_controller(100.0, &[100.0, 120.0, 80.0]);
    assert_eq!(controller.direction(), Direction::Backward);

    let relocation = controller.run_frame().expect("relocation");
    assert_eq!(relocation.index, 2);
    assert_eq!(controller.surface().offset, 81.0);
    assert_eq!(controller.gallery().orders(), vec![1, 2, 0]);
}

#[test]
fn edge_ties_resolve_to_first_image() {
    let mut gallery = Gallery::new([50.0, 60.0, 70.0]);
    for image in gallery.images_mut() {
        image.order = 1;
    }
    gallery.set_direction(Direction::Forward);
    assert_eq!(gallery.edge_index(), Some(0));
    gallery.set_direction(Direction::Backward);
    assert_eq!(gallery.edge_index(), Some(0));
}

#[test]
fn single_image_gallery_never_relocates() {
    let mut controller = build_controller(100.0, &[400.0]);
    controller.surface_mut().scroll_to(250.0);
    assert!(controller.request_frame());
    assert_eq!(controller.run_frame(), None);
    push_forward(&mut controller);
    controller.surface_mut().scroll_to(290.0);
    assert_eq!(controller.run_frame(), None);
    assert_eq!(controller.gallery().orders(), vec![0]);
}

#[test]
fn non_scrollable_gallery_never_relocates() {
    let mut gallery = Gallery::new([50.0, 50.0, 50.0]);
    let metrics = ScrollMetrics {
        offset: 0.0,
        scroll_width: 150.0,
        viewport_width: 300.0,
    };
    assert_eq!(gallery.relocate(metrics), None);
    gallery.set_direction(Direction::Forward);
    let metrics = ScrollMetrics {
        offset: 200.0,
        ..metrics
    };
    assert_eq!(gallery.relocate(metrics), None);
    assert_eq!(gallery.orders(), vec![0, 1, 2]);
}

#[test]
fn empty_gallery_ignores_every_handler() {
    let surface = HeadlessSurface::new(300.0, Vec::new());
    let mut controller = SlideshowController::new(surface, SlideshowConfig::default(), 1);
    let layout = controller.attach();
    assert_eq!(layout.perspective, 150.0);
    assert!(!controller.request_frame());
    assert_eq!(controller.run_frame(), None);
    assert!(!controller.drag_start(10.0));
    assert_eq!(controller.drag_move(5.0), None);
    assert!(!controller.drag_end());
    assert!(!controller.momentum_tick());
    assert!(!controller.surface().dragging);
}

#[test]
fn orders_stay_put_without_midpoint_crossing() {
    let mut controller = build_controller(100.0, &[100.0, 100.0, 100.0, 100.0]);
    push_forward(&mut controller);
    for offset in [2.0, 40.0, 120.0, 199.0] {
        controller.surface_mut().scroll_to(offset);
        assert_eq!(controller.run_frame(), None);
        controller.layout();
        controller.surface_mut().scroll_to(offset);
        assert_eq!(controller.gallery().orders(), vec![0, 1, 2, 3]);
    }
}

#[test]
fn scroll_notifications_coalesce_until_frame_runs() {
    let mut controller = build_controller(100.0, &[100.0, 100.0, 100.0]);
    assert!(controller.request_frame());
    assert!(!controller.request_frame());
    assert!(!controller.request_frame());
    assert!(controller.frame_pending());
    controller.run_frame();
    assert!(!controller.frame_pending());
    assert!(controller.request_frame());
}

#[test]
fn orders_remain_a_permutation_under_random_interaction() {
    let widths = [90.0, 140.0, 60.0, 200.0, 110.0, 75.0];
    for seed in 0..20u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut controller = build_controller(220.0, &widths);
        let mut x = 500.0;
        for _ in 0..400 {
            match rng.random_range(0..6) {
                0 => {
                    controller.drag_start(x);
                }
                1 | 2 => {
                    x += rng.random_range(-60.0..60.0);
                    controller.drag_move(x);
                }
                3 => {
                    controller.drag_end();
                }
                4 => {
                    controller.momentum_tick();
                }
                _ => {
                    let max = controller.surface().max_offset();
                    controller.surface_mut().scroll_to(rng.random_range(0.0..=max));
                }
            }
            controller.request_frame();
            controller.run_frame();
            assert!(
                controller.gallery().is_permutation(),
                "seed {seed}: orders {:?}",
                controller.gallery().orders()
            );
        }
    }
}

#[test]
fn detach_clears_visual_flags_and_momentum() {
    let mut controller = build_controller(100.0, &[100.0, 100.0, 100.0]);
    controller.drag_start(200.0);
    controller.drag_move(180.0);
    controller.drag_end();
    assert!(controller.momentum().is_some());
    controller.detach();
    assert!(controller.momentum().is_none());
    assert!(!controller.surface().visible);
    assert!(!controller.surface().dragging);
}
