use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SlideshowConfig;
use crate::depth::{layout_images, DepthLayout};
use crate::drag::DragTracker;
use crate::gallery::{Direction, Gallery, Relocation};
use crate::momentum::Momentum;
use crate::projection::{image_style, VisualFlag};
use crate::surface::SlideshowSurface;

pub struct SlideshowController<S> {
    surface: S,
    gallery: Gallery,
    drag: DragTracker,
    momentum: Option<Momentum>,
    frame_pending: bool,
    perspective: f64,
    config: SlideshowConfig,
    rng: StdRng,
}

impl<S: SlideshowSurface> SlideshowController<S> {
    pub fn new(surface: S, config: SlideshowConfig, seed: u64) -> Self {
        let widths: Vec<f64> = (0..surface.image_count())
            .map(|index| surface.image_width(index))
            .collect();
        Self::with_gallery(surface, Gallery::new(widths), config, seed)
    }

    pub fn with_gallery(surface: S, gallery: Gallery, config: SlideshowConfig, seed: u64) -> Self {
        Self {
            surface,
            gallery,
            drag: DragTracker::new(),
            momentum: None,
            frame_pending: false,
            perspective: 0.0,
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn config(&self) -> &SlideshowConfig {
        &self.config
    }

    pub fn direction(&self) -> Direction {
        self.gallery.direction()
    }

    pub fn perspective(&self) -> f64 {
        self.perspective
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn momentum(&self) -> Option<&Momentum> {
        self.momentum.as_ref()
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    pub fn attach(&mut self) -> DepthLayout {
        self.surface.set_flag(VisualFlag::Visible, true);
        self.layout()
    }

    pub fn detach(&mut self) {
        self.drag.release();
        self.momentum = None;
        self.frame_pending = false;
        self.surface.set_flag(VisualFlag::Dragging, false);
        self.surface.set_flag(VisualFlag::Visible, false);
    }

    pub fn layout(&mut self) -> DepthLayout {
        self.measure();
        let layout = layout_images(
            self.gallery.images_mut(),
            self.surface.container_width(),
            &self.config.depth,
            &mut self.rng,
        );
        self.perspective = layout.perspective;
        self.surface.set_perspective(layout.perspective);
        self.project();
        self.surface.set_scroll_offset(self.config.initial_scroll_offset);
        layout
    }

    // Notifications coalesce until `run_frame`.
    pub fn request_frame(&mut self) -> bool {
        if self.gallery.is_empty() || self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    pub fn run_frame(&mut self) -> Option<Relocation> {
        self.frame_pending = false;
        if self.gallery.is_empty() {
            return None;
        }
        self.measure();
        let metrics = self.surface.scroll_metrics();
        let relocation = self.gallery.relocate(metrics)?;
        self.surface.set_scroll_offset(relocation.offset);
        self.project();
        Some(relocation)
    }

    pub fn drag_start(&mut self, x: f64) -> bool {
        if self.gallery.is_empty() {
            return false;
        }
        self.momentum = None;
        self.drag.start(x);
        self.surface.set_flag(VisualFlag::Dragging, true);
        true
    }

    pub fn drag_move(&mut self, x: f64) -> Option<f64> {
        let delta = self.drag.update(x)?;
        self.gallery.track_delta(delta);
        if delta != 0.0 {
            let offset = self.surface.scroll_metrics().offset + delta;
            self.surface.set_scroll_offset(offset);
        }
        Some(delta)
    }

    pub fn drag_end(&mut self) -> bool {
        if self.gallery.is_empty() {
            return false;
        }
        let released = self.drag.release();
        self.surface.set_flag(VisualFlag::Dragging, false);
        let Some(delta) = released else {
            return false;
        };
        self.momentum =
            Momentum::from_release(delta, self.gallery.direction(), &self.config.momentum);
        self.momentum.is_some()
    }

    pub fn momentum_tick(&mut self) -> bool {
        let Some(momentum) = self.momentum.as_mut() else {
            return false;
        };
        let step = momentum.step();
        let offset = self.surface.scroll_metrics().offset + step.delta;
        self.surface.set_scroll_offset(offset);
        if step.done {
            self.momentum = None;
        }
        !step.done
    }

    pub fn cancel_momentum(&mut self) -> bool {
        self.momentum.take().is_some()
    }

    fn measure(&mut self) {
        for index in 0..self.gallery.len() {
            let width = self.surface.image_width(index);
            self.gallery.set_width(index, width);
        }
    }

    fn project(&mut self) {
        for (index, image) in self.gallery.images().iter().enumerate() {
            self.surface.apply_image_style(index, &image_style(image));
        }
    }
}
