use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent, TouchEvent};

use crate::dom_surface::DomSurface;
use crate::resize::ResizeService;
use slideshow_core::{DepthLayout, SlideshowConfig, SlideshowController, TaskSlot};

const ACTIVE_OPTIONS: EventListenerOptions = EventListenerOptions {
    phase: EventListenerPhase::Bubble,
    passive: false,
};

pub(crate) struct Slideshow {
    label: String,
    root: HtmlElement,
    controller: RefCell<SlideshowController<DomSurface>>,
    momentum_interval_ms: u32,
    frame: RefCell<Option<AnimationFrame>>,
    momentum: RefCell<TaskSlot<Interval>>,
    listeners: RefCell<Vec<EventListener>>,
    drag_listeners: RefCell<Vec<EventListener>>,
    resize: Option<Rc<ResizeService>>,
    resize_id: Cell<Option<u64>>,
}

impl Slideshow {
    pub(crate) fn attach(
        label: String,
        root: HtmlElement,
        config: SlideshowConfig,
        resize: Option<Rc<ResizeService>>,
        seed: u64,
    ) -> Rc<Self> {
        let surface = DomSurface::new(root.clone(), &config);
        let momentum_interval_ms = config.momentum.interval_ms;
        let controller = SlideshowController::new(surface, config, seed);
        let slideshow = Rc::new(Self {
            label,
            root,
            controller: RefCell::new(controller),
            momentum_interval_ms,
            frame: RefCell::new(None),
            momentum: RefCell::new(TaskSlot::new()),
            listeners: RefCell::new(Vec::new()),
            drag_listeners: RefCell::new(Vec::new()),
            resize,
            resize_id: Cell::new(None),
        });
        let layout = slideshow.controller.borrow_mut().attach();
        slideshow.report_layout(&layout);
        slideshow.install_listeners();
        slideshow.observe_resize();
        console::log!(
            "slideshow attached",
            slideshow.label.clone(),
            slideshow.controller.borrow().gallery().len()
        );
        slideshow
    }

    pub(crate) fn relayout(&self) {
        let layout = self.controller.borrow_mut().layout();
        self.report_layout(&layout);
    }

    fn report_layout(&self, layout: &DepthLayout) {
        if layout.unresolved > 0 {
            console::warn!(
                "slideshow depth collisions left unresolved",
                self.label.clone(),
                layout.unresolved
            );
        }
    }

    fn observe_resize(self: &Rc<Self>) {
        let Some(resize) = self.resize.as_ref() else {
            return;
        };
        let view: Weak<Self> = Rc::downgrade(self);
        let id = resize.observe(
            &self.root,
            Rc::new(move || {
                if let Some(view) = view.upgrade() {
                    view.relayout();
                }
            }),
        );
        self.resize_id.set(Some(id));
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();
        let root = self.root.clone();

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&root, "scroll", move |_event| {
            view.schedule_frame();
        }));

        let view = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &root,
            "mousedown",
            ACTIVE_OPTIONS,
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                event.prevent_default();
                if view.begin_drag(event.client_x() as f64) {
                    view.bind_mouse_drag();
                }
            },
        ));

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&root, "mouseleave", move |_event| {
            view.end_drag();
        }));

        let view = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &root,
            "touchstart",
            ACTIVE_OPTIONS,
            move |event: &Event| {
                let Some(x) = first_touch_x(event) else {
                    return;
                };
                event.prevent_default();
                view.begin_drag(x);
            },
        ));

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&root, "touchmove", move |event| {
            if let Some(x) = first_touch_x(event) {
                view.move_drag(x);
            }
        }));

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&root, "touchend", move |_event| {
            view.end_drag();
        }));

        *self.listeners.borrow_mut() = listeners;
    }

    // Mouse move/up only listen while a mouse drag is in progress.
    fn bind_mouse_drag(self: &Rc<Self>) {
        let root = self.root.clone();
        let view = Rc::clone(self);
        let move_listener = EventListener::new(&root, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                view.move_drag(event.client_x() as f64);
            }
        });
        let view = Rc::clone(self);
        let up_listener = EventListener::new(&root, "mouseup", move |_event| {
            view.end_drag();
        });
        *self.drag_listeners.borrow_mut() = vec![move_listener, up_listener];
    }

    fn schedule_frame(self: &Rc<Self>) {
        if !self.controller.borrow_mut().request_frame() {
            return;
        }
        let view = Rc::clone(self);
        let handle = request_animation_frame(move |_timestamp| {
            view.frame.borrow_mut().take();
            view.controller.borrow_mut().run_frame();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    pub(crate) fn begin_drag(&self, x: f64) -> bool {
        self.momentum.borrow_mut().cancel();
        self.controller.borrow_mut().drag_start(x)
    }

    pub(crate) fn move_drag(&self, x: f64) {
        self.controller.borrow_mut().drag_move(x);
    }

    pub(crate) fn end_drag(self: &Rc<Self>) {
        let started = self.controller.borrow_mut().drag_end();
        let drag_listeners = std::mem::take(&mut *self.drag_listeners.borrow_mut());
        drop(drag_listeners);
        if started {
            self.start_momentum();
        }
    }

    fn start_momentum(self: &Rc<Self>) {
        let view = Rc::clone(self);
        let interval_ms = self.momentum_interval_ms;
        self.momentum.borrow_mut().start(move || {
            Interval::new(interval_ms, move || {
                let running = view.controller.borrow_mut().momentum_tick();
                if !running {
                    view.momentum.borrow_mut().cancel();
                }
            })
        });
    }

    #[cfg(test)]
    pub(crate) fn momentum_running(&self) -> bool {
        self.momentum.borrow().is_running()
    }

    pub(crate) fn destroy(&self) {
        self.listeners.borrow_mut().clear();
        self.drag_listeners.borrow_mut().clear();
        self.momentum.borrow_mut().cancel();
        self.frame.borrow_mut().take();
        if let (Some(resize), Some(id)) = (self.resize.as_ref(), self.resize_id.take()) {
            resize.unobserve(id);
        }
        self.controller.borrow_mut().detach();
        console::log!("slideshow destroyed", self.label.clone());
    }
}

fn first_touch_x(event: &Event) -> Option<f64> {
    let event = event.dyn_ref::<TouchEvent>()?;
    let touch = event.touches().get(0)?;
    Some(touch.client_x() as f64)
}
