use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlImageElement};

use slideshow_core::ReadinessGate;

pub(crate) struct ImageWait {
    gate: ReadinessGate,
    _listeners: Vec<EventListener>,
}

impl ImageWait {
    pub(crate) fn gate(&self) -> &ReadinessGate {
        &self.gate
    }

    pub(crate) async fn ready(self) {
        self.gate.wait().await;
    }
}

pub(crate) fn watch_images(children: &[HtmlElement], label: &str) -> ImageWait {
    let gate = ReadinessGate::new(children.len());
    let mut listeners = Vec::new();
    for (index, child) in children.iter().enumerate() {
        let Some(image) = child.dyn_ref::<HtmlImageElement>() else {
            gate.mark_ready(index);
            continue;
        };
        if image.complete() {
            gate.mark_ready(index);
            continue;
        }
        let gate_for_load = gate.clone();
        listeners.push(EventListener::once(image, "load", move |_event| {
            gate_for_load.mark_ready(index);
        }));
        let label = label.to_string();
        let src = image.src();
        listeners.push(EventListener::once(image, "error", move |_event| {
            console::warn!("slideshow image failed to load", label, src);
        }));
    }
    ImageWait {
        gate,
        _listeners: listeners,
    }
}
