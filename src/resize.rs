use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, ResizeObserver, ResizeObserverEntry};

struct ResizeEntry {
    id: u64,
    target: Element,
    hook: Rc<dyn Fn()>,
}

#[derive(Default)]
struct ResizeRegistry {
    next_id: u64,
    entries: Vec<ResizeEntry>,
}

impl ResizeRegistry {
    fn hooks_for(&self, target: &Element) -> Vec<Rc<dyn Fn()>> {
        self.entries
            .iter()
            .filter(|entry| entry.target == *target)
            .map(|entry| entry.hook.clone())
            .collect()
    }
}

pub(crate) struct ResizeService {
    observer: ResizeObserver,
    registry: Rc<RefCell<ResizeRegistry>>,
    _callback: Closure<dyn FnMut(Array)>,
}

impl ResizeService {
    pub(crate) fn new() -> Result<Self, JsValue> {
        let registry = Rc::new(RefCell::new(ResizeRegistry::default()));
        let registry_for_cb = registry.clone();
        let callback = Closure::<dyn FnMut(Array)>::wrap(Box::new(move |entries: Array| {
            let hooks: Vec<Rc<dyn Fn()>> = {
                let registry = registry_for_cb.borrow();
                entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<ResizeObserverEntry>().ok())
                    .flat_map(|entry| registry.hooks_for(&entry.target()))
                    .collect()
            };
            for hook in hooks {
                hook();
            }
        }));
        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())?;
        Ok(Self {
            observer,
            registry,
            _callback: callback,
        })
    }

    pub(crate) fn observe(&self, target: &Element, hook: Rc<dyn Fn()>) -> u64 {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id = registry.next_id.saturating_add(1);
            registry.entries.push(ResizeEntry {
                id,
                target: target.clone(),
                hook,
            });
            id
        };
        self.observer.observe(target);
        id
    }

    // Disconnects once nothing is left to watch.
    pub(crate) fn unobserve(&self, id: u64) {
        let mut registry = self.registry.borrow_mut();
        let Some(position) = registry.entries.iter().position(|entry| entry.id == id) else {
            return;
        };
        let entry = registry.entries.remove(position);
        let still_watched = registry
            .entries
            .iter()
            .any(|other| other.target == entry.target);
        if !still_watched {
            self.observer.unobserve(&entry.target);
        }
        if registry.entries.is_empty() {
            self.observer.disconnect();
        }
    }

    #[cfg(test)]
    pub(crate) fn observed(&self) -> usize {
        self.registry.borrow().entries.len()
    }
}

impl Drop for ResizeService {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
