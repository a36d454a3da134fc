use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use js_sys::Math;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlElement, PageTransitionEvent};

use crate::dom_surface::child_elements;
use crate::image_gate::watch_images;
use crate::page_config::{container_config, load_page_config};
use crate::resize::ResizeService;
use crate::slideshow::Slideshow;

thread_local! {
    static SLIDESHOWS: RefCell<Vec<Rc<Slideshow>>> = RefCell::new(Vec::new());
    static PAGEHIDE: RefCell<Option<EventListener>> = RefCell::new(None);
}

pub(crate) fn run() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let config = load_page_config(&document);
    let resize = match ResizeService::new() {
        Ok(service) => Some(Rc::new(service)),
        Err(err) => {
            console::warn!("slideshow resize observer unavailable", err);
            None
        }
    };

    let containers = match document.query_selector_all(&config.selector) {
        Ok(list) => list,
        Err(err) => {
            console::warn!("slideshow selector rejected", config.selector.clone(), err);
            return;
        }
    };
    if containers.length() == 0 {
        console::warn!("no slideshow containers found", config.selector.clone());
        return;
    }
    console::log!("slideshow boot", containers.length());

    for index in 0..containers.length() {
        let Some(root) = containers
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let config = container_config(&root, &config);
        let resize = resize.clone();
        let label = if root.id().is_empty() {
            format!("slideshow-{index}")
        } else {
            root.id()
        };
        spawn_local(async move {
            let children = child_elements(&root);
            let wait = watch_images(&children, &label);
            if !wait.gate().is_ready() {
                console::log!(
                    "slideshow waiting for images",
                    label.clone(),
                    wait.gate().remaining()
                );
            }
            wait.ready().await;
            let slideshow = Slideshow::attach(label, root, config, resize, random_seed());
            SLIDESHOWS.with(|slot| slot.borrow_mut().push(slideshow));
        });
    }

    let pagehide = EventListener::new(&window, "pagehide", on_pagehide);
    PAGEHIDE.with(|slot| *slot.borrow_mut() = Some(pagehide));
}

fn random_seed() -> u64 {
    (Math::random() * (1u64 << 53) as f64) as u64
}

// Persisted pages are restored from the back/forward cache without `main`
// running again.
fn on_pagehide(event: &Event) {
    let persisted = event
        .dyn_ref::<PageTransitionEvent>()
        .is_some_and(|event| event.persisted());
    if persisted {
        return;
    }
    shutdown();
}

pub(crate) fn shutdown() {
    let slideshows = SLIDESHOWS.with(|slot| std::mem::take(&mut *slot.borrow_mut()));
    for slideshow in slideshows {
        slideshow.destroy();
    }
}
