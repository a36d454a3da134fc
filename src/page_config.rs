use gloo::console;
use web_sys::{Document, Element};

use slideshow_core::SlideshowConfig;

pub(crate) const CONFIG_ELEMENT_ID: &str = "slideshow-config";
pub(crate) const CONFIG_ATTRIBUTE: &str = "data-slideshow-config";

pub(crate) fn load_page_config(document: &Document) -> SlideshowConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return SlideshowConfig::default();
    };
    let Some(text) = element.text_content() else {
        return SlideshowConfig::default();
    };
    if text.trim().is_empty() {
        return SlideshowConfig::default();
    }
    match SlideshowConfig::from_json(&text) {
        Ok(config) => config,
        Err(err) => {
            console::warn!("slideshow config ignored", err.to_string());
            SlideshowConfig::default()
        }
    }
}

pub(crate) fn container_config(container: &Element, base: &SlideshowConfig) -> SlideshowConfig {
    let Some(overrides) = container.get_attribute(CONFIG_ATTRIBUTE) else {
        return base.clone();
    };
    match base.with_overrides(&overrides) {
        Ok(config) => config,
        Err(err) => {
            console::warn!("slideshow overrides ignored", err.to_string());
            base.clone()
        }
    }
}
