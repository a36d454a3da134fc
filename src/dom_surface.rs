use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

use slideshow_core::{
    perspective_css, ImageStyle, ScrollMetrics, SlideshowConfig, SlideshowSurface, VisualFlag,
};

const SCROLL_LEFT: &str = "scrollLeft";

pub(crate) struct DomSurface {
    root: HtmlElement,
    images: Vec<HtmlElement>,
    visible_class: String,
    dragging_class: String,
}

impl DomSurface {
    pub(crate) fn new(root: HtmlElement, config: &SlideshowConfig) -> Self {
        let images = child_elements(&root);
        Self {
            root,
            images,
            visible_class: VisualFlag::Visible.class_name(config).to_string(),
            dragging_class: VisualFlag::Dragging.class_name(config).to_string(),
        }
    }

    // `Element::scroll_left` truncates to i32; HiDPI offsets are fractional.
    fn scroll_left(&self) -> f64 {
        Reflect::get(&self.root, &JsValue::from_str(SCROLL_LEFT))
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0)
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &HtmlElement {
        &self.root
    }

    #[cfg(test)]
    pub(crate) fn images(&self) -> &[HtmlElement] {
        &self.images
    }
}

pub(crate) fn child_elements(root: &Element) -> Vec<HtmlElement> {
    let children = root.children();
    (0..children.length())
        .filter_map(|index| children.item(index))
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .collect()
}

impl SlideshowSurface for DomSurface {
    fn image_count(&self) -> usize {
        self.images.len()
    }

    fn container_width(&self) -> f64 {
        self.root.get_bounding_client_rect().width()
    }

    // Layout width; the bounding rect would include the depth transform.
    fn image_width(&self, index: usize) -> f64 {
        self.images
            .get(index)
            .map(|image| image.offset_width() as f64)
            .unwrap_or(0.0)
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            offset: self.scroll_left(),
            scroll_width: self.root.scroll_width() as f64,
            viewport_width: self.root.client_width() as f64,
        }
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        let _ = Reflect::set(
            &self.root,
            &JsValue::from_str(SCROLL_LEFT),
            &JsValue::from_f64(offset),
        );
    }

    fn apply_image_style(&mut self, index: usize, style: &ImageStyle) {
        let Some(image) = self.images.get(index) else {
            return;
        };
        let css = image.style();
        let _ = css.set_property("order", &style.order.to_string());
        let _ = css.set_property("transform", &style.transform());
        let _ = css.set_property("z-index", &style.z_index.to_string());
    }

    fn set_perspective(&mut self, perspective: f64) {
        let _ = self
            .root
            .style()
            .set_property("perspective", &perspective_css(perspective));
    }

    fn set_flag(&mut self, flag: VisualFlag, enabled: bool) {
        let class = match flag {
            VisualFlag::Visible => &self.visible_class,
            VisualFlag::Dragging => &self.dragging_class,
        };
        let _ = self.root.class_list().toggle_with_force(class, enabled);
    }
}
