use crate::config::SlideshowConfig;
use crate::gallery::ImageRecord;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageStyle {
    pub order: usize,
    pub translate_y: f64,
    pub translate_z: f64,
    pub z_index: i64,
}

impl ImageStyle {
    pub fn transform(&self) -> String {
        format!(
            "translate3d(0, {}px, {}px)",
            fmt_px(self.translate_y),
            fmt_px(self.translate_z)
        )
    }
}

pub fn image_style(record: &ImageRecord) -> ImageStyle {
    ImageStyle {
        order: record.order,
        translate_y: record.placement.y,
        translate_z: record.placement.z,
        z_index: record.placement.z as i64,
    }
}

pub fn perspective_css(perspective: f64) -> String {
    format!("{}px", fmt_px(perspective))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisualFlag {
    Visible,
    Dragging,
}

impl VisualFlag {
    pub fn class_name<'a>(&self, config: &'a SlideshowConfig) -> &'a str {
        match self {
            VisualFlag::Visible => &config.visible_class,
            VisualFlag::Dragging => &config.dragging_class,
        }
    }
}

fn fmt_px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.3}")
    }
}
