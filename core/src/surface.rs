use crate::gallery::ScrollMetrics;
use crate::projection::{ImageStyle, VisualFlag};

pub trait SlideshowSurface {
    fn image_count(&self) -> usize;
    fn container_width(&self) -> f64;
    fn image_width(&self, index: usize) -> f64;
    fn scroll_metrics(&self) -> ScrollMetrics;
    fn set_scroll_offset(&mut self, offset: f64);
    fn apply_image_style(&mut self, index: usize, style: &ImageStyle);
    fn set_perspective(&mut self, perspective: f64);
    fn set_flag(&mut self, flag: VisualFlag, enabled: bool);
}

// Offsets clamp to 0..=scroll_width - viewport_width like a browser container.
#[derive(Clone, Debug, Default)]
pub struct HeadlessSurface {
    pub container_width: f64,
    pub image_widths: Vec<f64>,
    pub scroll_width: f64,
    pub offset: f64,
    pub styles: Vec<Option<ImageStyle>>,
    pub perspective: Option<f64>,
    pub visible: bool,
    pub dragging: bool,
    pub offset_writes: usize,
}

impl HeadlessSurface {
    pub fn new(container_width: f64, image_widths: Vec<f64>) -> Self {
        let scroll_width = image_widths.iter().sum::<f64>().max(container_width);
        let styles = vec![None; image_widths.len()];
        Self {
            container_width,
            image_widths,
            scroll_width,
            offset: 0.0,
            styles,
            perspective: None,
            visible: false,
            dragging: false,
            offset_writes: 0,
        }
    }

    pub fn with_scroll_width(mut self, scroll_width: f64) -> Self {
        self.scroll_width = scroll_width;
        self
    }

    pub fn max_offset(&self) -> f64 {
        (self.scroll_width - self.container_width).max(0.0)
    }

    pub fn scroll_to(&mut self, offset: f64) {
        self.offset = offset.clamp(0.0, self.max_offset());
    }

    pub fn orders(&self) -> Vec<Option<usize>> {
        self.styles
            .iter()
            .map(|style| style.map(|style| style.order))
            .collect()
    }
}

impl SlideshowSurface for HeadlessSurface {
    fn image_count(&self) -> usize {
        self.image_widths.len()
    }

    fn container_width(&self) -> f64 {
        self.container_width
    }

    fn image_width(&self, index: usize) -> f64 {
        self.image_widths.get(index).copied().unwrap_or(0.0)
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            offset: self.offset,
            scroll_width: self.scroll_width,
            viewport_width: self.container_width,
        }
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset_writes += 1;
        self.scroll_to(offset);
    }

    fn apply_image_style(&mut self, index: usize, style: &ImageStyle) {
        if let Some(slot) = self.styles.get_mut(index) {
            *slot = Some(*style);
        }
    }

    fn set_perspective(&mut self, perspective: f64) {
        self.perspective = Some(perspective);
    }

    fn set_flag(&mut self, flag: VisualFlag, enabled: bool) {
        match flag {
            VisualFlag::Visible => self.visible = enabled,
            VisualFlag::Dragging => self.dragging = enabled,
        }
    }
}
