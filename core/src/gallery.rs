use crate::depth::Placement;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    #[default]
    Backward,
}

impl Direction {
    pub fn from_delta(delta: f64) -> Option<Self> {
        let step = delta.clamp(-1.0, 1.0);
        if step > 0.0 {
            Some(Direction::Forward)
        } else if step < 0.0 {
            Some(Direction::Backward)
        } else {
            None
        }
    }

    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub scroll_width: f64,
    pub viewport_width: f64,
}

impl ScrollMetrics {
    pub fn scrollable(&self) -> bool {
        self.scroll_width > self.viewport_width
    }

    pub fn midpoint(&self) -> f64 {
        self.scroll_width / 2.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImageRecord {
    pub order: usize,
    pub y_seed: Option<f64>,
    pub z_seed: Option<f64>,
    pub width: f64,
    pub placement: Placement,
}

impl ImageRecord {
    pub fn new(order: usize, width: f64) -> Self {
        Self {
            order,
            width,
            ..Self::default()
        }
    }

    pub fn with_seeds(mut self, y_seed: f64, z_seed: f64) -> Self {
        self.y_seed = Some(y_seed);
        self.z_seed = Some(z_seed);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Relocation {
    pub index: usize,
    pub direction: Direction,
    pub offset: f64,
}

#[derive(Clone, Debug, Default)]
pub struct Gallery {
    images: Vec<ImageRecord>,
    direction: Direction,
}

impl Gallery {
    pub fn new<I>(widths: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let images = widths
            .into_iter()
            .enumerate()
            .map(|(index, width)| ImageRecord::new(index, width))
            .collect();
        Self::from_records(images)
    }

    pub fn from_records(images: Vec<ImageRecord>) -> Self {
        Self {
            images,
            direction: Direction::default(),
        }
    }

    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn images_mut(&mut self) -> &mut [ImageRecord] {
        &mut self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn track_delta(&mut self, delta: f64) {
        if let Some(direction) = Direction::from_delta(delta) {
            self.direction = direction;
        }
    }

    pub fn set_width(&mut self, index: usize, width: f64) {
        if let Some(image) = self.images.get_mut(index) {
            image.width = width;
        }
    }

    pub fn orders(&self) -> Vec<usize> {
        self.images.iter().map(|image| image.order).collect()
    }

    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.images.len()];
        for image in &self.images {
            match seen.get_mut(image.order) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    // Ties keep the first.
    pub fn edge_index(&self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (index, image) in self.images.iter().enumerate() {
            let replace = match best {
                None => true,
                Some((_, order)) => match self.direction {
                    Direction::Forward => image.order < order,
                    Direction::Backward => image.order > order,
                },
            };
            if replace {
                best = Some((index, image.order));
            }
        }
        best.map(|(index, _)| index)
    }

    pub fn relocate(&mut self, metrics: ScrollMetrics) -> Option<Relocation> {
        if self.images.len() < 2 || !metrics.scrollable() {
            return None;
        }
        let index = self.edge_index()?;
        let width = self.images[index].width;
        let last = self.images.len() - 1;
        match self.direction {
            Direction::Forward if metrics.offset > metrics.midpoint() => {
                for (i, image) in self.images.iter_mut().enumerate() {
                    if i == index {
                        image.order = last;
                    } else {
                        image.order = image.order.saturating_sub(1);
                    }
                }
                Some(Relocation {
                    index,
                    direction: Direction::Forward,
                    offset: metrics.offset - width,
                })
            }
            Direction::Backward
                if metrics.offset + metrics.viewport_width < metrics.midpoint() =>
            {
                for (i, image) in self.images.iter_mut().enumerate() {
                    if i == index {
                        image.order = 0;
                    } else {
                        image.order += 1;
                    }
                }
                Some(Relocation {
                    index,
                    direction: Direction::Backward,
                    offset: metrics.offset + width,
                })
            }
            _ => None,
        }
    }
}
