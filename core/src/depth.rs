use rand::Rng;

use crate::config::DepthParams;
use crate::gallery::ImageRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    pub y: f64,
    pub z: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DepthLayout {
    pub perspective: f64,
    pub threshold: f64,
    // Still inside the separation band when the retries ran out.
    pub unresolved: usize,
    pub retries: u32,
}

pub fn perspective_for_width(container_width: f64) -> f64 {
    if container_width.is_finite() && container_width > 0.0 {
        container_width / 2.0
    } else {
        0.0
    }
}

pub fn depth_threshold(perspective: f64, params: &DepthParams) -> f64 {
    perspective / params.threshold_divisor
}

pub fn place(y_seed: f64, z_seed: f64, threshold: f64) -> Placement {
    Placement {
        y: (y_seed * threshold).floor() - threshold / 2.0,
        z: depth_for_seed(z_seed, threshold),
    }
}

fn depth_for_seed(z_seed: f64, threshold: f64) -> f64 {
    (z_seed * threshold).floor()
}

fn too_close(perspective: f64, z: f64, previous_z: f64, threshold: f64, params: &DepthParams) -> bool {
    perspective > params.min_separated_perspective
        && (z - previous_z).abs() < threshold * params.separation_ratio
}

pub fn layout_images<R>(
    images: &mut [ImageRecord],
    container_width: f64,
    params: &DepthParams,
    rng: &mut R,
) -> DepthLayout
where
    R: Rng + ?Sized,
{
    let perspective = perspective_for_width(container_width);
    let threshold = depth_threshold(perspective, params);
    let mut layout = DepthLayout {
        perspective,
        threshold,
        unresolved: 0,
        retries: 0,
    };
    let mut previous_z = -1.0;
    for (index, image) in images.iter_mut().enumerate() {
        image.order = index;
        let y_seed = *image.y_seed.get_or_insert_with(|| rng.random::<f64>());
        let mut z_seed = *image.z_seed.get_or_insert_with(|| rng.random::<f64>());
        let mut z = depth_for_seed(z_seed, threshold);
        let mut attempts = 0;
        while too_close(perspective, z, previous_z, threshold, params) {
            if attempts >= params.max_retries {
                layout.unresolved += 1;
                break;
            }
            attempts += 1;
            z_seed = rng.random::<f64>();
            z = depth_for_seed(z_seed, threshold);
        }
        layout.retries += attempts;
        image.z_seed = Some(z_seed);
        image.placement = place(y_seed, z_seed, threshold);
        previous_z = z;
    }
    layout
}
