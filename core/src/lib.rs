pub mod config;
pub mod controller;
pub mod depth;
pub mod drag;
pub mod gallery;
pub mod momentum;
pub mod projection;
pub mod readiness;
pub mod surface;
pub mod task;

pub use config::{ConfigError, DepthParams, MomentumParams, SlideshowConfig};
pub use controller::SlideshowController;
pub use depth::{layout_images, perspective_for_width, DepthLayout, Placement};
pub use drag::{DragSession, DragTracker};
pub use gallery::{Direction, Gallery, ImageRecord, Relocation, ScrollMetrics};
pub use momentum::{Momentum, MomentumStep};
pub use projection::{image_style, perspective_css, ImageStyle, VisualFlag};
pub use readiness::{ReadinessGate, ReadyFuture};
pub use surface::{HeadlessSurface, SlideshowSurface};
pub use task::TaskSlot;
