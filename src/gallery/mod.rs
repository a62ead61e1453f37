mod artwork;
mod connections;
mod nodes;
mod physics;
mod shape;
mod stars;

use rand::Rng;

pub use artwork::{ARTWORKS, Artwork};
pub use connections::{ConnectionSegment, collect_connections};
pub use nodes::{GalleryNode, NodeSet};
pub use physics::{PointerState, advance};
pub use shape::{OUTLINE_SEGMENTS, organic_outline};
pub use stars::{StarField, StarPoint};

/// Uniform sample in `[0, 1)`.
fn unit<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(0.0..1.0)
}
