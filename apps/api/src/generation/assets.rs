//! Placeholder image selection. The RNG is injected so selection is reproducible in tests.

use rand::seq::SliceRandom;
use rand::Rng;

pub const IMAGE_POOL: [&str; 3] = [
    "https://picsum.photos/1400/900?random=11",
    "https://picsum.photos/1400/900?random=12",
    "https://picsum.photos/1400/900?random=13",
];

/// Picks one image uniformly at random from `IMAGE_POOL`.
pub fn pick_image<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    IMAGE_POOL.choose(rng).copied().unwrap_or(IMAGE_POOL[0])
}
