use std::time::{SystemTime, UNIX_EPOCH};

use image::Rgb;
use nalgebra::Point3;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// Words with no characters still produce a scene; they seed from this base.
pub const EMPTY_WORD_SEED: u64 = 42;

/// The sentinel word that generates marker entries instead of points.
pub const INFINITE_WORD: &str = "infinite";

pub const DEFAULT_LAYERS: u32 = 5;

/// Half-extent of the x/y sampling cube and depth of each layer's z band.
pub const SPACE_SIZE: f32 = 400.;

/// z offset between consecutive layer bands.
pub const LAYER_DEPTH: f32 = 50.;

const POINTS_PER_LAYER: i32 = 100;

pub const COLOR_PALETTE: [Rgb<u8>; 24] = [
    Rgb([230, 25, 75]),
    Rgb([60, 180, 75]),
    Rgb([255, 225, 25]),
    Rgb([0, 130, 200]),
    Rgb([245, 130, 48]),
    Rgb([145, 30, 180]),
    Rgb([70, 240, 240]),
    Rgb([240, 50, 230]),
    Rgb([255, 182, 193]),
    Rgb([138, 43, 226]),
    Rgb([255, 105, 180]),
    Rgb([199, 21, 133]),
    Rgb([123, 104, 238]),
    Rgb([216, 191, 216]),
    Rgb([255, 192, 203]),
    Rgb([147, 112, 219]),
    Rgb([0, 255, 127]),
    Rgb([255, 69, 0]),
    Rgb([173, 255, 47]),
    Rgb([255, 20, 147]),
    Rgb([75, 0, 130]),
    Rgb([0, 255, 255]),
    Rgb([255, 140, 0]),
    Rgb([255, 99, 71]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Triangle,
}

pub const SHAPE_KINDS: [ShapeKind; 3] =
    [ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Triangle];

/// A single generated scene entry.
///
/// `Primitive` is a point in world space with a base half-extent and display
/// color. `Marker` is a sentinel the renderer recognizes and skips; it is
/// reserved for special-case rendering per layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Primitive {
        kind: ShapeKind,
        position: Point3<f32>,
        size: f32,
        color: Rgb<u8>,
    },
    Marker {
        tag: String,
        layer: u32,
    },
}

/// An ordered list of shape descriptors.
///
/// Order is generation order (layer-major), which is also the draw order;
/// no depth sorting happens anywhere downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// Generates the scene for `word` with an explicit entropy value.
    ///
    /// The same `(word, layers, entropy)` triple always yields the same
    /// scene. The seed is the sum of the word's char codes plus `entropy`;
    /// an empty word contributes [`EMPTY_WORD_SEED`] instead.
    pub fn generate(word: &str, layers: u32, entropy: u64) -> Self {
        let base_seed: u64 = if word.is_empty() {
            EMPTY_WORD_SEED
        } else {
            word.chars().map(|c| c as u64).sum()
        };
        let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(entropy));

        let mut shapes = Vec::new();
        for layer in 0..layers {
            let base_color = COLOR_PALETTE[layer as usize % COLOR_PALETTE.len()];
            if word == INFINITE_WORD {
                shapes.push(Shape::Marker {
                    tag: INFINITE_WORD.to_string(),
                    layer,
                });
                continue;
            }

            let num_points = POINTS_PER_LAYER + rng.gen_range(-20..=20);
            let size_base = 20. + layer as f32 * 5.;
            let z_near = layer as f32 * LAYER_DEPTH;
            for _ in 0..num_points {
                let x = rng.gen_range(-SPACE_SIZE..SPACE_SIZE);
                let y = rng.gen_range(-SPACE_SIZE..SPACE_SIZE);
                let z = rng.gen_range(z_near..z_near + SPACE_SIZE);
                let size = size_base * rng.gen_range(0.5..1.5);
                let kind = *SHAPE_KINDS.choose(&mut rng).unwrap();
                let color = Rgb(base_color
                    .0
                    .map(|c| (c as i32 + rng.gen_range(-60..=60)).clamp(0, 255) as u8));
                shapes.push(Shape::Primitive {
                    kind,
                    position: Point3::new(x, y, z),
                    size,
                    color,
                });
            }
        }
        Scene { shapes }
    }

    /// Generates the scene for `word` with wall-clock entropy.
    ///
    /// Mixing the current time into the seed makes repeated renders of the
    /// same word look different on purpose; callers that need stable output
    /// (tests, batch renders) use [`Scene::generate`] with a fixed value.
    pub fn generate_now(word: &str, layers: u32) -> Self {
        Scene::generate(word, layers, time_entropy())
    }

    /// Builds a scene from pre-made descriptors (synthetic scenes, tests).
    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Scene { shapes }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of drawable entries (markers excluded).
    pub fn num_primitives(&self) -> usize {
        self.shapes
            .iter()
            .filter(|s| matches!(s, Shape::Primitive { .. }))
            .count()
    }
}

/// Milliseconds since the unix epoch, the default entropy source.
pub fn time_entropy() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_entropy_is_reproducible() {
        let a = Scene::generate("galaxy", 5, 1234);
        let b = Scene::generate("galaxy", 5, 1234);
        assert_eq!(a, b);

        let c = Scene::generate("galaxy", 5, 1235);
        assert_ne!(a, c);
    }

    #[test]
    fn equal_char_sums_seed_equally() {
        // seed derivation only sees the sum of char codes
        let a = Scene::generate("ab", 3, 7);
        let b = Scene::generate("ba", 3, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn infinite_word_generates_only_markers() {
        let scene = Scene::generate(INFINITE_WORD, 5, 99);
        assert_eq!(scene.len(), 5);
        assert_eq!(scene.num_primitives(), 0);
        for (i, shape) in scene.shapes().iter().enumerate() {
            match shape {
                Shape::Marker { tag, layer } => {
                    assert_eq!(tag, INFINITE_WORD);
                    assert_eq!(*layer, i as u32);
                }
                other => panic!("expected marker, got {:?}", other),
            }
        }
    }

    #[test]
    fn primitive_count_within_band() {
        let scene = Scene::generate("nebula", 5, 3);
        let n = scene.num_primitives();
        assert!(n >= 5 * 80 && n <= 5 * 120, "count {} out of range", n);
        assert_eq!(scene.len(), n);
    }

    #[test]
    fn primitives_respect_generation_bounds() {
        let layers = 5;
        let scene = Scene::generate("orbit", layers, 11);
        for shape in scene.shapes() {
            if let Shape::Primitive { position, size, .. } = shape {
                assert!(position.x >= -SPACE_SIZE && position.x < SPACE_SIZE);
                assert!(position.y >= -SPACE_SIZE && position.y < SPACE_SIZE);
                assert!(
                    position.z >= 0.
                        && position.z < (layers - 1) as f32 * LAYER_DEPTH + SPACE_SIZE
                );
                // size_base ranges from 20 (layer 0) to 40 (layer 4)
                assert!(*size >= 10. && *size < 60.);
            }
        }
    }

    #[test]
    fn palette_wraps_past_its_length() {
        let scene = Scene::generate("wrap", 30, 0);
        assert!(scene.num_primitives() >= 30 * 80);
    }

    #[test]
    fn empty_word_uses_fallback_seed() {
        let a = Scene::generate("", 2, 5);
        let b = Scene::generate("", 2, 5);
        assert_eq!(a, b);
        assert!(a.num_primitives() > 0);
    }
}
