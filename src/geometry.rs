//! Base shape: two nested I-beams built from 12 triangles.
//!
//! The outer (blue) beam occupies the first 18 vertices and the inner (red)
//! beam the last 18. Every strategy starts from these arrays.

/// Vertex position in normalized device coordinates.
pub type Position = [f32; 3];

/// Linear RGBA color, components in `[0, 1]`.
pub type Rgba = [f32; 4];

pub const VERTEX_COUNT: usize = 36;
pub const TRIANGLE_COUNT: usize = VERTEX_COUNT / 3;

/// Vertices per color group.
pub const GROUP_LEN: usize = 18;

pub const BLUE: Rgba = [0.07451, 0.16078, 0.29412, 1.0];
pub const RED: Rgba = [0.90980, 0.29020, 0.15294, 1.0];

#[rustfmt::skip]
pub const POSITIONS: [Position; VERTEX_COUNT] = [
    // blue: top bar
    [-0.6,  0.35, 0.0], [ 0.6,  0.35, 0.0], [-0.6,  0.85, 0.0],
    [-0.6,  0.85, 0.0], [ 0.6,  0.35, 0.0], [ 0.6,  0.85, 0.0],
    // blue: column
    [-0.3,  0.35, 0.0], [-0.3, -0.35, 0.0], [ 0.3, -0.35, 0.0],
    [-0.3,  0.35, 0.0], [ 0.3, -0.35, 0.0], [ 0.3,  0.35, 0.0],
    // blue: bottom bar
    [-0.6, -0.35, 0.0], [-0.6, -0.85, 0.0], [ 0.6, -0.85, 0.0],
    [-0.6, -0.35, 0.0], [ 0.6, -0.85, 0.0], [ 0.6, -0.35, 0.0],
    // red: top bar
    [-0.55,  0.4, 0.0], [ 0.55,  0.4, 0.0], [-0.55,  0.8, 0.0],
    [-0.55,  0.8, 0.0], [ 0.55,  0.4, 0.0], [ 0.55,  0.8, 0.0],
    // red: column
    [-0.25,  0.4, 0.0], [-0.25, -0.4, 0.0], [ 0.25, -0.4, 0.0],
    [-0.25,  0.4, 0.0], [ 0.25, -0.4, 0.0], [ 0.25,  0.4, 0.0],
    // red: bottom bar
    [-0.55, -0.4, 0.0], [-0.55, -0.8, 0.0], [ 0.55, -0.8, 0.0],
    [-0.55, -0.4, 0.0], [ 0.55, -0.8, 0.0], [ 0.55, -0.4, 0.0],
];

/// Phase offsets applied by the scatter strategy, indexed by corner slot.
const SCATTER_DELTAS: [f64; 3] = [0.2, 0.1, 0.3];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Blue,
    Red,
}

pub fn group_of(index: usize) -> Group {
    if index < GROUP_LEN {
        Group::Blue
    } else {
        Group::Red
    }
}

pub fn template_color(group: Group) -> Rgba {
    match group {
        Group::Blue => BLUE,
        Group::Red => RED,
    }
}

/// Color template parallel to [`POSITIONS`].
pub fn colors() -> [Rgba; VERTEX_COUNT] {
    std::array::from_fn(|i| template_color(group_of(i)))
}

/// Per-corner phase offset for vertex `index`, cycling with its slot in the triangle.
pub fn scatter_delta(index: usize) -> f64 {
    SCATTER_DELTAS[index % 3]
}
