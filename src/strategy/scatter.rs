use crate::geometry::{self, Group, Position, Rgba, POSITIONS, VERTEX_COUNT};
use crate::phase::PhaseState;

const COLOR_PHASE_STEP: f64 = 0.04;

/// Advances the color phase and returns jittered positions with pulsed colors.
pub fn scatter(phase: &mut PhaseState) -> ([Position; VERTEX_COUNT], [Rgba; VERTEX_COUNT]) {
    phase.color_phase += COLOR_PHASE_STEP;
    (
        scatter_positions(phase.color_phase),
        scatter_colors(phase.color_phase),
    )
}

/// Pushes each x and y away from the origin by `cos(phase + delta)`.
///
/// The push follows the sign of the template coordinate, so a negative
/// offset pulls it back through the origin.
pub fn scatter_positions(color_phase: f64) -> [Position; VERTEX_COUNT] {
    std::array::from_fn(|i| {
        let [x, y, z] = POSITIONS[i];
        let offset = (color_phase + geometry::scatter_delta(i)).cos() as f32;
        [x + x.signum() * offset, y + y.signum() * offset, z]
    })
}

/// Blue group pulses red by `sin`, red group pulses green by `cos`.
pub fn scatter_colors(color_phase: f64) -> [Rgba; VERTEX_COUNT] {
    let (sin, cos) = color_phase.sin_cos();
    std::array::from_fn(|i| {
        let group = geometry::group_of(i);
        let mut color = geometry::template_color(group);
        match group {
            Group::Blue => color[0] = (f64::from(color[0]) * sin) as f32,
            Group::Red => color[1] = (f64::from(color[1]) * cos) as f32,
        }
        color
    })
}
