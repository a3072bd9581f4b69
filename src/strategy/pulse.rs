use crate::geometry::{Position, POSITIONS, VERTEX_COUNT};
use crate::phase::PhaseState;

const VERTEX_PHASE_STEP: f64 = 0.09;

/// Squashes the template vertically by `sin(vertex_phase)`.
pub fn pulse(phase: &mut PhaseState) -> [Position; VERTEX_COUNT] {
    phase.vertex_phase += VERTEX_PHASE_STEP;
    let amplitude = phase.vertex_phase.sin();
    POSITIONS.map(|[x, y, z]| [x, (f64::from(y) * amplitude) as f32, z])
}
