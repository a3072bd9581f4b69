/// Animation accumulators carried from one frame to the next.
///
/// Each strategy advances only the fields it owns, so switching strategies
/// resumes the others exactly where they stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseState {
    /// Ping-pong scale while growing.
    pub scale_factor: f64,
    /// Ping-pong scale while shrinking, and the bound for growth.
    pub scale_bound: f64,
    /// Rotation angle in degrees.
    pub rotation_phase: f64,
    pub vertex_phase: f64,
    pub color_phase: f64,
}

impl PhaseState {
    pub const INITIAL: PhaseState = PhaseState {
        scale_factor: 0.0,
        scale_bound: 1.0,
        rotation_phase: 0.0,
        vertex_phase: 0.05,
        color_phase: 0.0,
    };

    pub fn reset(&mut self) {
        *self = Self::INITIAL;
    }
}

impl Default for PhaseState {
    fn default() -> Self {
        Self::INITIAL
    }
}
