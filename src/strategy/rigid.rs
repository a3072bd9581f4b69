use nalgebra_glm as glm;

use crate::config::AxisConvention;
use crate::phase::PhaseState;

const SCALE_STEP: f64 = 0.01;
const GROW_HEADROOM: f64 = 0.2;
const BOUND_RESET: f64 = 1.21;
const BOUND_FLOOR: f64 = -1.2;
const ROTATION_STEP_DEG: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleBranch {
    Grow,
    Shrink,
}

/// Result of one scale-and-rotate step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidPose {
    pub branch: ScaleBranch,
    /// Vertical scale; x and z stay at 1.
    pub scale_y: f64,
    pub angle_radians: f64,
}

/// Advances the ping-pong scale and the rotation phase by one frame.
pub fn scale_and_rotate(phase: &mut PhaseState) -> RigidPose {
    let (branch, scale_y) = if phase.scale_factor <= phase.scale_bound + GROW_HEADROOM {
        if phase.scale_bound < phase.scale_factor {
            phase.scale_bound = BOUND_RESET;
        }
        phase.scale_factor += SCALE_STEP;
        (ScaleBranch::Grow, phase.scale_factor)
    } else {
        if phase.scale_bound < BOUND_FLOOR {
            phase.scale_bound = BOUND_RESET;
        }
        phase.scale_bound -= SCALE_STEP;
        (ScaleBranch::Shrink, phase.scale_bound)
    };
    phase.rotation_phase += ROTATION_STEP_DEG;

    RigidPose {
        branch,
        scale_y,
        angle_radians: phase.rotation_phase.to_radians(),
    }
}

/// `scaling(1, scale_y, 1) * rotation(angle, axis)`.
pub fn model_matrix(pose: &RigidPose, axis: [f32; 3], convention: AxisConvention) -> glm::Mat4 {
    let scale = glm::scaling(&glm::vec3(1.0, pose.scale_y as f32, 1.0));
    scale * rotation(pose.angle_radians as f32, axis, convention)
}

/// Axis-angle rotation. A zero-length axis yields identity.
pub fn rotation(angle: f32, axis: [f32; 3], convention: AxisConvention) -> glm::Mat4 {
    let axis = glm::make_vec3(&axis);
    if glm::length(&axis) < f32::EPSILON {
        return glm::identity();
    }
    match convention {
        AxisConvention::Normalized => glm::rotation(angle, &axis),
        AxisConvention::Raw => raw_rotation(angle, &axis),
    }
}

/// Rodrigues' formula evaluated on the axis components as given.
#[rustfmt::skip]
fn raw_rotation(angle: f32, axis: &glm::Vec3) -> glm::Mat4 {
    let (x, y, z) = (axis.x, axis.y, axis.z);
    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;

    glm::mat4(
        x * x * t + c,     x * y * t - z * s, x * z * t + y * s, 0.0,
        y * x * t + z * s, y * y * t + c,     y * z * t - x * s, 0.0,
        z * x * t - y * s, z * y * t + x * s, z * z * t + c,     0.0,
        0.0,               0.0,               0.0,               1.0,
    )
}
