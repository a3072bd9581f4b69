//! Per-frame deformations and the selector that picks one of them.

mod pulse;
mod rigid;
mod scatter;

pub use pulse::pulse;
pub use rigid::{model_matrix, rotation, scale_and_rotate, RigidPose, ScaleBranch};
pub use scatter::{scatter, scatter_colors, scatter_positions};

use crate::config::Routing;
use crate::toggles::Toggles;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Rewrite y of every vertex by a sine of the vertex phase.
    VertexRewrite,
    /// Keep the template, animate the model matrix.
    RigidTransform,
    /// Jitter positions and pulse one color channel per group.
    Combined,
}

/// Picks the strategy for a frame.
///
/// `startup_combined` is only honored under [`Routing::StartupCombined`];
/// under the default routing toggle B has no effect once the loop runs.
pub fn select_strategy(toggles: Toggles, routing: Routing, startup_combined: bool) -> Strategy {
    match (toggles.a, routing) {
        (false, _) => Strategy::VertexRewrite,
        (true, Routing::StartupCombined) if startup_combined => Strategy::Combined,
        (true, _) => Strategy::RigidTransform,
    }
}
