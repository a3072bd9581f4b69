use nalgebra_glm as glm;

use crate::error::RenderError;
use crate::geometry::{Position, Rgba};

/// Graphics backend driven by the [`Animator`](crate::animator::Animator).
///
/// Uploads replace the whole buffer; `draw` consumes whatever was last
/// uploaded and the last transform set.
pub trait Renderer {
    fn upload_positions(&mut self, positions: &[Position]) -> Result<(), RenderError>;
    fn upload_colors(&mut self, colors: &[Rgba]) -> Result<(), RenderError>;
    fn set_transform(&mut self, transform: &glm::Mat4) -> Result<(), RenderError>;
    fn draw(&mut self, triangle_count: usize) -> Result<(), RenderError>;
}
