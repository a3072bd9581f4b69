#![allow(dead_code)]

use nalgebra_glm as glm;
use pulse_wasm::geometry::{Position, Rgba};
use pulse_wasm::{RenderError, Renderer};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Positions(Vec<Position>),
    Colors(Vec<Rgba>),
    Transform(glm::Mat4),
    Draw(usize),
}

/// Headless renderer that records every call.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
    /// Fail the draw once this many draws have succeeded.
    pub fail_after_draws: Option<usize>,
    pub fail_position_uploads: bool,
    pub fail_color_uploads: bool,
}

impl Recorder {
    pub fn failing_after(draws: usize) -> Self {
        Self {
            fail_after_draws: Some(draws),
            ..Self::default()
        }
    }

    pub fn draws(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Draw(_))).count()
    }

    pub fn last_positions(&self) -> Option<&[Position]> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Positions(p) => Some(p.as_slice()),
            _ => None,
        })
    }

    pub fn last_colors(&self) -> Option<&[Rgba]> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Colors(c) => Some(c.as_slice()),
            _ => None,
        })
    }

    pub fn last_transform(&self) -> Option<&glm::Mat4> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Transform(m) => Some(m),
            _ => None,
        })
    }

    pub fn uploads(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Positions(_) | Call::Colors(_)))
            .count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Renderer for Recorder {
    fn upload_positions(&mut self, positions: &[Position]) -> Result<(), RenderError> {
        if self.fail_position_uploads {
            return Err(RenderError::Allocation("vertex buffer"));
        }
        self.calls.push(Call::Positions(positions.to_vec()));
        Ok(())
    }

    fn upload_colors(&mut self, colors: &[Rgba]) -> Result<(), RenderError> {
        if self.fail_color_uploads {
            return Err(RenderError::Allocation("color buffer"));
        }
        self.calls.push(Call::Colors(colors.to_vec()));
        Ok(())
    }

    fn set_transform(&mut self, transform: &glm::Mat4) -> Result<(), RenderError> {
        self.calls.push(Call::Transform(*transform));
        Ok(())
    }

    fn draw(&mut self, triangle_count: usize) -> Result<(), RenderError> {
        if self.fail_after_draws == Some(self.draws()) {
            return Err(RenderError::Js("context lost".into()));
        }
        self.calls.push(Call::Draw(triangle_count));
        Ok(())
    }
}
