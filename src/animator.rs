use nalgebra_glm as glm;

use crate::config::AnimatorConfig;
use crate::error::RenderError;
use crate::geometry::{self, POSITIONS, TRIANGLE_COUNT};
use crate::phase::PhaseState;
use crate::renderer::Renderer;
use crate::strategy::{self, select_strategy, Strategy};
use crate::toggles::Toggles;

/// Owns the phase state and drives one strategy per frame into a [`Renderer`].
pub struct Animator<R> {
    renderer: R,
    config: AnimatorConfig,
    phase: PhaseState,
    toggles: Toggles,
    /// Both toggles were on at the last `configure`.
    startup_combined: bool,
    // Uploaded buffers no longer hold the template.
    positions_dirty: bool,
    colors_dirty: bool,
    last_strategy: Option<Strategy>,
    frames: u64,
}

impl<R: Renderer> Animator<R> {
    pub fn new(renderer: R, config: AnimatorConfig) -> Self {
        Self {
            renderer,
            config,
            phase: PhaseState::INITIAL,
            toggles: Toggles::default(),
            startup_combined: false,
            positions_dirty: true,
            colors_dirty: true,
            last_strategy: None,
            frames: 0,
        }
    }

    /// Uploads the template, resets the phase state and samples the startup toggles.
    ///
    /// Safe to call again; every call starts the animation over.
    pub fn configure(&mut self, toggles: Toggles) -> Result<(), RenderError> {
        self.phase.reset();
        self.toggles = toggles;
        self.startup_combined = toggles.a && toggles.b;
        self.last_strategy = None;
        self.frames = 0;

        // Whatever the renderer holds now, start over from the template.
        self.positions_dirty = true;
        self.colors_dirty = true;
        self.restore_template()?;
        self.renderer.set_transform(&glm::identity())?;

        log::info!(
            "animator configured: toggles={toggles:?} startup_combined={} routing={:?}",
            self.startup_combined,
            self.config.routing
        );
        Ok(())
    }

    /// Runs exactly one strategy and issues the draw. Returns the strategy that ran.
    pub fn on_frame(&mut self, toggles: Toggles) -> Result<Strategy, RenderError> {
        self.toggles = toggles;
        let strategy = select_strategy(toggles, self.config.routing, self.startup_combined);
        if self.last_strategy != Some(strategy) {
            log::debug!("frame {}: {:?} -> {strategy:?}", self.frames, self.last_strategy);
            self.last_strategy = Some(strategy);
        }

        let transform = match strategy {
            Strategy::RigidTransform => {
                self.restore_template()?;
                let pose = strategy::scale_and_rotate(&mut self.phase);
                strategy::model_matrix(&pose, self.config.rotation_axis, self.config.axis_convention)
            }
            Strategy::VertexRewrite => {
                let positions = strategy::pulse(&mut self.phase);
                self.positions_dirty = true;
                self.renderer.upload_positions(&positions)?;
                if self.colors_dirty {
                    self.renderer.upload_colors(&geometry::colors())?;
                    self.colors_dirty = false;
                }
                glm::identity()
            }
            Strategy::Combined => {
                let (positions, colors) = strategy::scatter(&mut self.phase);
                // Marked before uploading: a failed upload may leave either buffer half-written.
                self.positions_dirty = true;
                self.renderer.upload_positions(&positions)?;
                self.colors_dirty = true;
                self.renderer.upload_colors(&colors)?;
                glm::identity()
            }
        };

        self.renderer.set_transform(&transform)?;
        self.renderer.draw(TRIANGLE_COUNT)?;
        self.frames += 1;
        Ok(strategy)
    }

    fn restore_template(&mut self) -> Result<(), RenderError> {
        if self.positions_dirty {
            self.renderer.upload_positions(&POSITIONS)?;
            self.positions_dirty = false;
        }
        if self.colors_dirty {
            self.renderer.upload_colors(&geometry::colors())?;
            self.colors_dirty = false;
        }
        Ok(())
    }

    pub fn phase(&self) -> &PhaseState {
        &self.phase
    }

    /// Toggles seen by the most recent `configure` or `on_frame`.
    pub fn toggles(&self) -> Toggles {
        self.toggles
    }

    pub fn startup_combined(&self) -> bool {
        self.startup_combined
    }

    /// Frames drawn since the last `configure`.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
