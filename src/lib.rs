//! Animated two-tone I-beam rendered with WebGL2.
//!
//! The animation core (geometry, phase state, strategies, animator and frame
//! loop) is target-independent and runs under host `cargo test`. The browser
//! front end lives in the `wasm32`-only `wasm` module.

pub mod animator;
pub mod config;
pub mod error;
pub mod geometry;
pub mod phase;
pub mod renderer;
pub mod scheduler;
pub mod strategy;
pub mod toggles;

pub use animator::Animator;
pub use config::{AnimatorConfig, AxisConvention, DemoConfig, PageConfig, Routing};
pub use error::{ConfigError, Error, PageError, RenderError};
pub use phase::PhaseState;
pub use renderer::Renderer;
pub use scheduler::{FrameLoop, FrameScheduler, ManualStepper};
pub use strategy::Strategy;
pub use toggles::{FixedToggles, ToggleSource, Toggles};

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
