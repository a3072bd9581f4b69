use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How a non-unit rotation axis is fed into the axis-angle rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisConvention {
    /// Normalize the axis before building the rotation.
    #[default]
    Normalized,
    /// Use the axis components as given. A non-unit axis skews and scales
    /// the rotation rather than only turning it.
    Raw,
}

/// Per-frame strategy routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Routing {
    /// Toggle A alone picks pulse (off) or scale-and-rotate (on). Toggle B
    /// is only sampled at startup and never consulted afterwards.
    #[default]
    Toggle,
    /// When both toggles were on at startup, toggle A on runs scatter
    /// instead of scale-and-rotate.
    StartupCombined,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    pub rotation_axis: [f32; 3],
    pub axis_convention: AxisConvention,
    pub routing: Routing,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            rotation_axis: [0.6, 0.7, 0.6],
            axis_convention: AxisConvention::Normalized,
            routing: Routing::Toggle,
        }
    }
}

/// Page wiring for the browser front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub canvas_id: String,
    pub toggle_a_id: String,
    pub toggle_b_id: String,
    pub clear_color: [f32; 4],
    /// Resize the canvas to the window on load and on every `resize` event.
    pub fit_window: bool,
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            canvas_id: "myGLCanvas".to_owned(),
            toggle_a_id: "first".to_owned(),
            toggle_b_id: "second".to_owned(),
            clear_color: [1.0, 1.0, 1.0, 1.0],
            fit_window: false,
            log_level: "info".to_owned(),
        }
    }
}

impl PageConfig {
    /// Parsed `log_level`, falling back to `Info` for unknown names.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub animation: AnimatorConfig,
    pub page: PageConfig,
}

impl DemoConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parses `text` if present, otherwise defaults. Malformed input is
    /// logged and replaced by defaults.
    pub fn load_or_default(text: Option<&str>) -> Self {
        let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
            return Self::default();
        };
        match Self::from_json(text) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring demo config: {err}");
                Self::default()
            }
        }
    }
}
