use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::DemoConfig;
use crate::error::Error;
use crate::scheduler::{self, FrameLoop};
use crate::Animator;

mod frame;
mod page;
mod render;

pub use frame::AnimationFrames;
pub use page::CheckboxToggles;
pub use render::WebGlRenderer;

/// Page entry point, called once from `index.html` after the module loads.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // Everything is let through until the config has been read.
    console_log::init_with_level(log::Level::Trace).ok();

    run().map_err(|err| {
        log::error!("startup failed: {err}");
        JsValue::from_str(&err.to_string())
    })
}

fn run() -> Result<(), Error> {
    let window = page::window()?;
    let document = page::document(&window)?;

    let config = DemoConfig::load_or_default(page::config_text(&document).as_deref());
    log::set_max_level(config.page.level().to_level_filter());

    let canvas = page::canvas(&document, &config.page.canvas_id)?;
    if config.page.fit_window {
        page::fit_to_window(&window, &canvas)?;
    }

    let renderer = WebGlRenderer::new(&canvas, config.page.clear_color)?;
    let toggles = CheckboxToggles::from_page(&document, &config.page)?;
    log::info!(
        "rendering into #{} ({}x{})",
        config.page.canvas_id,
        canvas.width(),
        canvas.height()
    );

    let animator = Animator::new(renderer, config.animation);
    let frame_loop = Rc::new(RefCell::new(FrameLoop::new(animator, toggles)));
    scheduler::start(Rc::new(AnimationFrames::new(window)), frame_loop)
}
