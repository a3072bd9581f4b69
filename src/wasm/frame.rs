use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Window;

use crate::error::Error;
use crate::scheduler::{FrameCallback, FrameScheduler};

/// Schedules frames with `requestAnimationFrame`.
pub struct AnimationFrames {
    window: Window,
}

impl AnimationFrames {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for AnimationFrames {
    fn request_next_frame(&self, callback: FrameCallback) -> Result<(), Error> {
        // Each frame gets a fresh one-shot closure; JS frees it after the call.
        let callback = Closure::once_into_js(callback);
        self.window
            .request_animation_frame(callback.unchecked_ref())
            .map(drop)
            .map_err(|err| Error::Schedule(format!("{err:?}")))
    }
}
