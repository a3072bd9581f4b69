//! Self-rescheduling frame loop.
//!
//! Each frame callback runs one animator frame and then asks the scheduler
//! for the next one. In the browser the scheduler is `requestAnimationFrame`;
//! tests step frames by hand with [`ManualStepper`].

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::animator::Animator;
use crate::error::{Error, RenderError};
use crate::renderer::Renderer;
use crate::strategy::Strategy;
use crate::toggles::ToggleSource;

pub type FrameCallback = Box<dyn FnOnce()>;

pub trait FrameScheduler {
    /// Runs `callback` once, at the next frame boundary.
    fn request_next_frame(&self, callback: FrameCallback) -> Result<(), Error>;
}

/// An [`Animator`] paired with the toggles it polls.
pub struct FrameLoop<R, T> {
    animator: Animator<R>,
    toggles: T,
}

impl<R: Renderer, T: ToggleSource> FrameLoop<R, T> {
    pub fn new(animator: Animator<R>, toggles: T) -> Self {
        Self { animator, toggles }
    }

    pub fn configure(&mut self) -> Result<(), RenderError> {
        let toggles = self.toggles.read();
        self.animator.configure(toggles)
    }

    pub fn tick(&mut self) -> Result<Strategy, RenderError> {
        let toggles = self.toggles.read();
        self.animator.on_frame(toggles)
    }

    pub fn animator(&self) -> &Animator<R> {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut Animator<R> {
        &mut self.animator
    }
}

/// Configures the loop and requests its first frame.
///
/// The loop keeps itself alive through the scheduler. A frame that fails is
/// logged and ends the loop.
pub fn start<S, R, T>(scheduler: Rc<S>, frame_loop: Rc<RefCell<FrameLoop<R, T>>>) -> Result<(), Error>
where
    S: FrameScheduler + 'static,
    R: Renderer + 'static,
    T: ToggleSource + 'static,
{
    frame_loop.borrow_mut().configure()?;
    schedule(scheduler, frame_loop)
}

fn schedule<S, R, T>(scheduler: Rc<S>, frame_loop: Rc<RefCell<FrameLoop<R, T>>>) -> Result<(), Error>
where
    S: FrameScheduler + 'static,
    R: Renderer + 'static,
    T: ToggleSource + 'static,
{
    let next = Rc::clone(&scheduler);
    scheduler.request_next_frame(Box::new(move || {
        let result = frame_loop.borrow_mut().tick();
        if let Err(err) = result {
            log::error!("frame loop stopped: {err}");
            return;
        }
        if let Err(err) = schedule(next, frame_loop) {
            log::error!("frame loop stopped: {err}");
        }
    }))
}

/// Queues frame callbacks until [`step`](ManualStepper::step) runs them.
#[derive(Default)]
pub struct ManualStepper {
    pending: RefCell<VecDeque<FrameCallback>>,
}

impl ManualStepper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Runs the oldest pending callback. Returns `false` if none was queued.
    pub fn step(&self) -> bool {
        let callback = self.pending.borrow_mut().pop_front();
        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Steps up to `frames` times, stopping early once nothing is pending.
    pub fn run(&self, frames: usize) -> usize {
        (0..frames).take_while(|_| self.step()).count()
    }
}

impl FrameScheduler for ManualStepper {
    fn request_next_frame(&self, callback: FrameCallback) -> Result<(), Error> {
        self.pending.borrow_mut().push_back(callback);
        Ok(())
    }
}
