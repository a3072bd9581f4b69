use std::cell::Cell;

/// The two UI checkboxes, sampled together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Toggles {
    pub a: bool,
    pub b: bool,
}

impl Toggles {
    pub fn new(a: bool, b: bool) -> Self {
        Self { a, b }
    }
}

/// Polled once per frame.
pub trait ToggleSource {
    fn read(&self) -> Toggles;
}

/// Settable toggles for tests and headless hosts.
#[derive(Debug, Default)]
pub struct FixedToggles(Cell<Toggles>);

impl FixedToggles {
    pub fn new(toggles: Toggles) -> Self {
        Self(Cell::new(toggles))
    }

    pub fn set(&self, toggles: Toggles) {
        self.0.set(toggles);
    }
}

impl ToggleSource for FixedToggles {
    fn read(&self) -> Toggles {
        self.0.get()
    }
}

impl<T: ToggleSource + ?Sized> ToggleSource for std::rc::Rc<T> {
    fn read(&self) -> Toggles {
        (**self).read()
    }
}
