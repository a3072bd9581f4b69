use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, HtmlCanvasElement, HtmlInputElement, Window};

use crate::config::PageConfig;
use crate::error::PageError;
use crate::toggles::{ToggleSource, Toggles};

/// Id of the optional `<script type="application/json">` holding a `DemoConfig`.
pub const CONFIG_ELEMENT_ID: &str = "demo-config";

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, PageError> {
    window.document().ok_or(PageError::NoDocument)
}

fn element<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T, PageError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(id.to_owned()))?
        .dyn_into::<T>()
        .map_err(|_| PageError::WrongElement {
            id: id.to_owned(),
            expected,
        })
}

pub fn canvas(document: &Document, id: &str) -> Result<HtmlCanvasElement, PageError> {
    element(document, id, "canvas")
}

pub fn config_text(document: &Document) -> Option<String> {
    document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
}

/// Sizes the canvas to the window now and after every `resize` event.
pub fn fit_to_window(window: &Window, canvas: &HtmlCanvasElement) -> Result<(), PageError> {
    let resize = {
        let window = window.clone();
        let canvas = canvas.clone();
        move || {
            let size = |v: Result<wasm_bindgen::JsValue, _>| v.ok().and_then(|v| v.as_f64());
            if let (Some(w), Some(h)) = (size(window.inner_width()), size(window.inner_height())) {
                canvas.set_width(w as u32);
                canvas.set_height(h as u32);
            }
        }
    };
    resize();

    let closure = Closure::wrap(Box::new(resize) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .map_err(|_| PageError::Listener("resize"))?;
    closure.forget();
    Ok(())
}

/// The two mode checkboxes.
pub struct CheckboxToggles {
    a: HtmlInputElement,
    b: HtmlInputElement,
}

impl CheckboxToggles {
    pub fn from_page(document: &Document, config: &PageConfig) -> Result<Self, PageError> {
        Ok(Self {
            a: element(document, &config.toggle_a_id, "checkbox")?,
            b: element(document, &config.toggle_b_id, "checkbox")?,
        })
    }
}

impl ToggleSource for CheckboxToggles {
    fn read(&self) -> Toggles {
        Toggles::new(self.a.checked(), self.b.checked())
    }
}
