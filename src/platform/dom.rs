//! DOM handles for the demo page

use std::fmt;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlButtonElement, HtmlCanvasElement, HtmlFormElement, HtmlInputElement, Window,
};

use crate::form::{FieldId, FormValues};
use crate::layout::CanvasSize;

/// Element ids of the page
pub mod ids {
    pub const FORM: &str = "ball-form";
    pub const CANVAS: &str = "canvas";
    pub const START_BUTTON: &str = "startButton";
    pub const STOP_BUTTON: &str = "stopButton";
}

/// CSS class added to the form after a submission passes validation
pub const VALIDATED_CLASS: &str = "was-validated";

/// A required element is missing or has the wrong type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingElement(pub &'static str);

impl fmt::Display for MissingElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing or mistyped element #{}", self.0)
    }
}

impl std::error::Error for MissingElement {}

/// Handles to every element the demo touches
#[derive(Clone)]
pub struct Dom {
    pub window: Window,
    pub document: Document,
    pub form: HtmlFormElement,
    pub canvas: HtmlCanvasElement,
    pub start_button: HtmlButtonElement,
    pub stop_button: HtmlButtonElement,
    /// px, py, vx, vy in `FieldId::ALL` order
    pub inputs: [HtmlInputElement; 4],
}

fn element<T: JsCast>(document: &Document, id: &'static str) -> Result<T, MissingElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or(MissingElement(id))
}

impl Dom {
    /// Look up every element; fails on the first one missing
    pub fn find() -> Result<Self, MissingElement> {
        let window = web_sys::window().ok_or(MissingElement("window"))?;
        let document = window.document().ok_or(MissingElement("document"))?;

        let inputs: [HtmlInputElement; 4] = [
            element(&document, FieldId::PosX.element_id())?,
            element(&document, FieldId::PosY.element_id())?,
            element(&document, FieldId::VelX.element_id())?,
            element(&document, FieldId::VelY.element_id())?,
        ];

        Ok(Self {
            form: element(&document, ids::FORM)?,
            canvas: element(&document, ids::CANVAS)?,
            start_button: element(&document, ids::START_BUTTON)?,
            stop_button: element(&document, ids::STOP_BUTTON)?,
            inputs,
            window,
            document,
        })
    }

    pub fn input(&self, field: FieldId) -> &HtmlInputElement {
        &self.inputs[field.index()]
    }

    /// Current text of all four fields
    pub fn read_form(&self) -> FormValues {
        FormValues::new(
            self.input(FieldId::PosX).value(),
            self.input(FieldId::PosY).value(),
            self.input(FieldId::VelX).value(),
            self.input(FieldId::VelY).value(),
        )
    }

    pub fn write_field(&self, field: FieldId, value: &str) {
        self.input(field).set_value(value);
    }

    pub fn write_form(&self, values: &FormValues) {
        for field in FieldId::ALL {
            self.write_field(field, values.get(field));
        }
    }

    /// Lock or unlock the inputs and the start button
    pub fn set_controls_disabled(&self, disabled: bool) {
        for input in &self.inputs {
            input.set_disabled(disabled);
        }
        self.start_button.set_disabled(disabled);
    }

    pub fn mark_validated(&self) {
        if let Err(e) = self.form.class_list().add_1(VALIDATED_CLASS) {
            log::warn!("Could not mark form validated: {:?}", e);
        }
    }

    /// Blocking alert dialog
    pub fn alert(&self, message: &str) {
        if self.window.alert_with_message(message).is_err() {
            log::warn!("alert() failed: {}", message);
        }
    }

    /// Viewport width in CSS pixels, `None` if the browser won't say
    pub fn viewport_width(&self) -> Option<f64> {
        self.window.inner_width().ok().and_then(|w| w.as_f64())
    }

    pub fn set_canvas_size(&self, size: CanvasSize) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }
}
