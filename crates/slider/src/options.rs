//! Caller-supplied options for binding a slider to an element.

use slider_core::{Cause, ValueChangedCallback};
use std::fmt;

pub const DEFAULT_LEFT_GRIP_SELECTOR: &str = ".range-grip-left";
pub const DEFAULT_RIGHT_GRIP_SELECTOR: &str = ".range-grip-right";
pub const DEFAULT_VALUE_BAR_SELECTOR: &str = ".range-bar";

/// Selectors left as `None` fall back to the defaults above, and a default
/// that matches nothing is tolerated. A selector given explicitly must
/// match an element inside the slider.
#[derive(Default)]
pub struct SliderOptions {
    pub left_grip_selector: Option<String>,
    pub right_grip_selector: Option<String>,
    pub value_bar_selector: Option<String>,
    pub value_changed_callback: Option<ValueChangedCallback>,
}

impl SliderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left_grip_selector(mut self, selector: impl Into<String>) -> Self {
        self.left_grip_selector = Some(selector.into());
        self
    }

    pub fn right_grip_selector(mut self, selector: impl Into<String>) -> Self {
        self.right_grip_selector = Some(selector.into());
        self
    }

    pub fn value_bar_selector(mut self, selector: impl Into<String>) -> Self {
        self.value_bar_selector = Some(selector.into());
        self
    }

    pub fn on_value_changed(mut self, callback: impl FnMut(Cause, f64, f64) + 'static) -> Self {
        self.value_changed_callback = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for SliderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderOptions")
            .field("left_grip_selector", &self.left_grip_selector)
            .field("right_grip_selector", &self.right_grip_selector)
            .field("value_bar_selector", &self.value_bar_selector)
            .field(
                "value_changed_callback",
                &self.value_changed_callback.as_ref().map(|_| "<callback>"),
            )
            .finish()
    }
}
