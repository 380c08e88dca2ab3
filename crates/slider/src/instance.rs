//! One slider bound to one element.

use crate::drag::{DragCoordinator, DragTarget};
use crate::markup::GripElements;
use bus::DocumentListeners;
use core_types::Grip;
use slider_core::{
    Cause, CurrentValue, Rounding, SliderConfig, SliderError, SliderId, SliderResult,
    ValueChangedCallback, ValueModel,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstanceState {
    Uninitialized,
    Active,
    TornDown,
}

pub struct SliderInstance {
    id: SliderId,
    state: InstanceState,
    model: ValueModel,
    elements: GripElements,
    callback: Option<ValueChangedCallback>,
    /// Value of the grip held still during a drag.
    drag_anchor: Option<f64>,
}

impl std::fmt::Debug for SliderInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderInstance")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("model", &self.model)
            .field("elements", &self.elements)
            .field("drag_anchor", &self.drag_anchor)
            .finish_non_exhaustive()
    }
}

impl SliderInstance {
    /// Validate `config`, register with the drag coordinator and report the
    /// initial value with [`Cause::Init`].
    ///
    /// Nothing is registered when validation fails.
    pub fn new(
        id: SliderId,
        config: &SliderConfig,
        elements: GripElements,
        callback: Option<ValueChangedCallback>,
        drag: &mut DragCoordinator,
        listeners: &mut DocumentListeners,
    ) -> SliderResult<Self> {
        let model = config.validate()?.into_model()?;
        let mut instance = Self {
            id,
            state: InstanceState::Uninitialized,
            model,
            elements,
            callback,
            drag_anchor: None,
        };

        drag.register(id, listeners);
        instance.state = InstanceState::Active;
        log::debug!(
            target: "slider.lifecycle",
            "slider {} active at [{}, {}]",
            id.as_raw(),
            instance.model.current_min(),
            instance.model.current_max()
        );
        instance.notify(Cause::Init);
        Ok(instance)
    }

    pub fn id(&self) -> SliderId {
        self.id
    }

    pub fn state(&self) -> InstanceState {
        self.state
    }

    pub fn elements(&self) -> GripElements {
        self.elements
    }

    fn ensure_active(&self) -> SliderResult<()> {
        match self.state {
            InstanceState::Active => Ok(()),
            InstanceState::Uninitialized => Err(SliderError::NotInitialized),
            InstanceState::TornDown => Err(SliderError::AlreadyTornDown),
        }
    }

    fn notify(&mut self, cause: Cause) {
        let CurrentValue { min, max } = self.model.current();
        if let Some(cb) = self.callback.as_mut() {
            cb(cause, min, max);
        }
    }

    pub fn get_range_min(&self) -> SliderResult<f64> {
        self.ensure_active()?;
        Ok(self.model.range_min())
    }

    pub fn get_range_max(&self) -> SliderResult<f64> {
        self.ensure_active()?;
        Ok(self.model.range_max())
    }

    pub fn get_current_min_value(&self) -> SliderResult<f64> {
        self.ensure_active()?;
        Ok(self.model.current_min())
    }

    pub fn get_current_max_value(&self) -> SliderResult<f64> {
        self.ensure_active()?;
        Ok(self.model.current_max())
    }

    pub fn get_rounding(&self) -> SliderResult<&Rounding> {
        self.ensure_active()?;
        Ok(self.model.rounding())
    }

    pub fn round_value_according_to_rounding(&self, value: f64) -> SliderResult<f64> {
        self.ensure_active()?;
        Ok(self.model.round(value))
    }

    pub fn is_handle_to_left_extreme(&self) -> SliderResult<bool> {
        self.ensure_active()?;
        Ok(self.model.is_at_lower_extreme())
    }

    pub fn is_handle_to_right_extreme(&self) -> SliderResult<bool> {
        self.ensure_active()?;
        Ok(self.model.is_at_upper_extreme())
    }

    /// Move both grips. Notifies with [`Cause::Drag`] only when the
    /// resulting value differs from the previous one.
    pub fn set_position(&mut self, a: f64, b: f64) -> SliderResult<CurrentValue> {
        self.ensure_active()?;
        Ok(self.apply_position(a, b))
    }

    fn apply_position(&mut self, a: f64, b: f64) -> CurrentValue {
        let before = self.model.current();
        let after = self.model.set_position(a, b);
        if after != before {
            self.notify(Cause::Drag);
        }
        after
    }

    /// Replace the range. Always notifies with [`Cause::SetRange`].
    pub fn set_range(&mut self, min: f64, max: f64) -> SliderResult<CurrentValue> {
        self.ensure_active()?;
        let value = self.model.set_range(min, max)?;
        log::debug!(target: "slider.lifecycle", "slider {} range [{min}, {max}]", self.id.as_raw());
        self.notify(Cause::SetRange);
        Ok(value)
    }

    /// Start dragging `grip`; the other grip stays where it is.
    pub fn begin_drag(&mut self, grip: Grip, drag: &mut DragCoordinator) -> SliderResult<()> {
        self.ensure_active()?;
        let CurrentValue { min, max } = self.model.current();
        let anchor = match grip {
            Grip::Left => max,
            Grip::Right => min,
        };
        log::trace!(target: "slider.drag", "{grip:?} grip moves, {:?} grip held at {anchor}", grip.other());
        self.drag_anchor = Some(anchor);
        drag.begin(self.id, grip);
        Ok(())
    }

    /// Unregister from the coordinator and become unusable.
    pub fn teardown(
        &mut self,
        drag: &mut DragCoordinator,
        listeners: &mut DocumentListeners,
    ) -> SliderResult<()> {
        self.ensure_active()?;
        drag.unregister(self.id, listeners);
        self.drag_anchor = None;
        self.callback = None;
        self.state = InstanceState::TornDown;
        log::debug!(target: "slider.lifecycle", "slider {} torn down", self.id.as_raw());
        Ok(())
    }
}

impl DragTarget for SliderInstance {
    fn drag_moved(&mut self, grip: Grip, track_fraction: f64) {
        if self.state != InstanceState::Active {
            return;
        }
        let Some(anchor) = self.drag_anchor else {
            return;
        };
        let value = self.model.value_at_fraction(track_fraction);
        let CurrentValue { min, max } = self.apply_position(anchor, value);
        log::trace!(target: "slider.drag", "{grip:?} at {track_fraction} -> [{min}, {max}]");
    }

    fn drag_released(&mut self, _grip: Grip) {
        self.drag_anchor = None;
    }
}
