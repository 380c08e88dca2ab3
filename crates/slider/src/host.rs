//! Document that owns slider instances and exposes the plugin surface.
//!
//! Operations are addressed by the slider's element id. While a slider is
//! active its current and range values are mirrored into the element data
//! cache; teardown restores the cache to what it held before init.

use crate::drag::DragCoordinator;
use crate::element_data::{DataSnapshot, ElementDataStore};
use crate::instance::{InstanceState, SliderInstance};
use crate::markup::{self, GripElements};
use crate::options::SliderOptions;
use bus::DocumentListeners;
use core_types::{Grip, PointerEvent};
use html::{Id, Node, assign_node_ids, find_node_by_id, find_node_by_id_mut};
use slider_core::{CurrentValue, Rounding, SliderError, SliderId, SliderResult};
use std::collections::HashMap;

pub const DATA_INITIALIZED: &str = "initialized";

struct Hosted {
    instance: SliderInstance,
    data_before_init: DataSnapshot,
}

pub struct SliderHost {
    dom: Node,
    data: ElementDataStore,
    listeners: DocumentListeners,
    drag: DragCoordinator,
    sliders: HashMap<Id, Hosted>,
    next_id: SliderId,
}

impl SliderHost {
    pub fn new(mut dom: Node) -> Self {
        assign_node_ids(&mut dom);
        Self {
            dom,
            data: ElementDataStore::new(),
            listeners: DocumentListeners::new(),
            drag: DragCoordinator::new(),
            sliders: HashMap::new(),
            next_id: SliderId::from_raw(1),
        }
    }

    pub fn dom(&self) -> &Node {
        &self.dom
    }

    pub fn element(&self, id: Id) -> Option<&Node> {
        find_node_by_id(&self.dom, id)
    }

    /// Mutable access to an element, e.g. to edit its `data-*` attributes
    /// before init.
    pub fn element_mut(&mut self, id: Id) -> Option<&mut Node> {
        find_node_by_id_mut(&mut self.dom, id)
    }

    pub fn data(&self) -> &ElementDataStore {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut ElementDataStore {
        &mut self.data
    }

    pub fn listeners(&self) -> &DocumentListeners {
        &self.listeners
    }

    pub fn drag(&self) -> &DragCoordinator {
        &self.drag
    }

    pub fn slider(&self, element: Id) -> Option<&SliderInstance> {
        self.sliders.get(&element).map(|h| &h.instance)
    }

    pub fn is_initialized(&self, element: Id) -> bool {
        self.slider(element)
            .is_some_and(|s| s.state() == InstanceState::Active)
    }

    /// Bind a slider to `element`.
    ///
    /// Checks run in order: required configuration, then explicit
    /// selectors, then limits and range. An active slider already bound to
    /// `element` is torn down first, so init doubles as re-init.
    pub fn init(&mut self, element: Id, options: SliderOptions) -> SliderResult<SliderId> {
        if self.is_initialized(element) {
            log::warn!(target: "slider.lifecycle", "element {} already hosts a slider; re-initializing", element.0);
            self.teardown(element)?;
        }

        let node = find_node_by_id(&self.dom, element).ok_or_else(|| {
            SliderError::MissingElement {
                option: "element",
                selector: format!("#{}", element.0),
            }
        })?;
        let config = markup::read_config(node, &self.data)?;
        config.check_required()?;
        let elements = markup::resolve_elements(node, &options)?;

        let id = self.next_id;
        let instance = SliderInstance::new(
            id,
            &config,
            elements,
            options.value_changed_callback,
            &mut self.drag,
            &mut self.listeners,
        )?;
        self.next_id = id.next();

        let data_before_init = self.data.snapshot(element);
        self.sliders.insert(
            element,
            Hosted {
                instance,
                data_before_init,
            },
        );
        self.mirror(element);
        log::info!(target: "slider.lifecycle", "slider {} bound to element {}", id.as_raw(), element.0);
        Ok(id)
    }

    fn instance(&self, element: Id) -> SliderResult<&SliderInstance> {
        self.sliders
            .get(&element)
            .map(|h| &h.instance)
            .ok_or(SliderError::NotInitialized)
    }

    fn instance_mut(&mut self, element: Id) -> SliderResult<&mut SliderInstance> {
        self.sliders
            .get_mut(&element)
            .map(|h| &mut h.instance)
            .ok_or(SliderError::NotInitialized)
    }

    fn mirror(&mut self, element: Id) {
        let Some(hosted) = self.sliders.get(&element) else {
            return;
        };
        let s = &hosted.instance;
        let values = [
            (markup::KEY_CUR_MIN, s.get_current_min_value()),
            (markup::KEY_CUR_MAX, s.get_current_max_value()),
            (markup::KEY_RANGE_MIN, s.get_range_min()),
            (markup::KEY_RANGE_MAX, s.get_range_max()),
        ];
        for (key, value) in values {
            if let Ok(v) = value {
                self.data.set(element, key, v.to_string());
            }
        }
        self.data.set(element, DATA_INITIALIZED, "true".to_string());
    }

    pub fn get_range_min(&self, element: Id) -> SliderResult<f64> {
        self.instance(element)?.get_range_min()
    }

    pub fn get_range_max(&self, element: Id) -> SliderResult<f64> {
        self.instance(element)?.get_range_max()
    }

    pub fn get_current_min_value(&self, element: Id) -> SliderResult<f64> {
        self.instance(element)?.get_current_min_value()
    }

    pub fn get_current_max_value(&self, element: Id) -> SliderResult<f64> {
        self.instance(element)?.get_current_max_value()
    }

    pub fn get_rounding(&self, element: Id) -> SliderResult<&Rounding> {
        self.instance(element)?.get_rounding()
    }

    pub fn round_value_according_to_rounding(&self, element: Id, value: f64) -> SliderResult<f64> {
        self.instance(element)?
            .round_value_according_to_rounding(value)
    }

    pub fn is_handle_to_left_extreme(&self, element: Id) -> SliderResult<bool> {
        self.instance(element)?.is_handle_to_left_extreme()
    }

    pub fn is_handle_to_right_extreme(&self, element: Id) -> SliderResult<bool> {
        self.instance(element)?.is_handle_to_right_extreme()
    }

    pub fn set_position(&mut self, element: Id, a: f64, b: f64) -> SliderResult<CurrentValue> {
        let value = self.instance_mut(element)?.set_position(a, b)?;
        self.mirror(element);
        Ok(value)
    }

    pub fn set_range(&mut self, element: Id, min: f64, max: f64) -> SliderResult<CurrentValue> {
        let value = self.instance_mut(element)?.set_range(min, max)?;
        self.mirror(element);
        Ok(value)
    }

    /// Tear down the slider bound to `element` and restore its data cache.
    ///
    /// The torn-down instance stays addressable so later calls report
    /// [`SliderError::AlreadyTornDown`].
    pub fn teardown(&mut self, element: Id) -> SliderResult<()> {
        let hosted = self
            .sliders
            .get_mut(&element)
            .ok_or(SliderError::NotInitialized)?;
        hosted
            .instance
            .teardown(&mut self.drag, &mut self.listeners)?;
        let snapshot = std::mem::take(&mut hosted.data_before_init);
        self.data.restore(element, snapshot);
        Ok(())
    }

    pub fn begin_drag(&mut self, element: Id, grip: Grip) -> SliderResult<()> {
        let hosted = self
            .sliders
            .get_mut(&element)
            .ok_or(SliderError::NotInitialized)?;
        hosted.instance.begin_drag(grip, &mut self.drag)
    }

    /// Start a drag if `target` is a grip of an active slider.
    pub fn pointer_down(&mut self, target: Id) -> bool {
        let found = self.sliders.values_mut().find_map(|h| {
            if h.instance.state() != InstanceState::Active {
                return None;
            }
            let grip = h.instance.elements().grip_of(target)?;
            Some((h, grip))
        });
        match found {
            Some((h, grip)) => h.instance.begin_drag(grip, &mut self.drag).is_ok(),
            None => false,
        }
    }

    /// Route a document pointer event to the slider being dragged. Returns
    /// `true` if a slider received it.
    pub fn dispatch_pointer(&mut self, event: PointerEvent) -> bool {
        let Some(delivery) = self.drag.route(event, &self.listeners) else {
            return false;
        };
        let slider = delivery.slider();
        let Some((&element, hosted)) = self
            .sliders
            .iter_mut()
            .find(|(_, h)| h.instance.id() == slider)
        else {
            self.drag.cancel();
            return false;
        };
        delivery.deliver(&mut hosted.instance);
        self.mirror(element);
        true
    }

    /// Grip and bar elements of the slider bound to `element`.
    pub fn elements(&self, element: Id) -> SliderResult<GripElements> {
        Ok(self.instance(element)?.elements())
    }
}
