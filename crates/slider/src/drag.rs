//! Document-scoped drag coordination shared by every slider in a document.
//!
//! Pointer-move and pointer-up listeners are attached once, under the
//! [`LISTENER_NAMESPACE`] namespace, when the first slider registers, and
//! detached when the last one unregisters. At most one grip is dragged at a
//! time; the slot names the slider and grip receiving pointer events.

use bus::DocumentListeners;
use core_types::{Grip, PointerEvent, PointerEventKind};
use slider_core::SliderId;
use std::collections::BTreeSet;

pub const LISTENER_NAMESPACE: &str = "range_slider";

/// Receiver of pointer events routed by a [`DragCoordinator`].
pub trait DragTarget {
    /// `track_fraction` is the pointer position along the track, `0.0` at
    /// the left end and `1.0` at the right end.
    fn drag_moved(&mut self, grip: Grip, track_fraction: f64);
    fn drag_released(&mut self, grip: Grip);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveDrag {
    pub slider: SliderId,
    pub grip: Grip,
}

/// A pointer event resolved to the slider it belongs to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragDelivery {
    Moved {
        drag: ActiveDrag,
        track_fraction: f64,
    },
    Released {
        drag: ActiveDrag,
    },
}

impl DragDelivery {
    pub fn slider(&self) -> SliderId {
        match self {
            DragDelivery::Moved { drag, .. } | DragDelivery::Released { drag } => drag.slider,
        }
    }

    pub fn deliver<T: DragTarget + ?Sized>(self, target: &mut T) {
        match self {
            DragDelivery::Moved {
                drag,
                track_fraction,
            } => target.drag_moved(drag.grip, track_fraction),
            DragDelivery::Released { drag } => target.drag_released(drag.grip),
        }
    }
}

#[derive(Debug, Default)]
pub struct DragCoordinator {
    registered: BTreeSet<SliderId>,
    dragging: Option<ActiveDrag>,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sliders sharing the document listeners.
    pub fn ref_count(&self) -> usize {
        self.registered.len()
    }

    pub fn is_registered(&self, slider: SliderId) -> bool {
        self.registered.contains(&slider)
    }

    pub fn dragging(&self) -> Option<ActiveDrag> {
        self.dragging
    }

    /// Returns `false` if `slider` was already registered.
    pub fn register(&mut self, slider: SliderId, listeners: &mut DocumentListeners) -> bool {
        if !self.registered.insert(slider) {
            log::warn!(target: "slider.drag", "slider {} registered twice", slider.as_raw());
            return false;
        }
        if self.registered.len() == 1 {
            for kind in PointerEventKind::ALL {
                listeners.add(kind, LISTENER_NAMESPACE);
                log::trace!(target: "slider.drag", "listening for {}", kind.as_str());
            }
            log::debug!(target: "slider.drag", "attached document listeners");
        }
        true
    }

    /// Returns `false` if `slider` was not registered.
    pub fn unregister(&mut self, slider: SliderId, listeners: &mut DocumentListeners) -> bool {
        if self.dragging.is_some_and(|d| d.slider == slider) {
            log::trace!(target: "slider.drag", "dropping drag of slider {}", slider.as_raw());
            self.dragging = None;
        }
        if !self.registered.remove(&slider) {
            return false;
        }
        if self.registered.is_empty() {
            let removed = listeners.remove_namespace(LISTENER_NAMESPACE);
            log::debug!(target: "slider.drag", "detached {removed} document listeners");
        }
        true
    }

    /// Start dragging `grip` of `slider`, replacing any drag in progress.
    pub fn begin(&mut self, slider: SliderId, grip: Grip) -> bool {
        if !self.is_registered(slider) {
            return false;
        }
        log::trace!(target: "slider.drag", "begin {grip:?} of slider {}", slider.as_raw());
        self.dragging = Some(ActiveDrag { slider, grip });
        true
    }

    pub fn cancel(&mut self) {
        self.dragging = None;
    }

    /// Resolve `event` against the drag slot. Pointer-up always empties the
    /// slot. Events arriving while no listener of this namespace observes
    /// their kind are ignored.
    pub fn route(
        &mut self,
        event: PointerEvent,
        listeners: &DocumentListeners,
    ) -> Option<DragDelivery> {
        let listening = listeners
            .listeners_for(event.kind())
            .any(|l| l.namespace == LISTENER_NAMESPACE);
        if !listening {
            return None;
        }
        match event {
            PointerEvent::Move { track_fraction } => {
                let drag = self.dragging?;
                Some(DragDelivery::Moved {
                    drag,
                    track_fraction,
                })
            }
            PointerEvent::Up => {
                let drag = self.dragging.take()?;
                log::trace!(target: "slider.drag", "release {:?} of slider {}", drag.grip, drag.slider.as_raw());
                Some(DragDelivery::Released { drag })
            }
        }
    }
}
