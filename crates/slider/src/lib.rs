//! Dual-handle range sliders bound to document elements.
//!
//! [`SliderHost`] owns a document tree, the per-element data cache, the
//! document pointer listeners and the shared [`DragCoordinator`]. Sliders
//! are bound to elements with [`SliderHost::init`] and then driven by
//! element id:
//!
//! ```
//! use html::{Node, query_descendant};
//! use slider::{SliderHost, SliderOptions};
//!
//! let dom = Node::document(vec![Node::element(
//!     "div",
//!     vec![
//!         ("id", Some("price")),
//!         ("data-rounding", Some("10")),
//!         ("data-range_min", Some("0")),
//!         ("data-range_max", Some("1000")),
//!         ("data-cur_min", Some("200")),
//!         ("data-cur_max", Some("500")),
//!     ],
//!     Vec::new(),
//! )]);
//! let mut host = SliderHost::new(dom);
//! let el = query_descendant(host.dom(), "#price").unwrap();
//!
//! host.init(el, SliderOptions::new()).unwrap();
//! host.set_position(el, 333.0, 777.0).unwrap();
//! assert_eq!(host.get_current_min_value(el), Ok(330.0));
//! assert_eq!(host.data().get(el, "cur_max"), Some("780"));
//! ```

mod drag;
mod element_data;
mod host;
mod instance;
mod markup;
mod options;

pub use drag::{ActiveDrag, DragCoordinator, DragDelivery, DragTarget, LISTENER_NAMESPACE};
pub use element_data::{DataSnapshot, ElementDataStore};
pub use host::{DATA_INITIALIZED, SliderHost};
pub use instance::{InstanceState, SliderInstance};
pub use markup::{GripElements, read_config, resolve_elements};
pub use options::{
    DEFAULT_LEFT_GRIP_SELECTOR, DEFAULT_RIGHT_GRIP_SELECTOR, DEFAULT_VALUE_BAR_SELECTOR,
    SliderOptions,
};
