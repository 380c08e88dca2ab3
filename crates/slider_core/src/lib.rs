//! # slider_core
//!
//! UI-agnostic engine behind a dual-handle range slider.
//!
//! - [`rounding`]: fixed-step and tiered rounding, anchored at zero
//! - [`ValueModel`]: range, limits and the live `(min, max)` selection
//! - [`SliderConfig`]: caller-supplied configuration and its validation
//! - [`SliderError`]: the error taxonomy shared with host layers
//!
//! ## Design Principles
//!
//! This crate does not know about markup, pointer events or listeners. Host
//! layers read configuration from wherever it lives, translate pointer
//! positions into track fractions, and drive the model through its
//! operations.
//!
//! ```
//! use slider_core::{Limits, Range, Rounding, ValueModel};
//!
//! let mut model = ValueModel::new(
//!     Range::new(3.0, 37.0).unwrap(),
//!     Limits::default(),
//!     Rounding::step(10.0).unwrap(),
//!     3.0,
//!     3.0,
//! )
//! .unwrap();
//!
//! model.set_position(15.0, 23.0);
//! assert_eq!((model.current_min(), model.current_max()), (10.0, 20.0));
//!
//! // Track ends are reported exactly, never rounded.
//! model.set_position(3.0, 37.0);
//! assert_eq!((model.current_min(), model.current_max()), (3.0, 37.0));
//! ```

pub mod config;
pub mod error;
pub mod rounding;

mod id;
mod notify;
mod value;

pub use config::{SliderConfig, ValidatedConfig};
pub use error::{ErrorKind, SliderError, SliderResult};
pub use id::SliderId;
pub use notify::{Cause, ValueChangedCallback};
pub use rounding::{Rounding, RoundingTable, RoundingTier, round, round_to_step};
pub use value::{CurrentValue, Limits, Range, ValueModel};
