//! Value-change notification.

use std::fmt;

/// Why a value-changed notification fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cause {
    Init,
    SetRange,
    Drag,
}

impl Cause {
    pub fn as_str(self) -> &'static str {
        match self {
            Cause::Init => "init",
            Cause::SetRange => "set_range",
            Cause::Drag => "drag",
        }
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observer invoked synchronously with `(cause, min, max)`.
///
/// It runs to completion before the operation that triggered it returns.
pub type ValueChangedCallback = Box<dyn FnMut(Cause, f64, f64)>;
