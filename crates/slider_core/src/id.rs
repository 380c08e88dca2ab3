//! Opaque identifier for slider instances.
//!
//! This type intentionally uses a plain `u64` so the engine does not depend
//! on the element id type of whatever host tree the slider is bound to.

/// Identifies one slider instance for the lifetime of its host.
///
/// Ids are handed out by the host and never reused, so a stale id left in a
/// drag slot can never alias a newer instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SliderId(u64);

impl SliderId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }

    /// The id following this one.
    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl From<u64> for SliderId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}
