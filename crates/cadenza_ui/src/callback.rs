//! Event slots with a stored no-op default.
//!
//! A [`Callback`] is always callable: the unset state is a stored no-op
//! closure, so call sites never null-check, and clearing a slot re-assigns
//! the no-op rather than leaving an `Option` behind.

use std::fmt;

/// A bound activation callback.
pub struct Callback(Box<dyn FnMut()>);

impl Callback {
    /// Creates an unset slot holding the no-op.
    #[must_use]
    pub fn noop() -> Self {
        Self(Box::new(|| {}))
    }

    /// Creates a slot bound to the given closure.
    #[must_use]
    pub fn bind(callback: impl FnMut() + 'static) -> Self {
        Self(Box::new(callback))
    }

    /// Re-binds the slot to the given closure.
    pub fn set(&mut self, callback: impl FnMut() + 'static) {
        self.0 = Box::new(callback);
    }

    /// Resets the slot back to the no-op.
    pub fn clear(&mut self) {
        self.0 = Box::new(|| {});
    }

    /// Invokes the bound closure (or the no-op).
    pub fn invoke(&mut self) {
        (self.0)();
    }
}

impl Default for Callback {
    fn default() -> Self {
        Self::noop()
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}
