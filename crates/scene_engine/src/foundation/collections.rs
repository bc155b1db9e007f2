//! Specialized collection types
//!
//! Generation-tagged handles for registry slots and the id generator used
//! for attached components.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

pub use slotmap::{SecondaryMap, SlotMap};

slotmap::new_key_type! {
    /// Weak, generation-tagged handle to a registered game object
    ///
    /// A handle outlives the object it points at; once the object is destroyed
    /// the slot's generation moves on and lookups through the stale handle
    /// return `None` instead of reaching a different object.
    pub struct GameObjectId;
}

/// Slot map keyed by game object handles
pub type HandleMap<T> = SlotMap<GameObjectId, T>;

/// Process-unique identifier of an attached component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

static NEXT_COMPONENT_ID: AtomicU64 = AtomicU64::new(0);

impl ComponentId {
    /// Allocate the next unused component id
    pub fn next() -> Self {
        Self(NEXT_COMPONENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw id value
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "component#{}", self.0)
    }
}
