//! Behaviour scripts
//!
//! Game logic attached to an object as a component. A script type implements
//! [`BehaviourScript`] and registers with `impl_component!(behaviour MyScript)`
//! so typed queries and the registry's update pass can both reach it.

use crate::foundation::time::Time;
use crate::scene::Component;

/// Lifecycle hooks run by the registry for world-active objects
pub trait BehaviourScript: Component {
    /// Called once when the scene starts
    fn on_start(&mut self) {}

    /// Called every game tick
    fn on_update(&mut self, _time: &Time) {}
}
